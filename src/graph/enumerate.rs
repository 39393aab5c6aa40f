use itertools::Itertools;

use super::{Clique, Graph, Label, SearchStats, search::BronKerbosch};

/// Maximal cliques bigger than this make the power set expensive.
const LARGE_CLIQUE: usize = 20;

impl<V: Label> Graph<V> {
    /// Returns every maximal clique of the graph.
    ///
    /// The set of cliques is the same on every call; only the enumeration order
    /// is left unspecified.
    #[must_use]
    pub fn find_maximal_cliques(&self) -> Vec<Clique<V>> {
        self.maximal_cliques_with_stats().0
    }

    /// Same as [`Graph::find_maximal_cliques`], also returning search counters.
    #[must_use]
    pub fn maximal_cliques_with_stats(&self) -> (Vec<Clique<V>>, SearchStats) {
        BronKerbosch::new(self).run()
    }

    /// Returns every clique of the graph, smallest first.
    ///
    /// This is the union of the non-empty subsets of all maximal cliques, so it
    /// grows as `2^k` in the size `k` of the largest clique.
    #[must_use]
    pub fn find_all_cliques(&self) -> Vec<Clique<V>> {
        self.find_maximal_cliques()
            .into_iter()
            .inspect(|maximal| {
                if maximal.len() > LARGE_CLIQUE {
                    log::warn!(
                        "expanding every subset of a maximal clique of {} vertices",
                        maximal.len()
                    );
                }
            })
            .flat_map(|maximal| {
                maximal
                    .into_iter()
                    .powerset()
                    .filter(|subset| !subset.is_empty())
                    .map(Clique::from_iter)
            })
            .inspect(|clique| {
                debug_assert!(
                    self.is_clique(clique).unwrap_or(false),
                    "subsets of a clique are cliques"
                );
            })
            .unique()
            .sorted_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)))
            .collect()
    }

    /// Returns every distinct clique with exactly `size` members, in canonical order.
    #[must_use]
    pub fn cliques_of_size(&self, size: usize) -> Vec<Clique<V>> {
        if size == 0 {
            return Vec::new();
        }
        self.find_maximal_cliques()
            .iter()
            .filter(|maximal| maximal.len() >= size)
            .flat_map(|maximal| {
                maximal
                    .iter()
                    .cloned()
                    .combinations(size)
                    .map(Clique::from_iter)
            })
            .unique()
            .sorted()
            .collect()
    }

    /// Returns a clique of maximum size, or `None` for an empty graph.
    ///
    /// Among several maximum cliques the first in canonical order is chosen.
    #[must_use]
    pub fn largest_clique(&self) -> Option<Clique<V>> {
        self.find_maximal_cliques()
            .into_iter()
            .min_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)))
    }
}
