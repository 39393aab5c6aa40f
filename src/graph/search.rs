use std::collections::{BTreeSet, HashMap};

#[cfg(feature = "serde")]
use serde::Serialize;

use super::{Clique, Graph, Label};

/// Counters collected while enumerating maximal cliques.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SearchStats {
    /// Number of `(R, P, X)` states visited, including memo hits
    pub states: usize,
    /// Number of states answered from the memo
    ///
    /// States include the partial clique `R`, and a single run never builds the
    /// same `R` twice, so this stays zero unless a state is expanded again.
    pub memo_hits: usize,
    /// Deepest recursion level reached
    pub depth: usize,
}

/// Frozen copy of a search state, used as the memo key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct State<V> {
    r: Clique<V>,
    p: Clique<V>,
    x: Clique<V>,
}

impl<V: Label> State<V> {
    fn snapshot(r: &BTreeSet<V>, p: &BTreeSet<V>, x: &BTreeSet<V>) -> Self {
        Self {
            r: r.iter().cloned().collect(),
            p: p.iter().cloned().collect(),
            x: x.iter().cloned().collect(),
        }
    }
}

/// Bron-Kerbosch with pivoting over a borrowed graph.
pub(super) struct BronKerbosch<'g, V: Label> {
    graph: &'g Graph<V>,
    memo: HashMap<State<V>, Vec<Clique<V>>>,
    found: Vec<Clique<V>>,
    stats: SearchStats,
}

impl<'g, V: Label> BronKerbosch<'g, V> {
    pub(super) fn new(graph: &'g Graph<V>) -> Self {
        Self {
            graph,
            memo: HashMap::new(),
            found: Vec::new(),
            stats: SearchStats::default(),
        }
    }

    /// Runs the search from `R = {}`, `P = V(G)`, `X = {}`.
    pub(super) fn run(mut self) -> (Vec<Clique<V>>, SearchStats) {
        let p = self.graph.vertices().cloned().collect();
        self.expand(&mut BTreeSet::new(), p, BTreeSet::new(), 0);
        log::debug!(
            "found {} maximal cliques ({} states, {} memo hits, depth {})",
            self.found.len(),
            self.stats.states,
            self.stats.memo_hits,
            self.stats.depth
        );
        (self.found, self.stats)
    }

    fn expand(
        &mut self,
        r: &mut BTreeSet<V>,
        mut p: BTreeSet<V>,
        mut x: BTreeSet<V>,
        depth: usize,
    ) {
        self.stats.states += 1;
        self.stats.depth = self.stats.depth.max(depth);

        let key = State::snapshot(r, &p, &x);
        if let Some(cached) = self.memo.get(&key) {
            self.stats.memo_hits += 1;
            self.found.extend(cached.iter().cloned());
            return;
        }
        let start = self.found.len();

        if p.is_empty() && x.is_empty() {
            if !r.is_empty() {
                log::trace!("maximal clique {r:?}");
                self.found.push(r.iter().cloned().collect());
            }
        } else {
            let graph = self.graph;
            let branches: Vec<V> = match graph.choose_pivot(&p, &x) {
                Some(pivot) => p.difference(graph.adjacent(&pivot)).cloned().collect(),
                None => p.iter().cloned().collect(),
            };

            for v in branches {
                let neighbors = graph.adjacent(&v);
                let p_next = p.intersection(neighbors).cloned().collect();
                let x_next = x.intersection(neighbors).cloned().collect();

                r.insert(v.clone());
                self.expand(r, p_next, x_next, depth + 1);
                r.remove(&v);

                p.remove(&v);
                x.insert(v);
            }
        }

        self.memo.insert(key, self.found[start..].to_vec());
    }
}

#[cfg(test)]
mod test {
    use std::collections::BTreeSet;

    use super::*;

    fn triangle_pendant() -> Graph<u32> {
        [(1, 2), (2, 3), (1, 3), (3, 4)].into_iter().collect()
    }

    #[test]
    fn repeated_state_is_answered_from_memo() {
        let graph = triangle_pendant();
        let mut search = BronKerbosch::new(&graph);
        let p: BTreeSet<u32> = graph.vertices().copied().collect();

        search.expand(&mut BTreeSet::new(), p.clone(), BTreeSet::new(), 0);
        let states = search.stats.states;
        assert_eq!(search.stats.memo_hits, 0);
        assert_eq!(search.found.len(), 2);

        search.expand(&mut BTreeSet::new(), p, BTreeSet::new(), 0);
        assert_eq!(search.stats.memo_hits, 1);
        assert_eq!(search.stats.states, states + 1);
        assert_eq!(search.found[..2], search.found[2..]);
    }

    #[test]
    fn memo_holds_only_cliques_of_its_state() {
        let graph = triangle_pendant();
        let mut search = BronKerbosch::new(&graph);

        let mut r = BTreeSet::from([3]);
        search.expand(&mut r, BTreeSet::from([4]), BTreeSet::new(), 1);
        search.expand(&mut r, BTreeSet::from([1, 2]), BTreeSet::new(), 1);

        let key = State::snapshot(
            &BTreeSet::from([3]),
            &BTreeSet::from([4]),
            &BTreeSet::new(),
        );
        assert_eq!(search.memo[&key], vec![Clique::from_iter([3, 4])]);

        let key = State::snapshot(
            &BTreeSet::from([3]),
            &BTreeSet::from([1, 2]),
            &BTreeSet::new(),
        );
        assert_eq!(search.memo[&key], vec![Clique::from_iter([1, 2, 3])]);
        assert_eq!(search.found.len(), 2);
    }
}
