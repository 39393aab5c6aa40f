mod clique;
pub use clique::Clique;
mod error;
pub use error::{Error, Result};
mod query;
pub use query::QueryCliques;
mod search;
pub use search::SearchStats;
mod enumerate;

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt::Debug,
    hash::Hash,
};

/// Requirements on a vertex label.
///
/// Labels are ordered so that sets of them have a canonical form, which keeps
/// pivot selection deterministic and makes snapshots of the search state hashable.
pub trait Label: Clone + Eq + Hash + Ord + Debug {}

impl<T> Label for T where T: Clone + Eq + Hash + Ord + Debug {}

/// An undirected graph without self-loops or parallel edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<V: Label = String> {
    adjacency: BTreeMap<V, BTreeSet<V>>,
}

impl<V: Label> Default for Graph<V> {
    fn default() -> Self {
        Self {
            adjacency: BTreeMap::new(),
        }
    }
}

impl<V: Label> Graph<V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `vertex` with no neighbours if it is not already present.
    pub fn add_vertex(&mut self, vertex: V) {
        self.adjacency.entry(vertex).or_default();
    }

    /// Connects `a` and `b`, adding either vertex if it is new.
    ///
    /// Inserting an edge twice has no further effect. A loop (`a == b`) only
    /// registers the vertex.
    pub fn add_edge(&mut self, a: V, b: V) {
        if a == b {
            log::trace!("ignoring loop on {a:?}");
            self.add_vertex(a);
            return;
        }
        self.adjacency.entry(a.clone()).or_default().insert(b.clone());
        self.adjacency.entry(b).or_default().insert(a);
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns the number of (undirected) edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    #[must_use]
    pub fn contains(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Iterates the vertices in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.adjacency.keys()
    }

    /// Returns the neighbours of `vertex`.
    pub fn neighbors(&self, vertex: &V) -> Result<&BTreeSet<V>> {
        self.adjacency
            .get(vertex)
            .ok_or_else(|| Error::UnknownVertex(format!("{vertex:?}")))
    }

    /// Returns `true` if every pair of distinct `vertices` is connected.
    ///
    /// Fails if any of the vertices is not in the graph.
    pub fn is_clique<'v>(&self, vertices: impl IntoIterator<Item = &'v V>) -> Result<bool>
    where
        V: 'v,
    {
        let vertices = vertices
            .into_iter()
            .map(|vertex| self.neighbors(vertex).map(|neighbors| (vertex, neighbors)))
            .collect::<Result<Vec<_>>>()?;

        Ok(vertices.iter().all(|&(vertex, neighbors)| {
            vertices
                .iter()
                .all(|&(other, _)| other == vertex || neighbors.contains(other))
        }))
    }

    /// Chooses the vertex of `p ∪ x` with the most neighbours in `p`.
    ///
    /// Ties go to the first vertex in label order. Returns `None` only when both
    /// sets are empty.
    ///
    /// # Panics
    /// Panics if `p` or `x` hold a vertex that is not in the graph.
    #[must_use]
    pub fn choose_pivot(&self, p: &BTreeSet<V>, x: &BTreeSet<V>) -> Option<V> {
        let mut best: Option<(&V, usize)> = None;
        for vertex in p.union(x) {
            let degree = self.adjacent(vertex).intersection(p).count();
            if best.is_none_or(|(_, max)| degree > max) {
                best = Some((vertex, degree));
            }
        }
        best.map(|(vertex, _)| vertex.clone())
    }

    /// Neighbours of a vertex already known to be in the graph.
    pub(crate) fn adjacent(&self, vertex: &V) -> &BTreeSet<V> {
        self.adjacency
            .get(vertex)
            .expect("search states only hold vertices of the graph")
    }
}

impl<V: Label> Extend<(V, V)> for Graph<V> {
    fn extend<T: IntoIterator<Item = (V, V)>>(&mut self, iter: T) {
        for (a, b) in iter {
            self.add_edge(a, b);
        }
    }
}

impl<V: Label> FromIterator<(V, V)> for Graph<V> {
    fn from_iter<T: IntoIterator<Item = (V, V)>>(iter: T) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}
