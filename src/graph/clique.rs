use std::fmt;

use itertools::Itertools;
#[cfg(feature = "serde")]
use serde::Serialize;
use smallvec::SmallVec;

/// A set of vertex labels in canonical form.
///
/// Members are kept sorted and free of duplicates, so two cliques holding the
/// same labels compare and hash equal regardless of the order they were built in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Clique<V> {
    members: SmallVec<[V; 4]>,
}

impl<V: Ord> Clique<V> {
    /// Returns the number of vertices in the clique.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[must_use]
    pub fn contains(&self, vertex: &V) -> bool {
        self.members.binary_search(vertex).is_ok()
    }

    /// Returns the members in ascending order.
    #[must_use]
    pub fn members(&self) -> &[V] {
        &self.members
    }

    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.members.iter()
    }

    /// Returns `true` if every member of `self` is also a member of `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.iter().all(|vertex| other.contains(vertex))
    }
}

impl<V: Ord> FromIterator<V> for Clique<V> {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        let mut members: SmallVec<[V; 4]> = iter.into_iter().collect();
        members.sort_unstable();
        members.dedup();
        Self { members }
    }
}

impl<V> IntoIterator for Clique<V> {
    type Item = V;
    type IntoIter = smallvec::IntoIter<[V; 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a Clique<V> {
    type Item = &'a V;
    type IntoIter = std::slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

/// Members joined by commas, e.g. `co,de,ka,ta`.
impl<V: fmt::Display> fmt::Display for Clique<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.members.iter().join(","))
    }
}
