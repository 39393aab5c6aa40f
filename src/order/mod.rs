//! Ordering of vertices along directed edges.

#[cfg(test)]
mod test;

use std::{
    collections::{HashMap, HashSet, VecDeque},
    hash::Hash,
};

/// Orders `nodes` so that for every edge `(a, b)` the node `a` comes before `b`.
///
/// Edges with an endpoint outside of `nodes` are ignored. Nodes that sit on a
/// cycle, or after one, are left out, so a result shorter than `nodes` means the
/// edges were not acyclic. Nodes become ready in the order they are given.
pub fn topological_sort<N>(
    nodes: impl IntoIterator<Item = N>,
    edges: impl IntoIterator<Item = (N, N)>,
) -> Vec<N>
where
    N: Clone + Eq + Hash,
{
    let mut order: Vec<N> = Vec::new();
    let mut successors: HashMap<N, Vec<N>> = HashMap::new();
    let mut in_degree: HashMap<N, usize> = HashMap::new();

    for node in nodes {
        if in_degree.insert(node.clone(), 0).is_none() {
            successors.insert(node.clone(), Vec::new());
            order.push(node);
        }
    }

    let mut seen: HashSet<(N, N)> = HashSet::new();
    for (a, b) in edges {
        if !in_degree.contains_key(&a) || !in_degree.contains_key(&b) {
            continue;
        }
        if !seen.insert((a.clone(), b.clone())) {
            continue;
        }
        if let Some(degree) = in_degree.get_mut(&b) {
            *degree += 1;
        }
        if let Some(next) = successors.get_mut(&a) {
            next.push(b);
        }
    }

    let mut ready: VecDeque<N> = order
        .into_iter()
        .filter(|node| in_degree.get(node) == Some(&0))
        .collect();
    let mut sorted = Vec::with_capacity(in_degree.len());

    while let Some(node) = ready.pop_front() {
        for next in successors.get(&node).into_iter().flatten() {
            if let Some(degree) = in_degree.get_mut(next) {
                *degree -= 1;
                if *degree == 0 {
                    ready.push_back(next.clone());
                }
            }
        }
        sorted.push(node);
    }

    if sorted.len() < in_degree.len() {
        log::debug!(
            "{} of {} nodes are on or behind a cycle",
            in_degree.len() - sorted.len(),
            in_degree.len()
        );
    }
    sorted
}
