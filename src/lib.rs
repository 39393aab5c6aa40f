//! Finds cliques in undirected graphs

#[cfg(feature = "io")]
pub mod dataset;
pub mod graph;
pub mod order;

pub use graph::{Clique, Graph, QueryCliques};
