use regex::Regex;

use super::{Clique, Graph, Label, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct QueryCliques<'a> {
    pub(in crate::graph) maximal: bool,
    pub(in crate::graph) size: Option<usize>,
    pub(in crate::graph) member: Option<&'a str>,
}

impl<'a> QueryCliques<'a> {
    /// Query for every clique of the graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Only consider maximal cliques.
    pub fn maximal(mut self, maximal: bool) -> Self {
        self.maximal = maximal;
        self
    }

    /// Only keep cliques with exactly `size` members.
    pub fn size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    /// Only keep cliques with at least one member matching the regex `pattern`.
    pub fn member(mut self, pattern: &'a str) -> Self {
        self.member = Some(pattern);
        self
    }
}

impl<V: Label + AsRef<str>> Graph<V> {
    /// Finds the cliques selected by `query`.
    pub fn query(&self, query: &QueryCliques<'_>) -> Result<Vec<Clique<V>>> {
        let member = query.member.map(Regex::new).transpose()?;

        let cliques = match (query.maximal, query.size) {
            (true, Some(size)) => self
                .find_maximal_cliques()
                .into_iter()
                .filter(|clique| clique.len() == size)
                .collect(),
            (true, None) => self.find_maximal_cliques(),
            (false, Some(size)) => self.cliques_of_size(size),
            (false, None) => self.find_all_cliques(),
        };

        Ok(match member {
            Some(re) => cliques
                .into_iter()
                .filter(|clique| clique.iter().any(|vertex| re.is_match(vertex.as_ref())))
                .collect(),
            None => cliques,
        })
    }
}
