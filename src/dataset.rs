//! Reading edge lists.
//!
//! Every line holds one edge as two labels separated by the format's delimiter,
//! e.g. `kh-tc`. Blank lines and lines starting with `#` are skipped.

use std::io::Read;

use itertools::Itertools;
use serde::Deserialize;
use thiserror::Error;

use crate::Graph;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unable to read the edge list: {0}")]
    Csv(#[from] csv::Error),
    #[error("Line {line}: expected two vertices, found '{record}'")]
    Malformed { line: u64, record: String },
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeFormat {
    /// `a-b`
    #[default]
    Dash,
    /// `a,b`
    Csv,
    /// `a<TAB>b`
    Tsv,
}

impl EdgeFormat {
    pub fn delimiter(self) -> u8 {
        match self {
            Self::Dash => b'-',
            Self::Csv => b',',
            Self::Tsv => b'\t',
        }
    }
}

#[derive(Debug, Deserialize)]
struct Edge(String, String);

/// Parses every edge in `reader`, in input order.
pub fn edges(reader: impl Read, format: EdgeFormat) -> Result<Vec<(String, String)>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(format.delimiter())
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut edges = Vec::new();
    for record in rdr.records() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        if record.len() != 2 || record.iter().any(str::is_empty) {
            return Err(Error::Malformed {
                line: record.position().map_or(0, csv::Position::line),
                record: record
                    .iter()
                    .join(&char::from(format.delimiter()).to_string()),
            });
        }
        let Edge(a, b) = record.deserialize(None)?;
        edges.push((a, b));
    }
    log::debug!("read {} edges", edges.len());
    Ok(edges)
}

/// Builds an undirected graph from the edges in `reader`.
pub fn graph(reader: impl Read, format: EdgeFormat) -> Result<Graph<String>> {
    edges(reader, format).map(Graph::from_iter)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dash() {
        let input = "kh-tc\nqp-kh\n\n  de - cg \n# comment\nkh-tc\n";
        let edges = edges(input.as_bytes(), EdgeFormat::Dash).unwrap();
        assert_eq!(
            edges,
            vec![
                ("kh".to_owned(), "tc".to_owned()),
                ("qp".to_owned(), "kh".to_owned()),
                ("de".to_owned(), "cg".to_owned()),
                ("kh".to_owned(), "tc".to_owned()),
            ]
        );
    }

    #[test]
    fn comment_lines_are_skipped() {
        let skipped = edges("#a-b\nc-d\n# e-f\n".as_bytes(), EdgeFormat::Dash).unwrap();
        assert_eq!(skipped, vec![("c".to_owned(), "d".to_owned())]);

        // Only a leading `#` starts a comment
        let kept = edges("c-#d\n".as_bytes(), EdgeFormat::Dash).unwrap();
        assert_eq!(kept, vec![("c".to_owned(), "#d".to_owned())]);
    }

    #[test]
    fn graph_dedups_edges() {
        let graph = graph("a,b\nb,a\nb,c\n".as_bytes(), EdgeFormat::Csv).unwrap();
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn tsv() {
        let graph = graph("1\t2\n2\t3\n1\t3\n3\t4\n".as_bytes(), EdgeFormat::Tsv).unwrap();
        assert_eq!(graph.find_maximal_cliques().len(), 2);
    }

    #[test]
    fn malformed() {
        let err = edges("a-b\nc\nd-e\n".as_bytes(), EdgeFormat::Dash).unwrap_err();
        assert!(matches!(err, Error::Malformed { line: 2, ref record } if record == "c"));

        let err = edges("a-b-c\n".as_bytes(), EdgeFormat::Dash).unwrap_err();
        assert!(matches!(err, Error::Malformed { line: 1, .. }));

        let err = edges("a-\n".as_bytes(), EdgeFormat::Dash).unwrap_err();
        assert!(matches!(err, Error::Malformed { line: 1, .. }));
    }
}
