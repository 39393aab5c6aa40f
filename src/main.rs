mod cli;

use std::io::{Read, Write};

use clap::Parser;
use cliquer::{
    Clique, Graph, QueryCliques,
    dataset::{self, EdgeFormat},
    graph::{self, SearchStats},
    order,
};
use serde::Serialize;
use thiserror::Error;

use crate::cli::{Cli, Cmd, OptsCliques, StatFormat};

#[derive(Debug, Error)]
enum Error {
    #[error("Unable to write the output: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Dataset(#[from] dataset::Error),
    #[error(transparent)]
    Graph(#[from] graph::Error),
    #[error("Unable to serialise the stats: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unable to start logging: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("The graph has no vertices")]
    EmptyGraph,
    #[error("The edges form a cycle: only {0} of {1} vertices could be ordered")]
    Cycle(usize, usize),
}

fn main() {
    if let Err(err) = entry() {
        eprintln!("{err}");
        std::process::exit(1)
    }
}

fn entry() -> Result<(), Error> {
    let Cli {
        mut input,
        format,
        log_level,
        cmd,
    } = Cli::parse();
    cli::logging::init(log_level)?;

    let mut f = std::io::stdout().lock();
    run(cmd, input.lock(), format.into(), &mut f)
}

fn run(cmd: Cmd, input: impl Read, format: EdgeFormat, f: &mut impl Write) -> Result<(), Error> {
    match cmd {
        Cmd::Maximal(opts) => print_cliques(
            &load(input, format)?,
            QueryCliques::new().maximal(true),
            &opts,
            f,
        ),
        Cmd::All(opts) => print_cliques(&load(input, format)?, QueryCliques::new(), &opts, f),
        Cmd::Largest => {
            let largest = load(input, format)?
                .largest_clique()
                .ok_or(Error::EmptyGraph)?;
            writeln!(f, "{largest}")?;
            Ok(())
        }
        Cmd::Stats(opts) => print_stats(&load(input, format)?, &opts.format, f),
        Cmd::Order => print_order(dataset::edges(input, format)?, f),
    }
}

fn load(input: impl Read, format: EdgeFormat) -> Result<Graph<String>, Error> {
    let graph = dataset::graph(input, format)?;
    log::info!(
        "loaded a graph of {} vertices and {} edges",
        graph.len(),
        graph.edge_count()
    );
    Ok(graph)
}

fn print_cliques(
    graph: &Graph<String>,
    query: QueryCliques<'_>,
    opts: &OptsCliques,
    f: &mut impl Write,
) -> Result<(), Error> {
    let query = match opts.size {
        Some(size) => query.size(size),
        None => query,
    };
    let query = match opts.member.as_deref() {
        Some(pattern) => query.member(pattern),
        None => query,
    };
    let cliques = graph.query(&query)?;

    if opts.count {
        writeln!(f, "{}", cliques.len())?;
    } else {
        for clique in cliques {
            writeln!(f, "{clique}")?;
        }
    }
    Ok(())
}

fn print_order(edges: Vec<(String, String)>, f: &mut impl Write) -> Result<(), Error> {
    let nodes: Vec<String> = edges
        .iter()
        .flat_map(|(a, b)| [a.clone(), b.clone()])
        .collect();
    let total = nodes.iter().collect::<std::collections::HashSet<_>>().len();

    let sorted = order::topological_sort(nodes, edges);
    if sorted.len() < total {
        return Err(Error::Cycle(sorted.len(), total));
    }
    writeln!(f, "{}", sorted.join(","))?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct Stats {
    vertices: usize,
    edges: usize,
    maximal_cliques: usize,
    largest: Option<Clique<String>>,
    search: SearchStats,
}

fn print_stats(
    graph: &Graph<String>,
    format: &StatFormat,
    f: &mut impl Write,
) -> Result<(), Error> {
    let (cliques, search) = graph.maximal_cliques_with_stats();
    let stats = Stats {
        vertices: graph.len(),
        edges: graph.edge_count(),
        maximal_cliques: cliques.len(),
        largest: graph.largest_clique(),
        search,
    };

    match format {
        StatFormat::Human => {
            writeln!(f, "vertices:        {}", stats.vertices)?;
            writeln!(f, "edges:           {}", stats.edges)?;
            writeln!(f, "maximal cliques: {}", stats.maximal_cliques)?;
            if let Some(largest) = &stats.largest {
                writeln!(f, "largest clique:  {} ({})", largest.len(), largest)?;
            }
            writeln!(f, "search states:   {}", stats.search.states)?;
            writeln!(f, "memo hits:       {}", stats.search.memo_hits)?;
            writeln!(f, "search depth:    {}", stats.search.depth)?;
        }
        StatFormat::Json => {
            serde_json::to_writer_pretty(&mut *f, &stats)?;
            writeln!(f)?;
        }
    }
    Ok(())
}
