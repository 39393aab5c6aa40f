pub mod logging;

use clap::{Args, Parser, Subcommand, ValueEnum};
use cliquer::dataset::EdgeFormat;
use log::LevelFilter;

/// Find cliques in an undirected graph given as an edge list.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Edge list to read, one edge per line. Use `-` for stdin.
    #[arg(value_name = "INPUT", default_value = "-")]
    pub input: clio::Input,
    /// Format of the edge list.
    #[arg(short, long, value_enum, default_value_t = InputFormat::Dash)]
    pub format: InputFormat,
    /// Most verbose level of messages logged to stderr.
    #[arg(short, long, default_value_t = LevelFilter::Warn)]
    pub log_level: LevelFilter,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Debug, Subcommand)]
pub enum Cmd {
    /// Print the maximal cliques.
    Maximal(OptsCliques),
    /// Print every clique, smallest first.
    All(OptsCliques),
    /// Print a largest clique as its members joined by commas.
    Largest,
    /// Display statistics about the graph and its cliques.
    Stats(OptsStats),
    /// Treat each edge as `before-after` and print the vertices in order.
    Order,
}

#[derive(Debug, Default, Args)]
pub struct OptsCliques {
    /// Only keep cliques with exactly this many vertices.
    #[arg(short, long)]
    pub size: Option<usize>,
    /// Only keep cliques with a vertex matching this regex pattern.
    #[arg(short, long)]
    pub member: Option<String>,
    /// Print the number of cliques instead of the cliques.
    #[arg(short, long)]
    pub count: bool,
}

#[derive(Debug, Args)]
pub struct OptsStats {
    #[arg(short, long, value_enum, default_value_t = StatFormat::Human)]
    pub format: StatFormat,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// `a-b`
    #[default]
    Dash,
    /// `a,b`
    Csv,
    /// `a<TAB>b`
    Tsv,
}

impl From<InputFormat> for EdgeFormat {
    fn from(value: InputFormat) -> Self {
        match value {
            InputFormat::Dash => EdgeFormat::Dash,
            InputFormat::Csv => EdgeFormat::Csv,
            InputFormat::Tsv => EdgeFormat::Tsv,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, ValueEnum)]
pub enum StatFormat {
    /// Print the stats in a human-readable format.
    #[default]
    Human,
    /// Print the stats in a machine-readable format (JSON).
    Json,
}
