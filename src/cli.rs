//! Argument parsing and the single generation run behind the binary.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use thiserror::Error;
use tracing::{info, instrument};

use crate::config::{ConfigError, Fix, GenerationConfig, GraphConfig};
use crate::generate_weighted_graph;
use crate::graph::export::{Dot, EdgeList, EdgeListFormat, Export, ExportError};
use crate::graph::generate::{GenerateError, SamplingStrategy};

/// Camel case flags that are also accepted with a single dash, e.g. `-numVertices 10`.
const LEGACY_FLAGS: [&str; 3] = ["numVertices", "numEdges", "outputDot"];

#[derive(Debug, Parser, Clone)]
#[command(
    name = "sssp_graph_gen",
    about = "Generate a connected random weighted graph as shortest path test input."
)]
pub struct Cli {
    /// Number of vertices N [default: 1000]
    #[arg(long = "num-vertices", visible_alias = "numVertices")]
    pub num_vertices: Option<usize>,

    /// Target number of edges M, clamped to binom(N, 2) [default: 10000]
    #[arg(long = "num-edges", visible_alias = "numEdges")]
    pub num_edges: Option<usize>,

    /// Also write the graph in Graphviz dot format to this file.
    #[arg(long = "output-dot", visible_alias = "outputDot")]
    pub output_dot: Option<PathBuf>,

    /// Seed for reproducible graphs [default: drawn from the OS]
    #[arg(long)]
    pub seed: Option<u64>,

    /// Lower bound of the edge weights, inclusive [default: 0.0]
    #[arg(long)]
    pub min_weight: Option<f64>,

    /// Upper bound of the edge weights, exclusive [default: 1.0]
    #[arg(long)]
    pub max_weight: Option<f64>,

    /// How edges beyond the spanning tree are sampled [default: auto]
    #[arg(long, value_enum)]
    pub strategy: Option<SamplingStrategy>,

    /// Edge list format.
    #[arg(long, value_enum, default_value_t = EdgeListFormat::Text)]
    pub format: EdgeListFormat,

    /// Write the edge list to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// RON or YAML file with generation settings. Flags take precedence.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Show a progress bar while sampling edges.
    #[arg(long)]
    pub progress: bool,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("could not create {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not write to stdout: {0}")]
    Stdout(#[source] io::Error),
}

/// Outcome of one run, logged by the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub seed: u64,
    pub vertices: usize,
    pub edges: usize,
}

/// Rewrites `-numVertices` style flags to their `--numVertices` form.
pub fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .map(|arg| {
            let is_legacy = arg
                .strip_prefix('-')
                .filter(|rest| !rest.starts_with('-'))
                .map(|rest| rest.split('=').next().unwrap_or(rest))
                .map_or(false, |name| LEGACY_FLAGS.contains(&name));
            if is_legacy {
                format!("-{}", arg)
            } else {
                arg
            }
        })
        .collect()
}

impl Cli {
    /// Parses the process arguments, accepting the legacy single dash flags.
    pub fn parse_normalized() -> Cli {
        Cli::parse_from(normalize_args(std::env::args()))
    }

    /// Merges flags, config file and defaults into a validated config.
    pub fn generation_config(&self) -> Result<GenerationConfig, CliError> {
        let mut cfg = match &self.config {
            Some(path) => GraphConfig::load(path)?,
            None => GraphConfig::default(),
        };

        if let Some(vertices) = self.num_vertices {
            cfg.vertices = vertices;
        }
        if let Some(edges) = self.num_edges {
            cfg.edges = edges;
        }
        if let Some(seed) = self.seed {
            cfg.seed = Some(seed);
        }
        if let Some(strategy) = self.strategy {
            cfg.strategy = strategy;
        }
        cfg.weight_range = (
            self.min_weight.unwrap_or(cfg.weight_range.0),
            self.max_weight.unwrap_or(cfg.weight_range.1),
        );

        let fixed = cfg.to_fixed();
        fixed.validate()?;
        Ok(fixed)
    }

    fn progress_bar(&self) -> ProgressBar {
        if !self.progress {
            return ProgressBar::hidden();
        }

        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::default_bar().template("{elapsed_precise} {bar:40} {pos}/{len} edges"),
        );
        bar
    }
}

fn create(path: &Path) -> Result<BufWriter<File>, CliError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| CliError::Create {
            path: path.to_path_buf(),
            source,
        })
}

/// Generates one graph and writes it out.
///
/// The edge list goes to `--output` if given, to `stdout` otherwise. The dot
/// rendering is only written when `--output-dot` is set.
#[instrument(skip_all)]
pub fn run_cli(cli: &Cli, stdout: &mut dyn Write) -> Result<Summary, CliError> {
    let cfg = cli.generation_config()?;
    info!(
        seed = cfg.seed,
        vertices = cfg.vertices,
        edges = cfg.edges,
        "generating graph"
    );

    let graph = generate_weighted_graph(&cfg, cli.progress_bar())?;

    let edge_list = EdgeList::new(cli.format);
    match &cli.output {
        Some(path) => {
            let mut file = create(path)?;
            edge_list.export(&graph, &mut file)?;
            file.flush().map_err(ExportError::from)?;
            info!(path = %path.display(), "edge list written");
        }
        None => edge_list.export(&graph, stdout)?,
    }

    if let Some(path) = &cli.output_dot {
        let mut file = create(path)?;
        Dot::default().export(&graph, &mut file)?;
        file.flush().map_err(ExportError::from)?;
        info!(path = %path.display(), "dot file written");
    }

    Ok(Summary {
        seed: cfg.seed,
        vertices: graph.order(),
        edges: graph.size(),
    })
}
