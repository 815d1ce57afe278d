//! Connected random weighted graphs as test input for shortest path solvers.
//!
//! A random spanning tree keeps the graph connected, random extra edges bring
//! it up to the requested size and every edge gets a uniformly drawn weight.
pub mod cli;
pub mod config;
pub mod graph;
pub mod logging;
pub mod rng;

use indicatif::ProgressBar;

use crate::config::GenerationConfig;
use crate::graph::generate::{ConnectedRandom, Generate, GenerateError};
use crate::graph::WeightedGraph;
use crate::rng::rng64;

/// Generates the graph described by `config`. Weights are drawn after all edges are placed,
/// from the same seeded generator.
pub fn generate_weighted_graph(
    config: &GenerationConfig,
    progress: ProgressBar,
) -> Result<WeightedGraph, GenerateError> {
    let mut rng = rng64(config.seed);
    let graph = ConnectedRandom::new(config.vertices, config.edges, config.strategy)?
        .with_progress(progress)
        .generate(&mut rng)?;

    Ok(graph.weighted(&mut rng, config.weight_range))
}
