mod budget;
mod connected_random;
mod random_tree;

pub use budget::EdgeBudget;
pub use connected_random::{ConnectedRandom, SamplingStrategy};
pub use random_tree::RandomTree;

use oorandom::Rand64;
use thiserror::Error;

use crate::graph::{Graph, GraphError};

#[derive(Debug, PartialEq, Error)]
pub enum GenerateError {
    #[error("a graph needs at least one node")]
    NoNodes,
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// A Generator for undirected graphs.
pub trait Generate {
    /// Generates a graph, drawing all randomness from `rng`.
    fn generate(&mut self, rng: &mut Rand64) -> Result<Graph, GenerateError>;
}
