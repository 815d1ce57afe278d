use thiserror::Error;

use super::Edge;

#[derive(Debug, PartialEq, Error)]
pub enum GraphError {
    #[error("node {0} is not part of the graph")]
    MissingNode(usize),
    #[error("edge {0:?} is already part of the graph")]
    DuplicateEdge(Edge),
    #[error("self loop on node {0} is not allowed in a simple graph")]
    SelfLoop(usize),
}
