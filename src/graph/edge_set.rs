use std::collections::HashSet;

use crate::graph::{Edge, GraphError};

/// Undirected, simple edge set.
///
/// Edges keep the orientation they were inserted with, but membership is
/// checked on the normalized pair, so `(a, b)` and `(b, a)` are the same edge.
/// Iteration yields edges in insertion order.
#[derive(Debug, Clone, Default)]
pub struct EdgeSet {
    edges: Vec<Edge>,
    keys: HashSet<Edge>,
}

fn key(edge: Edge) -> Edge {
    if edge.0 <= edge.1 {
        edge
    } else {
        (edge.1, edge.0)
    }
}

impl EdgeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs an empty set with room for at least `capacity` edges.
    pub fn with_capacity(capacity: usize) -> Self {
        EdgeSet {
            edges: Vec::with_capacity(capacity),
            keys: HashSet::with_capacity(capacity),
        }
    }

    /// Returns the number of edges in this set.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns true if the edge is present in either orientation.
    pub fn contains(&self, edge: Edge) -> bool {
        self.keys.contains(&key(edge))
    }

    /// Adds a new edge.
    /// Returns an error for self loops and for edges already present in either orientation.
    pub fn insert(&mut self, edge: Edge) -> Result<(), GraphError> {
        if edge.0 == edge.1 {
            return Err(GraphError::SelfLoop(edge.0));
        }
        if !self.keys.insert(key(edge)) {
            return Err(GraphError::DuplicateEdge(edge));
        }

        self.edges.push(edge);
        Ok(())
    }

    /// Returns an iterator over the edges in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().copied()
    }
}
