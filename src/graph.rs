mod edge_set;
mod error;

pub mod export;
pub mod generate;

pub use edge_set::EdgeSet;
pub use error::GraphError;

use oorandom::Rand64;

use crate::rng::uniform;

/// An edge in the form (from_id, to_id). Graphs are undirected, the orientation
/// only matters for output.
pub type Edge = (usize, usize);

/// Returns the maximum amount of edges of a simple undirected graph on `order` nodes.
/// Saturates instead of overflowing.
pub fn max_edges(order: usize) -> usize {
    if order % 2 == 0 {
        (order / 2).saturating_mul(order.saturating_sub(1))
    } else {
        order.saturating_mul((order - 1) / 2)
    }
}

/// An unweighted, undirected, simple graph with nodes `0..order`.
#[derive(Debug, Clone)]
pub struct Graph {
    order: usize,
    edges: EdgeSet,
}

impl Graph {
    /// Creates a graph with `order` nodes and no edges.
    pub fn with_order(order: usize) -> Self {
        Graph {
            order,
            edges: EdgeSet::new(),
        }
    }

    /// Creates a graph with `order` nodes and room for `capacity` edges.
    pub fn with_capacity(order: usize, capacity: usize) -> Self {
        Graph {
            order,
            edges: EdgeSet::with_capacity(capacity),
        }
    }

    /// Returns the number of nodes in this graph.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns the number of edges in this graph.
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    pub fn has_node(&self, id: usize) -> bool {
        id < self.order
    }

    /// Returns true if the edge exists in either orientation.
    pub fn has_edge(&self, edge: Edge) -> bool {
        self.edges.contains(edge)
    }

    /// Adds a new edge to the graph.
    /// Returns an error if one of the nodes is missing, the edge is a self loop
    /// or it already exists in either orientation.
    pub fn add_edge(&mut self, edge: Edge) -> Result<(), GraphError> {
        if !self.has_node(edge.0) {
            return Err(GraphError::MissingNode(edge.0));
        } else if !self.has_node(edge.1) {
            return Err(GraphError::MissingNode(edge.1));
        }

        self.edges.insert(edge)
    }

    /// Returns an iterator over edge ids in insertion order.
    pub fn iter_edge_ids(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter()
    }

    /// Attaches a weight drawn uniformly from `weight_range` to every edge.
    pub fn weighted(&self, rng: &mut Rand64, weight_range: (f64, f64)) -> WeightedGraph {
        let edges = self
            .iter_edge_ids()
            .map(|(from, to)| WeightedEdge {
                from,
                to,
                weight: uniform(rng, weight_range),
            })
            .collect();

        WeightedGraph {
            order: self.order,
            edges,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedEdge {
    pub from: usize,
    pub to: usize,
    pub weight: f64,
}

/// A graph whose edges carry their final weights. This is what exporters consume.
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    order: usize,
    edges: Vec<WeightedEdge>,
}

impl WeightedGraph {
    pub fn new(order: usize, edges: Vec<WeightedEdge>) -> Self {
        WeightedGraph { order, edges }
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn size(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }
}
