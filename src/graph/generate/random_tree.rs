use super::{Generate, GenerateError};
use crate::graph::Graph;
use crate::rng::index;

use oorandom::Rand64;

/// Random spanning tree: every node `i > 0` is attached to a uniformly chosen
/// node among `0..i`, so all nodes are reachable from node 0.
pub struct RandomTree {
    order: usize,
    edge_capacity: usize,
}

impl RandomTree {
    pub fn new(order: usize) -> RandomTree {
        RandomTree {
            order,
            edge_capacity: order.saturating_sub(1),
        }
    }

    /// Reserves room for more edges than the tree needs, for generators that keep growing it.
    pub fn with_edge_capacity(mut self, capacity: usize) -> RandomTree {
        self.edge_capacity = self.edge_capacity.max(capacity);
        self
    }
}

impl Generate for RandomTree {
    fn generate(&mut self, rng: &mut Rand64) -> Result<Graph, GenerateError> {
        if self.order == 0 {
            return Err(GenerateError::NoNodes);
        }

        let mut graph = Graph::with_capacity(self.order, self.edge_capacity);
        for node in 1..self.order {
            // nodes 0..node are already part of the tree
            let parent = index(rng, node);
            graph.add_edge((parent, node))?;
        }

        Ok(graph)
    }
}
