use crate::graph::max_edges;

/// The amount of edges a connected random graph will end up with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeBudget {
    pub order: usize,
    pub requested: usize,
    pub max: usize,
    pub target: usize,
}

impl EdgeBudget {
    /// Clamps the requested edge count to the maximum of a simple graph on `order` nodes.
    pub fn new(order: usize, requested: usize) -> Self {
        let max = max_edges(order);
        EdgeBudget {
            order,
            requested,
            max,
            target: requested.min(max),
        }
    }

    pub fn is_clamped(&self) -> bool {
        self.requested > self.max
    }

    /// Edges contributed by the spanning tree.
    pub fn tree_edges(&self) -> usize {
        self.order.saturating_sub(1)
    }

    /// Edges that have to be sampled on top of the spanning tree.
    pub fn extra_edges(&self) -> usize {
        self.target.saturating_sub(self.tree_edges())
    }

    /// Edge count of the finished graph. Never below the spanning tree.
    pub fn total(&self) -> usize {
        self.tree_edges() + self.extra_edges()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_below_max_is_kept() {
        let budget = EdgeBudget::new(1000, 10_000);

        assert!(!budget.is_clamped());
        assert_eq!(budget.target, 10_000);
        assert_eq!(budget.tree_edges(), 999);
        assert_eq!(budget.extra_edges(), 9001);
        assert_eq!(budget.total(), 10_000);
    }

    #[test]
    fn budget_above_max_is_clamped() {
        let budget = EdgeBudget::new(3, 100);

        assert!(budget.is_clamped());
        assert_eq!(budget.max, 3);
        assert_eq!(budget.target, 3);
        assert_eq!(budget.extra_edges(), 1);
        assert_eq!(budget.total(), 3);
    }

    #[test]
    fn budget_at_max_is_not_clamped() {
        let budget = EdgeBudget::new(4, 6);

        assert!(!budget.is_clamped());
        assert_eq!(budget.total(), 6);
    }

    #[test]
    fn budget_below_tree_size_keeps_the_tree() {
        let budget = EdgeBudget::new(10, 3);

        assert_eq!(budget.extra_edges(), 0);
        assert_eq!(budget.total(), 9, "Spanning tree edges must never be dropped.");
    }

    #[test]
    fn single_node_budget_is_empty() {
        let budget = EdgeBudget::new(1, 0);

        assert_eq!(budget.tree_edges(), 0);
        assert_eq!(budget.total(), 0);
    }
}
