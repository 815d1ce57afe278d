use super::{EdgeBudget, Generate, GenerateError, RandomTree};
use crate::graph::{Edge, Graph};
use crate::rng::index;

use clap::ValueEnum;
use indicatif::ProgressBar;
use oorandom::Rand64;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// How the edges on top of the spanning tree are drawn.
/// Both strategies pick uniformly among the missing edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SamplingStrategy {
    /// Rejection sampling for sparse graphs, enumeration for dense ones.
    #[default]
    Auto,
    /// Draw random node pairs until an unused one comes up.
    Rejection,
    /// List all missing edges and shuffle the required amount to the front.
    Enumeration,
}

impl SamplingStrategy {
    fn resolve(self, budget: &EdgeBudget) -> SamplingStrategy {
        match self {
            Self::Auto if budget.total() > budget.max / 2 => Self::Enumeration,
            Self::Auto => Self::Rejection,
            fixed => fixed,
        }
    }
}

/// Connected random graph with a fixed amount of edges.
///
/// A random spanning tree is grown first, then random edges are added until the
/// clamped edge budget is met.
pub struct ConnectedRandom {
    budget: EdgeBudget,
    strategy: SamplingStrategy,
    progress: ProgressBar,
}

impl ConnectedRandom {
    /// Clamps `edges` to the maximum of a simple graph and reports if it had to.
    pub fn new(
        order: usize,
        edges: usize,
        strategy: SamplingStrategy,
    ) -> Result<ConnectedRandom, GenerateError> {
        if order == 0 {
            return Err(GenerateError::NoNodes);
        }

        let budget = EdgeBudget::new(order, edges);
        if budget.is_clamped() {
            warn!(
                requested = budget.requested,
                max = budget.max,
                order,
                "{} exceeds safe maximum {} (binom({},2))",
                budget.requested,
                budget.max,
                order
            );
        }
        if budget.target < budget.tree_edges() {
            info!(
                requested = budget.target,
                tree_edges = budget.tree_edges(),
                "requested edge count is below the spanning tree size, emitting the tree only"
            );
        }

        Ok(ConnectedRandom {
            budget,
            strategy,
            progress: ProgressBar::hidden(),
        })
    }

    /// Reports sampling progress on the given bar.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    pub fn budget(&self) -> &EdgeBudget {
        &self.budget
    }

    fn add_by_rejection(
        &self,
        graph: &mut Graph,
        amount: usize,
        rng: &mut Rand64,
    ) -> Result<(), GenerateError> {
        let order = graph.order();
        let mut added = 0;
        let mut rejected = 0_u64;

        while added < amount {
            let edge = (index(rng, order), index(rng, order));
            if edge.0 == edge.1 || graph.has_edge(edge) {
                rejected += 1;
                continue;
            }

            graph.add_edge(edge)?;
            added += 1;
            self.progress.inc(1);
        }

        debug!(rejected, "rejection sampling done");
        Ok(())
    }

    fn add_by_enumeration(
        &self,
        graph: &mut Graph,
        amount: usize,
        rng: &mut Rand64,
    ) -> Result<(), GenerateError> {
        let order = graph.order();
        let mut candidates: Vec<Edge> = (0..order)
            .flat_map(|from| (from + 1..order).map(move |to| (from, to)))
            .filter(|&edge| !graph.has_edge(edge))
            .collect();
        debug!(candidates = candidates.len(), "enumerated missing edges");

        // partial Fisher-Yates: positions 0..amount end up as a uniform sample
        for i in 0..amount.min(candidates.len()) {
            let j = i + index(rng, candidates.len() - i);
            candidates.swap(i, j);

            let (from, to) = candidates[i];
            let edge = if rng.rand_u64() & 1 == 0 {
                (from, to)
            } else {
                (to, from)
            };
            graph.add_edge(edge)?;
            self.progress.inc(1);
        }

        Ok(())
    }
}

impl Generate for ConnectedRandom {
    #[instrument(skip_all, fields(order = self.budget.order, edges = self.budget.total()))]
    fn generate(&mut self, rng: &mut Rand64) -> Result<Graph, GenerateError> {
        let mut graph = RandomTree::new(self.budget.order)
            .with_edge_capacity(self.budget.total())
            .generate(rng)?;
        debug!(edges = graph.size(), "spanning tree done");

        let extra = self.budget.extra_edges();
        if extra > 0 {
            let strategy = self.strategy.resolve(&self.budget);
            debug!(?strategy, extra, "adding random edges");

            self.progress.set_length(extra as u64);
            match strategy {
                SamplingStrategy::Enumeration => {
                    self.add_by_enumeration(&mut graph, extra, rng)?
                }
                _ => self.add_by_rejection(&mut graph, extra, rng)?,
            }
            self.progress.finish_and_clear();
        }

        info!(nodes = graph.order(), edges = graph.size(), "graph generated");
        Ok(graph)
    }
}
