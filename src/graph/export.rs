mod dot;
mod edge_list;

pub use dot::Dot;
pub use edge_list::{EdgeList, EdgeListFormat};

use crate::graph::WeightedGraph;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("could not write graph: {0}")]
    Io(#[from] io::Error),
    #[error("could not write csv record: {0}")]
    Csv(#[from] csv::Error),
    #[error("could not render graph template: {0}")]
    Template(#[from] tera::Error),
}

/// An exporter for weighted graphs.
pub trait Export {
    /// Writes a representation of the graph according to the export format used.
    fn export(&self, graph: &WeightedGraph, writer: &mut dyn Write) -> Result<(), ExportError>;
}

/// Weights are always printed with two decimals.
pub fn format_weight(weight: f64) -> String {
    format!("{:.2}", weight)
}
