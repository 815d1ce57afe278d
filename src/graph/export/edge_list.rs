use super::{format_weight, Export, ExportError};
use crate::graph::WeightedGraph;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EdgeListFormat {
    /// `N M` header followed by `from to weight` lines.
    #[default]
    Text,
    /// `from,to,weight` records with a header row.
    Csv,
}

/// Plain edge list, the input format of the shortest path solvers.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeList {
    pub format: EdgeListFormat,
}

impl EdgeList {
    pub fn new(format: EdgeListFormat) -> EdgeList {
        EdgeList { format }
    }

    fn export_text(graph: &WeightedGraph, writer: &mut dyn Write) -> Result<(), ExportError> {
        writeln!(writer, "{} {}", graph.order(), graph.size())?;
        for edge in graph.edges() {
            writeln!(
                writer,
                "{} {} {}",
                edge.from,
                edge.to,
                format_weight(edge.weight)
            )?;
        }
        Ok(())
    }

    fn export_csv(graph: &WeightedGraph, writer: &mut dyn Write) -> Result<(), ExportError> {
        let mut records = csv::Writer::from_writer(writer);
        records.write_record(&["from", "to", "weight"])?;
        for edge in graph.edges() {
            records.write_record(&[
                edge.from.to_string(),
                edge.to.to_string(),
                format_weight(edge.weight),
            ])?;
        }
        records.flush()?;
        Ok(())
    }
}

impl Export for EdgeList {
    fn export(&self, graph: &WeightedGraph, writer: &mut dyn Write) -> Result<(), ExportError> {
        match self.format {
            EdgeListFormat::Text => Self::export_text(graph, writer),
            EdgeListFormat::Csv => Self::export_csv(graph, writer),
        }
    }
}
