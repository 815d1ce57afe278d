use super::{format_weight, Export, ExportError};
use crate::graph::WeightedGraph;

use serde::Serialize;
use std::io::Write;
use tera::{Context, Tera};

const TEMPLATE: &str = include_str!("../../templates/graph.dot");

/// Renders an undirected Graphviz graph. Node ids are quoted, edge weights become labels.
#[derive(Debug, Clone, Default)]
pub struct Dot {
    pub name: Option<String>,
}

#[derive(Serialize)]
struct DotEdge {
    from: usize,
    to: usize,
    label: String,
}

impl Dot {
    pub fn named(name: &str) -> Dot {
        Dot {
            name: Some(name.to_string()),
        }
    }

    /// Returns a string representing the graph in Graphviz dot format.
    pub fn render(&self, graph: &WeightedGraph) -> Result<String, ExportError> {
        let edges: Vec<DotEdge> = graph
            .edges()
            .iter()
            .map(|edge| DotEdge {
                from: edge.from,
                to: edge.to,
                label: format_weight(edge.weight),
            })
            .collect();

        let mut context = Context::new();
        context.insert("name", self.name.as_deref().unwrap_or_default());
        context.insert("edges", &edges);

        Ok(Tera::one_off(TEMPLATE, &context, false)?)
    }
}

impl Export for Dot {
    fn export(&self, graph: &WeightedGraph, writer: &mut dyn Write) -> Result<(), ExportError> {
        writer.write_all(self.render(graph)?.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::WeightedEdge;

    fn triangle() -> WeightedGraph {
        WeightedGraph::new(
            3,
            vec![
                WeightedEdge { from: 0, to: 1, weight: 0.5 },
                WeightedEdge { from: 2, to: 1, weight: 0.123 },
                WeightedEdge { from: 0, to: 2, weight: 0.999 },
            ],
        )
    }

    #[test]
    fn renders_undirected_graph() {
        let out = Dot::default().render(&triangle()).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(
            lines,
            vec![
                "graph {",
                "\t\"0\" -- \"1\" [label=\"0.50\"]",
                "\t\"2\" -- \"1\" [label=\"0.12\"]",
                "\t\"0\" -- \"2\" [label=\"1.00\"]",
                "}",
            ]
        );
        assert!(!out.contains("->"), "Undirected graphs must not use arrows.");
    }

    #[test]
    fn renders_graph_name() {
        let out = Dot::named("sssp").render(&triangle()).unwrap();

        assert!(out.starts_with("graph \"sssp\" {"), "Got: {}", out);
    }

    #[test]
    fn renders_empty_graph() {
        let out = Dot::default().render(&WeightedGraph::new(1, Vec::new())).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines, vec!["graph {", "}"]);
    }

    #[test]
    fn export_writes_rendering() {
        let mut buf = Vec::new();
        Dot::default().export(&triangle(), &mut buf).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            Dot::default().render(&triangle()).unwrap()
        );
    }
}
