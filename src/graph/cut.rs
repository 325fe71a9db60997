use super::edge::Edge;
use super::graph::Graph;
use serde::Serialize;

/// Wires to sever, each removed once in both directions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cut(Vec<Edge>);

impl Cut {
    pub fn edges(&self) -> &[Edge] {
        &self.0
    }
    pub fn apply(&self, graph: &mut Graph) {
        for edge in self.0.iter() {
            log::info!("cutting {}", edge);
            graph.delete_edge(edge.lo(), edge.hi(), false);
        }
    }
}

impl Default for Cut {
    fn default() -> Self {
        Self(crate::CUT.iter().copied().map(Edge::from).collect())
    }
}

impl From<Vec<Edge>> for Cut {
    fn from(edges: Vec<Edge>) -> Self {
        Self(edges)
    }
}

impl std::fmt::Display for Cut {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let edges = self.0.iter().map(|e| e.to_string()).collect::<Vec<_>>();
        write!(f, "{}", edges.join(" "))
    }
}
