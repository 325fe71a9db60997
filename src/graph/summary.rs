use super::graph::Graph;
use serde::Serialize;

/// Structural snapshot of a graph at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    cycles: bool,
    nodes: usize,
    edges: usize,
    components: usize,
    sizes: Vec<usize>,
}

impl Summary {
    pub fn cycles(&self) -> bool {
        self.cycles
    }
    pub fn nodes(&self) -> usize {
        self.nodes
    }
    pub fn edges(&self) -> usize {
        self.edges
    }
    pub fn components(&self) -> usize {
        self.components
    }
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }
    /// Product of the two group sizes, once the graph has split in exactly two.
    pub fn product(&self) -> Option<usize> {
        match self.sizes.as_slice() {
            [a, b] => Some(a * b),
            _ => None,
        }
    }
}

impl From<&Graph> for Summary {
    fn from(graph: &Graph) -> Self {
        let sizes = graph.component_sizes();
        Self {
            cycles: graph.has_cycle(),
            nodes: sizes.iter().sum(),
            edges: graph.count_edges(),
            components: sizes.len(),
            sizes,
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Does the graph contain cycle(s)? {}", self.cycles)?;
        writeln!(f, "Number of nodes in the graph   : {}", self.nodes)?;
        writeln!(f, "Number of edges in the graph   : {}", self.edges)?;
        writeln!(f, "Number of components in graph  : {}", self.components)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_graph_queries() {
        let mut graph = Graph::new();
        graph.add_edge("a", "b", false);
        graph.add_edge("c", "d", false);
        graph.add_edge("d", "e", false);
        let summary = Summary::from(&graph);
        assert!(!summary.cycles());
        assert_eq!(summary.nodes(), graph.count_nodes());
        assert_eq!(summary.edges(), graph.count_edges());
        assert_eq!(summary.components(), graph.count_components());
        assert_eq!(summary.sizes(), &[2, 3]);
        assert_eq!(summary.product(), Some(6));
    }

    #[test]
    fn no_product_unless_two_groups() {
        let mut graph = Graph::new();
        graph.add_edge("a", "b", false);
        assert_eq!(Summary::from(&graph).product(), None);
        assert_eq!(Summary::from(&Graph::new()).product(), None);
    }

    #[test]
    fn labelled_lines() {
        let mut graph = Graph::new();
        graph.add_edge("a", "a", false);
        let text = Summary::from(&graph).to_string();
        assert_eq!(
            text,
            "Does the graph contain cycle(s)? true\n\
             Number of nodes in the graph   : 1\n\
             Number of edges in the graph   : 1\n\
             Number of components in graph  : 1\n"
        );
    }
}
