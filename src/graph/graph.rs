use super::edge::Edge;
use super::parse;
use super::vertex::Vertex;
use crate::Arbitrary;
use petgraph::Direction;
use petgraph::stable_graph::EdgeIndex;
use petgraph::stable_graph::NodeIndex;
use petgraph::stable_graph::StableDiGraph;
use petgraph::visit::Dfs;
use petgraph::visit::EdgeRef;
use petgraph::visit::IntoEdgeReferences;
use petgraph::visit::VisitMap;
use petgraph::visit::Visitable;
use std::collections::BTreeSet;
use std::collections::HashMap;

/// Adjacency-list graph over string labels.
///
/// Every insertion appends an arc, so an undirected edge is a pair of arcs
/// and parallel edges are kept. Labels are interned once; node indices are
/// never removed, which keeps index order equal to insertion order.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    graph: StableDiGraph<Vertex, ()>,
    index: HashMap<String, NodeIndex>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `NODE: n1 n2 ...` lines, inserting every pair undirected.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut graph = Self::new();
        for (node, neighbors) in lines.into_iter().filter_map(|l| parse::line(l.as_ref())) {
            for neighbor in neighbors.iter() {
                graph.add_edge(&node, neighbor, false);
            }
        }
        graph
    }

    /// Append `b` to `a`'s neighbors, and `a` to `b`'s unless directed.
    pub fn add_edge(&mut self, a: &str, b: &str, directed: bool) {
        let a = self.key(a);
        let b = if directed { self.intern(b) } else { self.key(b) };
        self.graph.add_edge(a, b, ());
        if !directed {
            self.graph.add_edge(b, a, ());
        }
    }

    /// Remove the first `b` from `a`'s neighbors, and the first `a` from
    /// `b`'s unless directed. Missing edges are ignored.
    pub fn delete_edge(&mut self, a: &str, b: &str, directed: bool) {
        self.delete_arc(a, b);
        if !directed {
            self.delete_arc(b, a);
        }
    }

    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.arc(a, b).is_some()
    }

    /// Neighbors of `a` in insertion order. Unknown labels have none.
    pub fn neighbors(&self, a: &str) -> Vec<&str> {
        self.index
            .get(a)
            .map(|&a| {
                self.outgoing(a)
                    .into_iter()
                    .map(|b| self.graph[b].label())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Depth-first search from every unvisited key, remembering the parent
    /// of each node. Reaching a visited node other than the parent means a
    /// cycle, so a self-loop or a doubled edge counts as one.
    pub fn has_cycle(&self) -> bool {
        let mut visited = self.graph.visit_map();
        for root in self.keys() {
            if !visited.is_visited(&root) && self.cycles_from(root, &mut visited) {
                return true;
            }
        }
        false
    }

    pub fn count_nodes(&self) -> usize {
        self.component_sizes().iter().sum()
    }

    /// Distinct undirected edges; parallel edges and reversed pairs collapse.
    pub fn count_edges(&self) -> usize {
        self.graph
            .edge_references()
            .map(|e| Edge::from((self.graph[e.source()].label(), self.graph[e.target()].label())))
            .collect::<BTreeSet<Edge>>()
            .len()
    }

    pub fn count_components(&self) -> usize {
        self.component_sizes().len()
    }

    /// Node count of each component, in the order keys first reach them.
    pub fn component_sizes(&self) -> Vec<usize> {
        let mut sizes = Vec::new();
        let mut dfs = Dfs::empty(&self.graph);
        for key in self.keys() {
            if dfs.discovered.is_visited(&key) {
                continue;
            }
            log::trace!("sweeping component from {}", self.graph[key]);
            dfs.move_to(key);
            let mut size = 0;
            while let Some(_) = dfs.next(&self.graph) {
                size += 1;
            }
            sizes.push(size);
        }
        sizes
    }

    /// Nodes owning an adjacency entry, in insertion order.
    pub fn keys(&self) -> Vec<NodeIndex> {
        self.graph
            .node_indices()
            .filter(|&i| self.graph[i].is_key())
            .collect()
    }

    fn cycles_from(&self, root: NodeIndex, visited: &mut impl VisitMap<NodeIndex>) -> bool {
        visited.visit(root);
        let mut frames = vec![(root, None, self.outgoing(root).into_iter())];
        while let Some((node, parent, neighbors)) = frames.last_mut() {
            let (node, parent, next) = (*node, *parent, neighbors.next());
            match next {
                None => {
                    frames.pop();
                }
                Some(next) if visited.visit(next) => {
                    frames.push((next, Some(node), self.outgoing(next).into_iter()));
                }
                Some(next) if Some(next) != parent => {
                    log::debug!("cycle closes at {} from {}", self.graph[next], self.graph[node]);
                    return true;
                }
                Some(_) => {}
            }
        }
        false
    }

    /// Outgoing arcs are stored newest-first, so reverse them.
    fn outgoing(&self, a: NodeIndex) -> Vec<NodeIndex> {
        let mut neighbors = self
            .graph
            .neighbors_directed(a, Direction::Outgoing)
            .collect::<Vec<NodeIndex>>();
        neighbors.reverse();
        neighbors
    }

    /// Oldest arc from `a` to `b`.
    fn arc(&self, a: &str, b: &str) -> Option<EdgeIndex> {
        let a = *self.index.get(a)?;
        let b = *self.index.get(b)?;
        self.graph
            .edges_directed(a, Direction::Outgoing)
            .filter(|e| e.target() == b)
            .map(|e| e.id())
            .last()
    }

    fn delete_arc(&mut self, a: &str, b: &str) {
        match self.arc(a, b) {
            Some(arc) => {
                self.graph.remove_edge(arc);
            }
            None => log::debug!("no edge {} -> {} to delete", a, b),
        }
    }

    fn intern(&mut self, label: &str) -> NodeIndex {
        match self.index.get(label) {
            Some(&i) => i,
            None => {
                let i = self.graph.add_node(Vertex::from(label));
                self.index.insert(label.to_string(), i);
                i
            }
        }
    }

    fn key(&mut self, label: &str) -> NodeIndex {
        let i = self.intern(label);
        self.graph[i].key();
        i
    }
}

/// adjacency dump, one key per line
/// jqt: rhn xhk nvd
impl std::fmt::Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for key in self.keys() {
            let label = self.graph[key].label();
            writeln!(f, "{}: {}", label, self.neighbors(label).join(" "))?;
        }
        Ok(())
    }
}

impl Arbitrary for Graph {
    fn random() -> Self {
        let n = rand::random_range(2..32usize);
        let m = rand::random_range(0..n * 2);
        let mut graph = Self::new();
        for _ in 0..m {
            let a = format!("n{}", rand::random_range(0..n));
            let b = format!("n{}", rand::random_range(0..n));
            graph.add_edge(&a, &b, false);
        }
        graph
    }
}
