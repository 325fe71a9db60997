/// A labeled node.
///
/// `keyed` marks nodes that own an adjacency entry, i.e. that have been the
/// source of some insertion. Nodes only ever named as a directed target are
/// reachable but never start a traversal of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    label: String,
    keyed: bool,
}

impl Vertex {
    pub fn label(&self) -> &str {
        &self.label
    }
    pub fn is_key(&self) -> bool {
        self.keyed
    }
    pub fn key(&mut self) {
        self.keyed = true;
    }
}

impl From<&str> for Vertex {
    fn from(label: &str) -> Self {
        Self {
            label: label.to_string(),
            keyed: false,
        }
    }
}

impl std::fmt::Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}
