use serde::Serialize;

/// Canonical key for an undirected edge.
///
/// The two labels are stored in lexicographic order, so `{a, b}` and
/// `{b, a}` collapse to the same key. A self-loop keeps the label twice.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Edge {
    lo: String,
    hi: String,
}

impl Edge {
    pub fn lo(&self) -> &str {
        &self.lo
    }
    pub fn hi(&self) -> &str {
        &self.hi
    }
    pub fn is_loop(&self) -> bool {
        self.lo == self.hi
    }
}

impl From<(&str, &str)> for Edge {
    fn from((a, b): (&str, &str)) -> Self {
        let (lo, hi) = if a > b { (b, a) } else { (a, b) };
        Self {
            lo: lo.to_string(),
            hi: hi.to_string(),
        }
    }
}

/// str injection
/// hfx/pzl, hfx-pzl
impl TryFrom<&str> for Edge {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let (a, b) = s
            .trim()
            .split_once(crate::EDGE_DELIM)
            .ok_or_else(|| anyhow::anyhow!("expected two labels joined by '/', got {:?}", s))?;
        let (a, b) = (a.trim(), b.trim());
        if a.is_empty() || b.is_empty() {
            return Err(anyhow::anyhow!("empty label in edge {:?}", s));
        }
        Ok(Self::from((a, b)))
    }
}

impl std::str::FromStr for Edge {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.lo, self.hi)
    }
}
