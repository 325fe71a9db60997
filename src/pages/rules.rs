use std::collections::HashMap;

/// One ordering constraint: `before` must precede `after` when both appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    before: u32,
    after: u32,
}

impl From<(u32, u32)> for Rule {
    fn from((before, after): (u32, u32)) -> Self {
        Self { before, after }
    }
}

/// str injection
/// "47|53"
impl TryFrom<&str> for Rule {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let (before, after) = s
            .split_once(crate::RULE_DELIM)
            .ok_or_else(|| anyhow::anyhow!("expected X{}Y, got {:?}", crate::RULE_DELIM, s))?;
        let before = before.trim().parse::<u32>()?;
        let after = after.trim().parse::<u32>()?;
        Ok(Self::from((before, after)))
    }
}

/// Every page mapped to the pages that must come after it.
#[derive(Debug, Clone, Default)]
pub struct Rules(HashMap<u32, Vec<u32>>);

impl Rules {
    /// Pages that must follow `page`. Pages without rules have none.
    pub fn after(&self, page: u32) -> &[u32] {
        self.0.get(&page).map(Vec::as_slice).unwrap_or(&[])
    }
    /// Whether placing `earlier` ahead of `page` breaks one of `page`'s rules.
    pub fn forbids(&self, page: u32, earlier: u32) -> bool {
        self.after(page).contains(&earlier)
    }
    pub fn len(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Rule> for Rules {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        let mut rules = HashMap::<u32, Vec<u32>>::new();
        for rule in iter {
            rules.entry(rule.before).or_default().push(rule.after);
        }
        Self(rules)
    }
}
