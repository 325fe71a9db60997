use super::rules::Rules;
use super::update::Update;

/// Middle-page totals over a batch of updates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    ordered: u64,
    repaired: u64,
    fixes: Vec<Update>,
}

impl Report {
    pub fn new(rules: &Rules, updates: &[Update]) -> Self {
        let mut report = Self::default();
        for update in updates {
            if update.is_ordered(rules) {
                report.ordered += Self::middle(update);
            } else {
                let fixed = update.repaired(rules);
                report.repaired += Self::middle(&fixed);
                report.fixes.push(fixed);
            }
        }
        report
    }

    /// Sum of middle pages of updates that were already ordered.
    pub fn ordered(&self) -> u64 {
        self.ordered
    }
    /// Sum of middle pages of updates after repair.
    pub fn repaired(&self) -> u64 {
        self.repaired
    }
    pub fn fixes(&self) -> &[Update] {
        &self.fixes
    }

    /// Even-length updates have no middle and add nothing.
    fn middle(update: &Update) -> u64 {
        match update.middle() {
            Some(page) => page as u64,
            None => {
                log::warn!("update {} has no middle page", update);
                0
            }
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for fix in self.fixes.iter() {
            writeln!(f, "Reordered to correct: {}", fix)?;
        }
        writeln!(f, "Middle page number correct sums: {}", self.ordered)?;
        writeln!(f, "Middle page number incorrect sums: {}", self.repaired)
    }
}
