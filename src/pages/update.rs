use super::rules::Rules;

/// A sequence of pages to be printed in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Update(Vec<u32>);

impl Update {
    pub fn pages(&self) -> &[u32] {
        &self.0
    }

    /// No page is preceded by a page its rules say must follow it.
    pub fn is_ordered(&self, rules: &Rules) -> bool {
        self.0.iter().enumerate().all(|(i, &page)| {
            self.0[..i]
                .iter()
                .all(|&earlier| !rules.forbids(page, earlier))
        })
    }

    /// Middle page of an odd-length update.
    pub fn middle(&self) -> Option<u32> {
        match self.0.len() % 2 {
            1 => Some(self.0[self.0.len() / 2]),
            _ => None,
        }
    }

    /// Repeat bubble passes until the update is ordered.
    ///
    /// A single pass does not always finish the job, so passes are repeated
    /// up to the square of the length. Contradictory rules can still leave
    /// the result unordered; that is logged and the last attempt returned.
    pub fn repaired(&self, rules: &Rules) -> Self {
        let mut update = self.clone();
        let bound = update.0.len() * update.0.len();
        let mut passes = 0;
        while !update.is_ordered(rules) && passes < bound {
            update.bubble(rules);
            passes += 1;
        }
        if update.is_ordered(rules) {
            log::debug!("repaired {} -> {} in {} passes", self, update, passes);
        } else {
            log::warn!("could not order {} after {} passes", self, passes);
        }
        update
    }

    /// For each page, when an earlier page violates its rules, shift that
    /// earlier page rightward one slot at a time until the whole update is
    /// ordered or it reaches the end.
    fn bubble(&mut self, rules: &Rules) {
        for i in 0..self.0.len() {
            let page = self.0[i];
            for j in 0..i {
                if rules.forbids(page, self.0[j]) {
                    for k in j..self.0.len() - 1 {
                        self.0.swap(k, k + 1);
                        if self.is_ordered(rules) {
                            break;
                        }
                    }
                }
            }
        }
    }
}

impl From<Vec<u32>> for Update {
    fn from(pages: Vec<u32>) -> Self {
        Self(pages)
    }
}

/// str injection
/// unparseable pages are skipped
/// "75,47,61,53,29"
impl From<&str> for Update {
    fn from(s: &str) -> Self {
        Self(
            s.split(crate::PAGE_DELIM)
                .map(str::trim)
                .filter_map(|page| match page.parse::<u32>() {
                    Ok(page) => Some(page),
                    Err(e) => {
                        log::warn!("skipping page {:?}: {}", page, e);
                        None
                    }
                })
                .collect(),
        )
    }
}

impl std::fmt::Display for Update {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let delim = crate::PAGE_DELIM.to_string();
        let pages = self.0.iter().map(|p| p.to_string()).collect::<Vec<_>>();
        write!(f, "{}", pages.join(delim.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::Rule;

    const RULES: &str = "47|53 97|13 97|61 97|47 75|29 61|13 75|53 29|13 97|29 53|29 61|53 97|53 61|29 47|13 75|47 97|75 47|61 75|61 47|29 75|13 53|13";

    fn rules() -> Rules {
        RULES
            .split_whitespace()
            .map(|r| Rule::try_from(r).unwrap())
            .collect()
    }

    #[test]
    fn ordered_updates() {
        let rules = rules();
        assert!(Update::from("75,47,61,53,29").is_ordered(&rules));
        assert!(Update::from("97,61,53,29,13").is_ordered(&rules));
        assert!(Update::from("75,29,13").is_ordered(&rules));
    }

    #[test]
    fn unordered_updates() {
        let rules = rules();
        assert!(!Update::from("75,97,47,61,53").is_ordered(&rules));
        assert!(!Update::from("61,13,29").is_ordered(&rules));
        assert!(!Update::from("97,13,75,29,47").is_ordered(&rules));
    }

    #[test]
    fn repairs() {
        let rules = rules();
        for (before, after) in [
            ("75,97,47,61,53", "97,75,47,61,53"),
            ("61,13,29", "61,29,13"),
            ("97,13,75,29,47", "97,75,47,29,13"),
        ] {
            let repaired = Update::from(before).repaired(&rules);
            assert!(repaired.is_ordered(&rules));
            assert_eq!(repaired, Update::from(after));
        }
    }

    #[test]
    fn repair_leaves_ordered_alone() {
        let rules = rules();
        let update = Update::from("75,47,61,53,29");
        assert_eq!(update.repaired(&rules), update);
    }

    #[test]
    fn contradictory_rules_terminate() {
        let rules = [(1, 2), (2, 1)].into_iter().map(Rule::from).collect::<Rules>();
        let update = Update::from("1,2");
        let repaired = update.repaired(&rules);
        assert!(!repaired.is_ordered(&rules));
        assert_eq!(repaired.pages().len(), 2);
    }

    #[test]
    fn middles() {
        assert_eq!(Update::from("75,47,61,53,29").middle(), Some(61));
        assert_eq!(Update::from("7").middle(), Some(7));
        assert_eq!(Update::from("1,2").middle(), None);
        assert_eq!(Update::default().middle(), None);
    }

    #[test]
    fn parse_skips_garbage() {
        assert_eq!(Update::from("1, x,3"), Update::from(vec![1, 3]));
        assert_eq!(Update::from("1,2,3").to_string(), "1,2,3");
    }
}
