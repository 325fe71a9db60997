use super::report::Report;
use super::rules::Rule;
use super::rules::Rules;
use super::update::Update;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Check page updates against ordering rules and repair the broken ones",
    long_about = None
)]
pub struct Pages {
    /// Log more (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Pages {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    /// Rules run until the first blank line; updates follow.
    pub fn solve(&self, lines: &[String]) -> anyhow::Result<String> {
        let split = lines
            .iter()
            .position(|line| line.trim().is_empty())
            .unwrap_or(lines.len());
        let (head, tail) = lines.split_at(split);
        let rules = head
            .iter()
            .filter_map(|line| match Rule::try_from(line.as_str()) {
                Ok(rule) => Some(rule),
                Err(e) => {
                    log::warn!("skipping rule {:?}: {}", line, e);
                    None
                }
            })
            .collect::<Rules>();
        let updates = tail
            .iter()
            .filter(|line| !line.trim().is_empty())
            .map(|line| Update::from(line.as_str()))
            .collect::<Vec<Update>>();
        log::info!("checking {} updates against {} rules", updates.len(), rules.len());
        Ok(Report::new(&rules, &updates).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
47|53
97|13
97|61
97|47
75|29
61|13
75|53
29|13
97|29
53|29
61|53
97|53
61|29
47|13
75|47
97|75
47|61
75|61
47|29
75|13
53|13

75,47,61,53,29
97,61,53,29,13
75,29,13
75,97,47,61,53
61,13,29
97,13,75,29,47
";

    fn lines(s: &str) -> Vec<String> {
        s.lines().map(String::from).collect()
    }

    #[test]
    fn sample_sums() {
        let args = Pages::try_parse_from(["pages"]).unwrap();
        let out = args.solve(&lines(SAMPLE)).unwrap();
        assert_eq!(
            out,
            "Reordered to correct: 97,75,47,61,53\n\
             Reordered to correct: 61,29,13\n\
             Reordered to correct: 97,75,47,29,13\n\
             Middle page number correct sums: 143\n\
             Middle page number incorrect sums: 123\n"
        );
    }

    #[test]
    fn malformed_rules_are_skipped() {
        let args = Pages::try_parse_from(["pages", "-v"]).unwrap();
        let out = args.solve(&lines("1|2\nnonsense\n\n2,1,3\n")).unwrap();
        assert!(out.contains("Reordered to correct: 1,2,3\n"));
        assert!(out.ends_with("incorrect sums: 2\n"));
        assert_eq!(args.verbosity(), 1);
    }

    #[test]
    fn rules_without_updates() {
        let args = Pages::try_parse_from(["pages"]).unwrap();
        let out = args.solve(&lines("1|2\n3|4")).unwrap();
        assert_eq!(
            out,
            "Middle page number correct sums: 0\nMiddle page number incorrect sums: 0\n"
        );
    }
}
