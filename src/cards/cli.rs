use super::play::Play;
use super::table::Table;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Rank camel-card hands and total their winnings",
    long_about = None
)]
pub struct Camel {
    /// List every hand by rank before the total.
    #[arg(long)]
    ranked: bool,
    /// Log more (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Camel {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    /// Parse `HAND BID` lines, skipping any that do not parse.
    pub fn solve(&self, lines: &[String]) -> anyhow::Result<String> {
        let table = lines
            .iter()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| match Play::try_from(line.as_str()) {
                Ok(play) => Some(play),
                Err(e) => {
                    log::warn!("skipping {:?}: {}", line, e);
                    None
                }
            })
            .collect::<Table>();
        log::info!("ranking {} hands", table.len());
        let mut text = String::new();
        if self.ranked {
            for (rank, play) in table.ranked().into_iter().enumerate() {
                text.push_str(&format!(
                    "{:>4}. {:<8} {:<14} {}\n",
                    rank + 1,
                    play.hand().to_string(),
                    play.hand().kind().to_string(),
                    play.bid()
                ));
            }
        }
        text.push_str(&format!("{}\n", table.winnings()));
        Ok(text)
    }
}
