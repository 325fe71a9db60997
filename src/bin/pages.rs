//! Page Ordering Binary
//!
//! Reads `X|Y` rules, a blank line, then comma-separated updates from stdin.
//! Prints each repaired update and the two middle-page sums.
//!
//! Options: -v

use clap::Parser;
use puzzlebox::pages::Pages;

fn main() -> anyhow::Result<()> {
    let args = Pages::parse();
    puzzlebox::log(args.verbosity());
    print!("{}", args.solve(&puzzlebox::input::stdin())?);
    Ok(())
}
