//! Camel Cards Binary
//!
//! Reads `HAND BID` lines from stdin and prints the total winnings.
//!
//! Options: --ranked, -v

use clap::Parser;
use puzzlebox::cards::Camel;

fn main() -> anyhow::Result<()> {
    let args = Camel::parse();
    puzzlebox::log(args.verbosity());
    print!("{}", args.solve(&puzzlebox::input::stdin())?);
    Ok(())
}
