//! Graph Cut Binary
//!
//! Reads `NODE: n1 n2 ...` lines from stdin, prints the adjacency dump and
//! structural metrics before and after severing the given wires.
//!
//! Options: --cut A/B (repeatable), --json, -v

use clap::Parser;
use puzzlebox::graph::Snowverload;

fn main() -> anyhow::Result<()> {
    let args = Snowverload::parse();
    puzzlebox::log(args.verbosity());
    print!("{}", args.solve(&puzzlebox::input::stdin())?);
    Ok(())
}
