//! Solvers for a handful of small stdin-driven puzzles.
//!
//! - [`graph`] undirected adjacency graph with cycle detection, component
//!   counting and edge cuts
//! - [`cards`] camel-card hand classification and winnings
//! - [`pages`] page-ordering rule checks and repair
pub mod cards;
pub mod graph;
pub mod input;
pub mod pages;

// ============================================================================
// GRAPH CUT
// ============================================================================
/// Edges severed by default when no cut is given on the command line.
/// Removing these three wires splits the worked sample into two groups.
pub const CUT: [(&str, &str); 3] = [("hfx", "pzl"), ("bvb", "cmg"), ("nvd", "jqt")];
/// Separator class between a node label and its neighbor labels.
pub const GRAPH_DELIM: &str = r"[:\s]+";
/// Separators accepted between the two labels of a cut edge.
pub const EDGE_DELIM: &[char] = &['/', '-'];

// ============================================================================
// PAGE ORDERING
// ============================================================================
/// Separates the two pages of an ordering rule (`47|53`).
pub const RULE_DELIM: char = '|';
/// Separates pages within an update (`75,47,61`).
pub const PAGE_DELIM: char = ',';

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for property tests and benchmarks.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging on stderr so stdout carries only answers.
/// Each `-v` raises the level one step above WARN.
#[cfg(feature = "cli")]
pub fn log(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
