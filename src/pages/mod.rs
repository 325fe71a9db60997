pub mod report;
pub use report::*;

pub mod rules;
pub use rules::*;

pub mod update;
pub use update::*;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub use cli::*;
