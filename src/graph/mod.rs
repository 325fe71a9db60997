pub mod cut;
pub use cut::*;

pub mod edge;
pub use edge::*;

pub mod graph;
pub use graph::*;

pub mod parse;

pub mod summary;
pub use summary::*;

pub mod vertex;
pub use vertex::*;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub use cli::*;
