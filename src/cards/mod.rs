pub mod card;
pub use card::*;

pub mod hand;
pub use hand::*;

pub mod kind;
pub use kind::*;

pub mod play;
pub use play::*;

pub mod table;
pub use table::*;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub use cli::*;
