//! Command-line flags for the terminal front-end.

mod flags;
mod parse;

pub use flags::CliFlags;
pub use parse::parse;
