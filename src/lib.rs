//! Estimate how long a brute-force attack needs to guess a password, for a
//! slow human and a fast computer, and follow that estimate as it is typed.

pub mod error;
pub mod estimate;
pub mod settings;

pub use error::{Error, Result};
