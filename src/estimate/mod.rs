//! Brute-force crack time estimation and its typing trend.

pub mod charset;
pub mod chart;
mod combos;
pub mod duration;
mod history;
pub mod profile;

pub use charset::{Alphabet, CharClass, Selection, effective_alphabet, sanitize};
pub use combos::{combinations, estimate, group_digits};
pub use history::{Event, History, Reading, Sample, Tracker, Trend, Update};
pub use profile::{Attacker, COMPUTER, HUMAN, PROFILES, Profile};
