//! Attacker profiles.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profile {
    pub name: &'static str,
    /// Guesses per second. Always positive.
    pub rate: f64,
    /// Appended to the current-time readout.
    pub suffix: &'static str,
}

/// One attempt every two seconds.
pub const HUMAN: Profile = Profile {
    name: "human",
    rate: 0.5,
    suffix: "(human)",
};

/// 10^9 attempts per second.
pub const COMPUTER: Profile = Profile {
    name: "computer",
    rate: 1_000_000_000.0,
    suffix: "(computer)",
};

pub const PROFILES: [Profile; 2] = [HUMAN, COMPUTER];

/// Index into [`PROFILES`] and into per-profile state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attacker {
    Human = 0,
    Computer = 1,
}

impl Attacker {
    pub const ALL: [Attacker; 2] = [Attacker::Human, Attacker::Computer];

    pub fn profile(self) -> &'static Profile {
        match self {
            Attacker::Human => &HUMAN,
            Attacker::Computer => &COMPUTER,
        }
    }
}
