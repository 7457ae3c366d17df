//! Trend tracking: per-attacker crack-time samples accumulated while the
//! password is typed, and the rules for when they are thrown away.

use num_bigint::BigUint;
use tracing::debug;
use zeroize::Zeroizing;

use super::charset::{self, Alphabet, CharClass, Selection};
use super::combos::{combinations, estimate};
use super::duration;
use super::profile::Attacker;

/// One observation, taken when the password reached `length` characters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub length: usize,
    pub time: f64,
    pub alphabet_size: usize,
}

/// Samples for one attacker, strictly increasing in length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    samples: Vec<Sample>,
}

impl History {
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    fn clear(&mut self) {
        self.samples.clear();
    }

    fn push(&mut self, sample: Sample) {
        debug_assert!(self.last().is_none_or(|s| s.length < sample.length));
        self.samples.push(sample);
    }
}

/// A change coming from the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event<'a> {
    /// The password field now holds this raw text.
    Typed(&'a str),
    /// One character class was switched on or off.
    Toggled(CharClass),
    /// The whole selection was replaced.
    Selected(Selection),
}

/// What a step did to the histories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Unchanged,
    /// A sample was appended to the existing trend.
    Extended,
    /// Histories were cleared and a fresh first sample appended.
    Restarted,
    /// Histories were cleared and left empty (password is empty).
    Cleared,
}

/// Current-point estimate for one attacker.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub attacker: Attacker,
    pub seconds: f64,
    pub formatted: String,
}

impl Reading {
    /// `"52.00 seconds (human)"`
    pub fn readout(&self) -> String {
        format!("{} {}", self.formatted, self.attacker.profile().suffix)
    }
}

/// Everything the display layer needs after one step.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    /// Sanitization removed characters; the input field must be rewritten
    /// with [`Tracker::password`].
    pub rewritten: bool,
    pub trend: Trend,
    pub alphabet_size: usize,
    pub length: usize,
    pub combinations: BigUint,
    pub readings: [Reading; 2],
}

impl Update {
    pub fn reading(&self, attacker: Attacker) -> &Reading {
        &self.readings[attacker as usize]
    }
}

/// Owned estimator state: selection, sanitized password, and the trend for
/// both attackers.
pub struct Tracker {
    selection: Selection,
    alphabet: Alphabet,
    password: Zeroizing<String>,
    previous_length: usize,
    histories: [History; 2],
}

impl Tracker {
    pub fn new(selection: Selection) -> Self {
        Self {
            selection,
            alphabet: charset::effective_alphabet(selection),
            password: Zeroizing::new(String::new()),
            previous_length: 0,
            histories: Default::default(),
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The sanitized password.
    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn previous_length(&self) -> usize {
        self.previous_length
    }

    pub fn history(&self, attacker: Attacker) -> &History {
        &self.histories[attacker as usize]
    }

    /// Apply one input event and report the new readings.
    pub fn advance(&mut self, event: Event<'_>) -> Update {
        let (rewritten, forced) = match event {
            Event::Typed(raw) => (self.replace_password(raw), false),
            Event::Toggled(class) => {
                let mut selection = self.selection;
                selection.toggle(class);
                (self.change_selection(selection), true)
            }
            Event::Selected(selection) => (self.change_selection(selection), true),
        };

        let trend = self.observe(forced);
        self.update(rewritten, trend)
    }

    /// Readings for the current state without touching the trend.
    pub fn current(&self) -> Update {
        self.update(false, Trend::Unchanged)
    }

    fn replace_password(&mut self, raw: &str) -> bool {
        let sanitized = Zeroizing::new(charset::sanitize(raw, &self.alphabet.permitted));
        let rewritten = sanitized.as_str() != raw;
        self.password = sanitized;
        rewritten
    }

    /// Switching options mid-password starts a new trend from scratch.
    fn change_selection(&mut self, selection: Selection) -> bool {
        self.selection = selection;
        self.alphabet = charset::effective_alphabet(selection);
        debug!(
            alphabet_size = self.alphabet.size,
            "character selection changed, trend reset"
        );

        self.histories.iter_mut().for_each(History::clear);
        self.previous_length = 0;

        let current = Zeroizing::new(self.password.to_string());
        self.replace_password(&current)
    }

    /// `forced` marks a step whose histories were already wiped by an
    /// option change; it always reports a restart or a clear.
    fn observe(&mut self, forced: bool) -> Trend {
        let length = self.password.chars().count();
        let alphabet_size = self.alphabet.size;

        let length_changed = length != self.previous_length;
        // Both histories always move together, so the first one speaks for both.
        let charset_changed = self.histories[0]
            .last()
            .is_some_and(|s| s.alphabet_size != alphabet_size);

        if !forced && !length_changed && !charset_changed {
            return Trend::Unchanged;
        }

        let reset = forced || length < self.previous_length || charset_changed;
        if reset {
            self.histories.iter_mut().for_each(History::clear);
        }

        let appended = length > 0;
        if appended {
            for attacker in Attacker::ALL {
                let time = estimate(length, alphabet_size, attacker.profile().rate);
                self.histories[attacker as usize].push(Sample {
                    length,
                    time,
                    alphabet_size,
                });
            }
        }

        self.previous_length = length;

        let trend = match (reset, appended) {
            (false, true) => Trend::Extended,
            (true, true) => Trend::Restarted,
            (true, false) => Trend::Cleared,
            (false, false) => Trend::Unchanged,
        };
        debug!(length, alphabet_size, ?trend, "trend updated");
        trend
    }

    fn update(&self, rewritten: bool, trend: Trend) -> Update {
        let length = self.password.chars().count();
        let alphabet_size = self.alphabet.size;

        let readings = Attacker::ALL.map(|attacker| {
            let seconds = estimate(length, alphabet_size, attacker.profile().rate);
            Reading {
                attacker,
                seconds,
                formatted: duration::format(seconds),
            }
        });

        Update {
            rewritten,
            trend,
            alphabet_size,
            length,
            combinations: combinations(length, alphabet_size),
            readings,
        }
    }
}
