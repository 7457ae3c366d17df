//! Character classes and the alphabet built from them.

use std::collections::BTreeSet;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digits,
    Symbols,
}

impl CharClass {
    /// Every class, in display order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digits,
        CharClass::Symbols,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CharClass::Lowercase => "lowercase",
            CharClass::Uppercase => "uppercase",
            CharClass::Digits => "digits",
            CharClass::Symbols => "symbols",
        }
    }

    pub fn members(self) -> &'static str {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digits => DIGITS,
            CharClass::Symbols => SYMBOLS,
        }
    }

    /// Member count. All members are ASCII, so bytes == chars.
    pub fn size(self) -> usize {
        self.members().len()
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Set of enabled character classes. May be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection(u8);

impl Selection {
    pub const EMPTY: Selection = Selection(0);
    pub const ALL: Selection = Selection(0b1111);

    pub fn contains(self, class: CharClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn insert(&mut self, class: CharClass) {
        self.0 |= class.bit();
    }

    pub fn remove(&mut self, class: CharClass) {
        self.0 &= !class.bit();
    }

    pub fn set(&mut self, class: CharClass, enabled: bool) {
        if enabled {
            self.insert(class);
        } else {
            self.remove(class);
        }
    }

    pub fn toggle(&mut self, class: CharClass) {
        self.0 ^= class.bit();
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Enabled classes in display order.
    pub fn iter(self) -> impl Iterator<Item = CharClass> {
        CharClass::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

impl FromIterator<CharClass> for Selection {
    fn from_iter<I: IntoIterator<Item = CharClass>>(iter: I) -> Self {
        let mut selection = Selection::EMPTY;
        for class in iter {
            selection.insert(class);
        }
        selection
    }
}

/// Effective alphabet for a selection: its size (never below 1) and the
/// characters input may contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    pub size: usize,
    pub permitted: BTreeSet<char>,
}

impl Alphabet {
    pub fn permits(&self, c: char) -> bool {
        self.permitted.contains(&c)
    }
}

/// Build the effective alphabet for the enabled classes.
///
/// The size is floored to 1 so an empty selection never yields a zero base
/// for the estimator's exponentiation. The permitted set stays empty.
pub fn effective_alphabet(selection: Selection) -> Alphabet {
    let mut size = 0;
    let mut permitted = BTreeSet::new();

    for class in selection.iter() {
        size += class.size();
        permitted.extend(class.members().chars());
    }

    Alphabet {
        size: size.max(1),
        permitted,
    }
}

/// Drop every character of `raw` that is not in `permitted`, keeping order.
pub fn sanitize(raw: &str, permitted: &BTreeSet<char>) -> String {
    raw.chars().filter(|c| permitted.contains(c)).collect()
}
