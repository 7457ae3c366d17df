//! Front-end options: which character classes start enabled and how each
//! chart is scaled. The trend itself is never saved.

mod file;

use std::path::Path;

use crate::error::Result;
use crate::estimate::chart::Scale;
use crate::estimate::{Attacker, CharClass, Selection};

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub human_scale: Scale,
    pub computer_scale: Scale,
}

impl Settings {
    pub fn load_from_file() -> Result<Self> {
        Self::load_from(&file::get_path())
    }

    pub fn save_to_file(&self) -> Result<()> {
        self.save_to(&file::get_path())
    }

    /// Load from `path`, creating it with defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        file::load(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        file::save(self, path)
    }

    pub fn selection(&self) -> Selection {
        let mut selection = Selection::EMPTY;
        selection.set(CharClass::Lowercase, self.lowercase);
        selection.set(CharClass::Uppercase, self.uppercase);
        selection.set(CharClass::Digits, self.digits);
        selection.set(CharClass::Symbols, self.symbols);
        selection
    }

    pub fn set_selection(&mut self, selection: Selection) {
        self.lowercase = selection.contains(CharClass::Lowercase);
        self.uppercase = selection.contains(CharClass::Uppercase);
        self.digits = selection.contains(CharClass::Digits);
        self.symbols = selection.contains(CharClass::Symbols);
    }

    pub fn scale(&self, attacker: Attacker) -> Scale {
        match attacker {
            Attacker::Human => self.human_scale,
            Attacker::Computer => self.computer_scale,
        }
    }

    pub fn flip_scale(&mut self, attacker: Attacker) {
        match attacker {
            Attacker::Human => self.human_scale = self.human_scale.flipped(),
            Attacker::Computer => self.computer_scale = self.computer_scale.flipped(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: false,
            human_scale: Scale::Linear,
            computer_scale: Scale::Linear,
        }
    }
}
