//! Password line editor and key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use zeroize::Zeroizing;

use cracktime::estimate::{Attacker, CharClass};

/// What a key press asks the dispatcher to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    ClearLine,
    Toggle(CharClass),
    FlipScale(Attacker),
    ToggleMask,
    Save,
    Quit,
}

/// Map a key event to an action. Releases and unbound keys map to `None`.
pub fn action(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => Some(Action::Quit),
        KeyCode::Char('u') if ctrl => Some(Action::ClearLine),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c) => Some(Action::Insert(c)),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Delete => Some(Action::Delete),
        KeyCode::Left => Some(Action::Left),
        KeyCode::Right => Some(Action::Right),
        KeyCode::Home => Some(Action::Home),
        KeyCode::End => Some(Action::End),
        KeyCode::F(1) => Some(Action::Toggle(CharClass::Lowercase)),
        KeyCode::F(2) => Some(Action::Toggle(CharClass::Uppercase)),
        KeyCode::F(3) => Some(Action::Toggle(CharClass::Digits)),
        KeyCode::F(4) => Some(Action::Toggle(CharClass::Symbols)),
        KeyCode::F(5) => Some(Action::FlipScale(Attacker::Human)),
        KeyCode::F(6) => Some(Action::FlipScale(Attacker::Computer)),
        KeyCode::F(7) => Some(Action::ToggleMask),
        KeyCode::F(9) => Some(Action::Save),
        _ => None,
    }
}

/// Single-line editor. The cursor is a char index, 0 = before the first char.
pub struct LineEditor {
    text: Zeroizing<String>,
    cursor: usize,
}

impl LineEditor {
    pub fn new() -> Self {
        Self {
            text: Zeroizing::new(String::with_capacity(256)),
            cursor: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(i, _)| i)
    }

    /// Grow into a fresh buffer so the old one is wiped on drop instead of
    /// being released by a reallocation.
    fn reserve(&mut self, additional: usize) {
        let needed = self.text.len() + additional;
        if needed <= self.text.capacity() {
            return;
        }
        let capacity = needed.max(self.text.capacity()) * 2;
        let mut grown = Zeroizing::new(String::with_capacity(capacity));
        grown.push_str(&self.text);
        self.text = grown;
    }

    pub fn insert(&mut self, c: char) {
        self.reserve(c.len_utf8());
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    pub fn insert_str(&mut self, s: &str) {
        self.reserve(s.len());
        let at = self.byte_index(self.cursor);
        self.text.insert_str(at, s);
        self.cursor += s.chars().count();
    }

    /// Apply an editing action. Returns `true` when the text changed.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Insert(c) => {
                self.insert(c);
                true
            }
            Action::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                self.cursor -= 1;
                let at = self.byte_index(self.cursor);
                self.text.remove(at);
                true
            }
            Action::Delete => {
                if self.cursor >= self.char_count() {
                    return false;
                }
                let at = self.byte_index(self.cursor);
                self.text.remove(at);
                true
            }
            Action::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            Action::Right => {
                self.cursor = (self.cursor + 1).min(self.char_count());
                false
            }
            Action::Home => {
                self.cursor = 0;
                false
            }
            Action::End => {
                self.cursor = self.char_count();
                false
            }
            Action::ClearLine => {
                let changed = !self.text.is_empty();
                self.text.clear();
                self.cursor = 0;
                changed
            }
            _ => false,
        }
    }

    /// Take over text the estimator rewrote. The cursor stays behind the
    /// same surviving characters it was behind before.
    pub fn adopt(&mut self, sanitized: &str, kept: impl Fn(char) -> bool) {
        let survivors_before = self.text.chars().take(self.cursor).filter(|&c| kept(c)).count();
        self.text.clear();
        self.reserve(sanitized.len());
        self.text.push_str(sanitized);
        self.cursor = survivors_before.min(sanitized.chars().count());
    }
}
