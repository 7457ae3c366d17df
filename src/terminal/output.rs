//! Terminal output utilities.
//!
//! Box drawing into an off-screen frame, ANSI helpers.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};
use zeroize::Zeroizing;

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const BLUE: &str = "\x1b[38;5;33m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state (fixes staggered text issues).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

/// Print error message in red.
pub fn print_error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;
pub const INNER_WIDTH: usize = BOX_WIDTH - 4;

/// A full screen of output, assembled line by line and written at once.
///
/// Lines end in `\r\n` so the frame renders correctly in raw mode. The
/// buffer may hold the unmasked password and is wiped on drop.
#[derive(Default)]
pub struct Frame {
    buf: Zeroizing<String>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same growth rule as the line editor: copy into a fresh buffer and
    /// let the old one be wiped.
    fn reserve(&mut self, additional: usize) {
        let needed = self.buf.len() + additional;
        if needed <= self.buf.capacity() {
            return;
        }
        let capacity = needed.max(self.buf.capacity()) * 2;
        let mut grown = Zeroizing::new(String::with_capacity(capacity));
        grown.push_str(&self.buf);
        self.buf = grown;
    }

    pub fn line(&mut self, content: &str) {
        self.reserve(content.len() + 2);
        self.buf.push_str(content);
        self.buf.push_str("\r\n");
    }

    /// ┌─ Title ───────────────────────────┐
    pub fn box_top(&mut self, title: &str) {
        if title.is_empty() {
            self.line(&format!("┌{}┐", "─".repeat(BOX_WIDTH - 2)));
        } else {
            let title_part = format!("─ {} ", title);
            let remaining = (BOX_WIDTH - 2).saturating_sub(console_width(&title_part));
            self.line(&format!("┌{}{}┐", title_part, "─".repeat(remaining)));
        }
    }

    /// │ content                                        │
    pub fn box_line(&mut self, content: &str) {
        let padding = INNER_WIDTH.saturating_sub(console_width(content));
        self.reserve(content.len() + padding + 12);
        self.buf.push_str("│ ");
        self.buf.push_str(content);
        self.buf.extend(std::iter::repeat_n(' ', padding));
        self.buf.push_str(" │\r\n");
    }

    /// │          content          │
    pub fn box_line_center(&mut self, content: &str) {
        let total_padding = INNER_WIDTH.saturating_sub(console_width(content));
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        self.line(&format!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        ));
    }

    /// ├───────────────────────────────────────────────────────┤
    pub fn rule(&mut self) {
        self.line(&format!("├{}┤", "─".repeat(BOX_WIDTH - 2)));
    }

    /// └───────────────────────────────────────────────────────┘
    pub fn box_bottom(&mut self) {
        self.line(&format!("└{}┘", "─".repeat(BOX_WIDTH - 2)));
    }

    /// Help entry: key column then a wrapped description.
    pub fn box_opt(&mut self, key: &str, desc: &str) {
        let key_col = 20;
        let desc_col = INNER_WIDTH - key_col;

        let mut lines: Vec<String> = Vec::new();
        let mut current = String::new();
        for word in desc.split_whitespace() {
            if current.is_empty() {
                current = word.to_string();
            } else if current.len() + 1 + word.len() <= desc_col {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }

        let key_padded = format!("{:<width$}", key, width = key_col);
        let mut indent = key_padded.as_str();
        let blank = " ".repeat(key_col);
        for line in &lines {
            self.box_line(&format!("{indent}{line}"));
            indent = blank.as_str();
        }
        if lines.is_empty() {
            self.box_line(&key_padded);
        }
    }

    /// Text written so far.
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Replace the screen with this frame.
    pub fn present(&self) {
        print!("\x1b[H\x1b[2J{}", self.as_str());
        flush();
    }

    /// Print below the cursor without clearing (cooked mode).
    pub fn print(&self) {
        print!("{}", self.as_str().replace("\r\n", "\n"));
        flush();
    }
}

/// Display width of `s`, skipping ANSI escape sequences.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}
