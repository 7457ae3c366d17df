//! Screen layout.

use cracktime::estimate::chart::ChartConfig;
use cracktime::estimate::{Attacker, CharClass, Selection, Tracker, Update, group_digits};
use cracktime::settings::Settings;
use num_bigint::BigUint;
use zeroize::Zeroizing;

use super::chart;
use super::input::LineEditor;
use crate::terminal::{BOLD, DIM, Frame, GREEN, INNER_WIDTH, RED, RESET};

const COMBINATIONS_LABEL: &str = "Combinations: ";
const COMBINATIONS_WIDTH: usize = INNER_WIDTH - COMBINATIONS_LABEL.len();
const LEADING_WIDTH: usize = 31;

/// Everything the screen shows besides the tracker itself.
pub struct ViewState<'a> {
    pub editor: &'a LineEditor,
    pub settings: &'a Settings,
    pub masked: bool,
    pub status: Option<&'a str>,
}

fn password_line(editor: &LineEditor, masked: bool) -> Zeroizing<String> {
    let count = editor.text().chars().count();
    // Sized up front (4 bytes per char at most, plus the cursor escapes) so
    // the line is never reallocated with the password in it.
    let mut line = Zeroizing::new(String::with_capacity("Password: ".len() + count * 4 + 16));
    line.push_str("Password: ");

    // Reverse-video cell marks the cursor.
    for (i, c) in editor.text().chars().enumerate() {
        let c = if masked { '•' } else { c };
        if i == editor.cursor() {
            line.push_str("\x1b[7m");
            line.push(c);
            line.push_str(RESET);
        } else {
            line.push(c);
        }
    }
    if editor.cursor() >= count {
        line.push_str("\x1b[7m \x1b[0m");
    }
    line
}

/// Grouped count, or its leading digits and a digit count when the full
/// number would not fit the box.
fn combinations_text(count: &BigUint) -> String {
    let grouped = group_digits(count);
    if grouped.len() <= COMBINATIONS_WIDTH {
        return grouped;
    }
    let digits = count.to_str_radix(10).len();
    let leading = grouped[..LEADING_WIDTH].trim_end_matches(',');
    format!(
        "{leading}… ({} digits)",
        group_digits(&BigUint::from(digits))
    )
}

fn toggles_line(selection: Selection) -> String {
    CharClass::ALL
        .iter()
        .enumerate()
        .map(|(i, class)| {
            let mark = if selection.contains(*class) {
                format!("{GREEN}[x]{RESET}")
            } else {
                "[ ]".to_string()
            };
            format!("{mark} F{} {:<10}", i + 1, class.name())
        })
        .collect::<Vec<_>>()
        .join("")
}

pub fn draw(tracker: &Tracker, update: &Update, view: &ViewState<'_>) -> Frame {
    let mut frame = Frame::new();

    frame.box_top("cracktime");
    frame.box_line(&password_line(view.editor, view.masked));
    frame.box_line(&toggles_line(tracker.selection()));
    if tracker.selection().is_empty() {
        frame.box_line(&format!("{RED}No character classes enabled: input is rejected.{RESET}"));
    }
    frame.rule();

    for attacker in Attacker::ALL {
        let reading = update.reading(attacker);
        frame.box_line(&format!(
            "{:<10}{BOLD}{}{RESET}",
            format!("{}:", capitalize(attacker.profile().name)),
            reading.readout()
        ));
    }

    let combinations = if update.length > 0 {
        combinations_text(&update.combinations)
    } else {
        "-".to_string()
    };
    frame.box_line(&format!(
        "{DIM}Alphabet:{RESET} {}   {DIM}Length:{RESET} {}",
        update.alphabet_size, update.length
    ));
    frame.box_line(&format!("{DIM}{COMBINATIONS_LABEL}{RESET}{combinations}"));
    frame.box_bottom();

    for attacker in Attacker::ALL {
        let config = ChartConfig::new(attacker, view.settings.scale(attacker));
        chart::draw(&mut frame, &config, tracker.history(attacker));
    }

    frame.line(&format!(
        "{DIM} F1-F4 classes · F5/F6 scale · F7 {} · F9 save · Esc quit{RESET}",
        if view.masked { "show" } else { "hide" }
    ));
    if let Some(status) = view.status {
        frame.line(&format!(" {status}"));
    }
    frame
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::console_width;
    use cracktime::estimate::{Event, combinations};

    #[test]
    fn test_toggles_fit_the_box() {
        let line = toggles_line(Selection::ALL);
        assert!(console_width(&line) <= crate::terminal::INNER_WIDTH);
        assert!(line.contains("F4 symbols"));
    }

    #[test]
    fn test_masked_password() {
        let mut editor = LineEditor::new();
        editor.insert_str("abc");
        let line = password_line(&editor, true);
        assert!(line.starts_with("Password: •••"));
        assert!(!line.contains("abc"));
    }

    #[test]
    fn test_unmasked_password() {
        let mut editor = LineEditor::new();
        editor.insert_str("héllo");
        let line = password_line(&editor, false);
        assert!(line.starts_with("Password: héllo"));
    }

    #[test]
    fn test_short_combinations_are_grouped() {
        assert_eq!(combinations_text(&combinations(3, 26)), "17,576");
        // 94^12 still fits on one line.
        assert_eq!(
            combinations_text(&combinations(12, 94)),
            "475,920,314,814,253,376,475,136"
        );
    }

    #[test]
    fn test_long_combinations_are_shortened() {
        let count = combinations(20_000, 94);
        let digits = count.to_string().len();
        let text = combinations_text(&count);

        assert!(text.len() <= COMBINATIONS_WIDTH, "{text}");
        assert!(group_digits(&count).starts_with(text.split('…').next().unwrap_or("")));
        assert!(text.ends_with(&format!("({} digits)", group_digits(&BigUint::from(digits)))));
    }

    #[test]
    fn test_long_paste_stays_in_the_box() {
        let selection = Selection::ALL;
        let mut tracker = Tracker::new(selection);
        let mut editor = LineEditor::new();
        editor.insert_str(&"a".repeat(20_000));
        let update = tracker.advance(Event::Typed(editor.text()));
        let settings = Settings::default();

        let frame = draw(
            &tracker,
            &update,
            &ViewState {
                editor: &editor,
                settings: &settings,
                masked: true,
                status: None,
            },
        );
        let line = frame
            .as_str()
            .split("\r\n")
            .find(|l| l.contains("Combinations:"))
            .unwrap_or_default();
        assert_eq!(console_width(line), crate::terminal::BOX_WIDTH);
    }

    #[test]
    fn test_draw_shows_readouts() {
        let selection: Selection = [CharClass::Lowercase].into_iter().collect();
        let mut tracker = Tracker::new(selection);
        let mut editor = LineEditor::new();
        editor.insert_str("abc");
        let update = tracker.advance(Event::Typed(editor.text()));
        let settings = Settings::default();

        let frame = draw(
            &tracker,
            &update,
            &ViewState {
                editor: &editor,
                settings: &settings,
                masked: false,
                status: Some("saved"),
            },
        );
        let text = frame.as_str();
        assert!(text.contains("9.76 hours (human)"));
        assert!(text.contains("17,576"));
        assert!(text.contains("Length: 3 chars · Decryption time: 9.76 hours"));
        assert!(text.contains("Decryption time (0.5 att./s)"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("human"), "Human");
        assert_eq!(capitalize(""), "");
    }
}
