//! Interactive front-end: turns key presses into estimator events and
//! redraws the screen after each one.

mod chart;
mod input;
mod text;
mod view;

use crossterm::event::{Event as TermEvent, read};
use tracing::{info, warn};
use zeroize::Zeroizing;

use cracktime::estimate::{Event, Tracker, Update};
use cracktime::settings::Settings;
use cracktime::Result;

use crate::terminal::RawModeGuard;
use input::{Action, LineEditor};
use view::ViewState;

pub use text::print_help;

struct App {
    tracker: Tracker,
    editor: LineEditor,
    settings: Settings,
    update: Update,
    masked: bool,
    status: Option<String>,
}

impl App {
    fn new(settings: Settings) -> Self {
        let mut tracker = Tracker::new(settings.selection());
        let update = tracker.advance(Event::Typed(""));
        Self {
            tracker,
            editor: LineEditor::new(),
            settings,
            update,
            masked: true,
            status: None,
        }
    }

    fn draw(&self) {
        view::draw(
            &self.tracker,
            &self.update,
            &ViewState {
                editor: &self.editor,
                settings: &self.settings,
                masked: self.masked,
                status: self.status.as_deref(),
            },
        )
        .present();
    }

    /// Feed an estimator event and write any sanitized text back.
    fn step(&mut self, event: Event<'_>) {
        self.update = self.tracker.advance(event);
        if self.update.rewritten {
            let alphabet = self.tracker.alphabet();
            self.editor
                .adopt(self.tracker.password(), |c| alphabet.permits(c));
        }
    }

    fn typed(&mut self) {
        let raw = Zeroizing::new(self.editor.text().to_string());
        self.step(Event::Typed(&raw));
    }

    fn paste(&mut self, text: &str) {
        let flat: String = text.chars().filter(|c| !c.is_control()).collect();
        self.editor.insert_str(&flat);
        self.typed();
    }

    /// Returns `false` when the user asked to quit.
    fn handle(&mut self, action: Action) -> bool {
        self.status = None;
        match action {
            Action::Quit => return false,
            Action::Toggle(class) => self.step(Event::Toggled(class)),
            Action::FlipScale(attacker) => self.settings.flip_scale(attacker),
            Action::ToggleMask => self.masked = !self.masked,
            Action::Save => self.save(),
            edit => {
                if self.editor.apply(edit) {
                    self.typed();
                }
            }
        }
        true
    }

    fn save(&mut self) {
        self.settings.set_selection(self.tracker.selection());
        self.status = Some(match self.settings.save_to_file() {
            Ok(()) => "Settings saved.".to_string(),
            Err(e) => {
                warn!(error = %e, "saving settings failed");
                format!("Could not save settings: {e}")
            }
        });
    }
}

/// Run the interactive estimator until the user quits.
pub fn run(settings: Settings) -> Result<()> {
    let mut app = App::new(settings);
    let _guard = RawModeGuard::new()?;
    info!("interactive session started");

    app.draw();
    loop {
        match read()? {
            TermEvent::Key(key) => {
                let Some(action) = input::action(key) else {
                    continue;
                };
                if !app.handle(action) {
                    break;
                }
            }
            TermEvent::Paste(text) => app.paste(&text),
            TermEvent::Resize(..) => {}
            _ => continue,
        }
        app.draw();
    }

    info!("interactive session ended");
    Ok(())
}
