use std::env;
use std::fs::OpenOptions;
use std::process;
use std::sync::Mutex;

use tracing::{info, warn};

use cracktime::settings::Settings;

mod cli;
mod exits;
mod terminal;
mod tui;

fn init_logging(path: &str) -> cracktime::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    Ok(())
}

fn main() {
    exits::install_handlers();
    exits::forbid_core_dumps();

    let args: Vec<String> = env::args().collect();
    let flags = cli::parse(&args).unwrap_or_else(|e| {
        terminal::print_error(&e.to_string());
        eprintln!("Try 'cracktime --help'.");
        process::exit(2);
    });

    if flags.help {
        tui::print_help();
        return;
    }
    if flags.version {
        println!("cracktime {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if let Some(path) = &flags.log
        && let Err(e) = init_logging(path)
    {
        terminal::print_error(&format!("Cannot open log file {}: {}", path, e));
        process::exit(1);
    }

    info!(version = env!("CARGO_PKG_VERSION"), "starting cracktime");

    let settings = if flags.defaults {
        Settings::default()
    } else {
        Settings::load_from_file().unwrap_or_else(|e| {
            warn!(error = %e, "falling back to default settings");
            Settings::default()
        })
    };

    if let Err(e) = tui::run(settings) {
        terminal::reset_terminal();
        terminal::print_error(&e.to_string());
        process::exit(1);
    }
}
