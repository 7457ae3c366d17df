//! Settings file persistence.
//!
//! One line: `lower,upper,digits,symbols,human_scale,computer_scale`.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::Settings;
use crate::error::{Error, Result};

const FIELDS: usize = 6;

pub fn save(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    file.write_all(to_line(settings).as_bytes())?;
    info!(path = %path.display(), "settings saved");
    Ok(())
}

pub fn load(path: &Path) -> Result<Settings> {
    if !path.exists() {
        debug!(path = %path.display(), "no settings file, writing defaults");
        let settings = Settings::default();
        save(&settings, path)?;
        return Ok(settings);
    }

    let contents = fs::read_to_string(path)?;
    match contents.lines().next() {
        Some(line) if !line.trim().is_empty() => from_line(line.trim()),
        _ => Ok(Settings::default()),
    }
}

pub fn to_line(settings: &Settings) -> String {
    format!(
        "{},{},{},{},{},{}\n",
        settings.lowercase,
        settings.uppercase,
        settings.digits,
        settings.symbols,
        settings.human_scale,
        settings.computer_scale,
    )
}

pub fn from_line(line: &str) -> Result<Settings> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.len() != FIELDS {
        return Err(Error::Settings(format!(
            "expected {FIELDS} fields, found {}",
            parts.len()
        )));
    }

    let flag = |i: usize| {
        parts[i]
            .parse::<bool>()
            .map_err(|_| Error::Settings(format!("field {}: '{}' is not a bool", i + 1, parts[i])))
    };

    Ok(Settings {
        lowercase: flag(0)?,
        uppercase: flag(1)?,
        digits: flag(2)?,
        symbols: flag(3)?,
        human_scale: parts[4].parse().map_err(Error::Settings)?,
        computer_scale: parts[5].parse().map_err(Error::Settings)?,
    })
}

#[inline]
pub fn get_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/cracktime/settings")
}
