use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings Error: {0}")]
    Settings(String),

    #[error("Argument Error: {0}")]
    Flag(String),
}

pub type Result<T> = std::result::Result<T, Error>;
