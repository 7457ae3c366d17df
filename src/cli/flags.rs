#[derive(Debug, Default, PartialEq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    /// Ignore the settings file for this run.
    pub defaults: bool,
    pub log: Option<String>,
}
