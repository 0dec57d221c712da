use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Journal configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the journal file entries are appended to
    pub journal_file: PathBuf,

    /// Display settings
    pub display: Display,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Display {
    /// When to use terminal styling
    pub color: ColorMode,

    /// Show how many days a finished book took
    pub show_duration: bool,
}

/// Terminal styling preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Style only when stdout is a terminal and the environment allows it
    Auto,
    Always,
    Never,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            journal_file: PathBuf::from("reading_journal.txt"),
            display: Display::default(),
        }
    }
}

impl Default for Display {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            show_duration: true,
        }
    }
}
