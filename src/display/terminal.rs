//! TTY detection and color support logic

use std::io::IsTerminal;

use crate::config::ColorMode;

/// Decide whether to style output, given the configured mode
pub fn should_use_colors(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => auto_detect(),
    }
}

fn auto_detect() -> bool {
    // NO_COLOR wins over everything (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if let Ok(val) = std::env::var("CLICOLOR_FORCE") {
        if val != "0" {
            return true;
        }
    }

    if std::env::var("CLICOLOR").is_ok_and(|val| val == "0") {
        return false;
    }

    std::io::stdout().is_terminal()
}
