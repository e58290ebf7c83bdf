//! Console output: design tokens, terminal detection and event rendering

pub mod events;
pub mod terminal;
pub mod theme;

use cobaltb::config::ConfigWarning;

use self::theme::{colors, icons, paint};

/// Print non-fatal config warnings to stderr
pub fn print_config_warnings(warnings: &[ConfigWarning], color: bool) {
    for w in warnings {
        let icon = paint(icons::WARNING, colors::WARNING, color);
        match w.line {
            Some(line) => eprintln!(
                "{} Unknown config key '{}' in {}:{}",
                icon,
                w.key,
                w.file.display(),
                line
            ),
            None => eprintln!("{} Unknown config key '{}' in {}", icon, w.key, w.file.display()),
        }
        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?", suggestion);
        }
    }
}
