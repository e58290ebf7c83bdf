use crossterm::style::{Color, Stylize};

/// Design tokens for cobaltb console output.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons and banner strings must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const PROGRESS: &str = "●";
}

/// Banner lines around test suites. Scripts grep for these, keep them verbatim.
pub mod banners {
    pub const SUITE: &str = "********************************************************";
    pub const ALL_PASSED: &str = "******************* ALL TESTS PASSED *******************";
    pub const SOME_FAILED: &str = "******************* SOME TESTS FAILED *******************";
    pub const SIGNAL_WARNING: &str = "****** WARNING Process terminated by signal";
}

/// Color `text` when color output is enabled
pub fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        text.with(color).to_string()
    } else {
        text.to_string()
    }
}

/// Bold and color `text` when color output is enabled
pub fn paint_bold(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        text.with(color).bold().to_string()
    } else {
        text.to_string()
    }
}
