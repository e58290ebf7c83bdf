use is_terminal::IsTerminal;

/// Environment variable that turns colored output off
pub const NO_COLOR_ENV: &str = "COBALTB_NO_COLOR";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    pub supports_color: bool,
    pub is_ci: bool,
}

impl TerminalCapabilities {
    /// Color only for an interactive terminal outside CI
    pub fn color_enabled(&self) -> bool {
        self.supports_color && !self.is_ci
    }
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(
        |key| std::env::var(key).ok(),
        std::io::stdout().is_terminal(),
    )
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");

    let no_color = get_env("NO_COLOR").is_some() || get_env(NO_COLOR_ENV).is_some();
    let is_ci = is_ci_env(&get_env);

    TerminalCapabilities {
        is_tty,
        supports_color: is_tty && !term_is_dumb && !no_color,
        is_ci,
    }
}

fn is_ci_env(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &["CI", "JENKINS_HOME", "BUILDKITE", "KOKORO_JOB_NAME"];

    KEYS.iter().any(|k| get_env(k).is_some())
}
