//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConsoleError, ConsoleResult};

use super::types::Config;

/// Project config file name, looked up in the source root
pub const PROJECT_CONFIG_FILE: &str = "cobaltb.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ConsoleResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConsoleError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults, then apply env overrides.
///
/// A config file that fails to parse is reported as a warning and skipped.
pub fn load_or_default(source_root: &Path) -> (Config, Vec<ConfigWarning>) {
    let candidates = [
        Some(source_root.join(PROJECT_CONFIG_FILE)),
        dirs::config_dir().map(|dir| dir.join("cobaltb").join("config.toml")),
    ];

    for path in candidates.into_iter().flatten() {
        if !path.exists() {
            continue;
        }
        match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                log::debug!("Loaded config from {}", path.display());
                return (with_env_overrides(config), warnings);
            }
            Err(e) => log::warn!("Ignoring config {}: {}", path.display(), e),
        }
    }

    (with_env_overrides(Config::default()), Vec::new())
}

/// Apply environment variable overrides (COBALTB_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable source
pub fn apply_overrides<F>(mut config: Config, var: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(dir) = var("COBALTB_OUT_DIR") {
        config.paths.out_dir = PathBuf::from(dir);
    }

    if let Some(dir) = var("COBALTB_SYSROOT_DIR") {
        config.paths.sysroot_dir = PathBuf::from(dir);
    }

    if let Some(project) = var("COBALTB_GCE_PROJECT") {
        config.gce.project = project;
    }

    if let Some(cluster) = var("COBALTB_GCE_CLUSTER") {
        config.gce.cluster = cluster;
    }

    if let Some(instance) = var("COBALTB_BIGTABLE_INSTANCE") {
        config.bigtable.instance = instance;
    }

    if let Some(wait) = var("COBALTB_STARTUP_WAIT_MS") {
        match wait.trim().parse() {
            Ok(ms) => config.tests.service_startup_wait_ms = ms,
            Err(_) => log::warn!(
                "Invalid COBALTB_STARTUP_WAIT_MS value '{}', keeping {}",
                wait,
                config.tests.service_startup_wait_ms
            ),
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "paths",
        "out_dir",
        "sysroot_dir",
        "ports",
        "shuffler",
        "analyzer_service",
        "report_master",
        "gce",
        "project",
        "project_domain",
        "cluster",
        "registry",
        "bigtable",
        "instance",
        "table",
        "test_project",
        "tests",
        "service_startup_wait_ms",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
