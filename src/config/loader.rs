//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{WiserError, WiserResult};

use super::types::{Config, Verbosity};

/// Project config location, relative to the project root
pub const PROJECT_CONFIG_PATH: &str = ".wiser/config.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> WiserResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| WiserError::InvalidConfig {
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

/// Load the first config file found (project, then user) with its warnings,
/// then apply `WISER_*` overrides. A broken config file is an error.
pub fn discover(project_root: Option<&Path>) -> WiserResult<(Config, Vec<ConfigWarning>)> {
    let project_config = project_root.map(|root| root.join(PROJECT_CONFIG_PATH));
    let candidates = project_config.into_iter().chain(user_config_path());

    for path in candidates {
        if path.exists() {
            let (config, warnings) = load_with_warnings(&path)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Path of the per-user config file (`<config dir>/wiser/config.toml`)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wiser").join("config.toml"))
}

/// Apply environment variable overrides (WISER_* prefix)
fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable source
pub fn with_overrides_from<F>(mut config: Config, var: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // WISER_STORE
    if let Some(path) = var("WISER_STORE").filter(|p| !p.is_empty()) {
        config.store.path = PathBuf::from(path);
    }

    // WISER_USER
    if let Some(user) = var("WISER_USER").filter(|u| !u.trim().is_empty()) {
        config.publish.user = Some(user);
    }

    // WISER_VERBOSITY
    if let Some(verbosity) = var("WISER_VERBOSITY") {
        config.output.verbosity = Verbosity::from_override(&verbosity);
    }

    // WISER_JSON
    if let Some(val) = var("WISER_JSON") {
        config.output.json = is_truthy(&val);
    }

    // WISER_DRY_RUN
    if let Some(val) = var("WISER_DRY_RUN") {
        config.publish.dry_run = is_truthy(&val);
    }

    config
}

fn is_truthy(val: &str) -> bool {
    !matches!(val.to_lowercase().as_str(), "" | "0" | "false" | "no" | "off")
}

/// Line of `key = ...` or a `[key]` table header, 1-based
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            let line = line.trim();
            let assigns = line
                .strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with('='));
            let header = line
                .trim_start_matches('[')
                .trim_end_matches(']')
                .trim()
                == key;
            assigns || (line.starts_with('[') && header)
        })
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "store",
        "path",
        "publish",
        "user",
        "dry_run",
        "output",
        "verbosity",
        "json",
        "unicode",
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
