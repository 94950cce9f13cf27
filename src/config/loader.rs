//! Configuration loading

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{BundlerError, BundlerResult};

use super::types::{Config, TargetEntry};
use super::ConfigWarning;

/// Config file name looked up in the workspace root
pub const CONFIG_FILE_NAME: &str = "bundler.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> BundlerResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| BundlerError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.message().to_string(),
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

/// Load the workspace config if it exists, then apply env overrides
pub fn discover(workspace: &Path) -> BundlerResult<(Config, Vec<ConfigWarning>)> {
    let path = workspace.join(CONFIG_FILE_NAME);
    let (config, warnings) = if path.is_file() {
        debug!(path = %path.display(), "loading config");
        load_with_warnings(&path)?
    } else {
        (Config::default(), Vec::new())
    };
    Ok((config.with_env_overrides(), warnings))
}

/// Apply BUNDLER_* overrides read through `var`
pub fn with_env_overrides(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(dir) = var("BUNDLER_SOURCE_DIR").filter(|v| !v.is_empty()) {
        config.bundle.source_dir = dir.into();
    }

    if let Some(dir) = var("BUNDLER_DEPLOYMENT_DIR").filter(|v| !v.is_empty()) {
        config.bundle.deployment_dir = dir.into();
    }

    if let Some(module) = var("BUNDLER_SHARED_MODULE").filter(|v| !v.is_empty()) {
        config.bundle.shared_module = module;
    }

    // BUNDLER_TARGETS (comma-separated)
    if let Some(targets) = var("BUNDLER_TARGETS") {
        let parsed: Vec<TargetEntry> = targets
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(TargetEntry::named)
            .collect();
        if !parsed.is_empty() {
            config.bundle.targets = parsed;
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.trim_start().starts_with(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "bundle",
        "source_dir",
        "deployment_dir",
        "shared_module",
        "artifact_name",
        "targets",
        "name",
        "source",
        "output",
        "classifier",
        "third_party",
        "standard_library",
        "shared_aliases",
        "color",
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
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
