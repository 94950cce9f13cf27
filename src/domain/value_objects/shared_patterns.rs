//! Shared-module import patterns
//!
//! A line imports the shared module when it matches one of:
//!
//! - `from \.{shared_module} import`
//! - `import {shared_module}`
//! - `from {shared_module} import`
//!
//! Matching is case-sensitive and unanchored, so commented-out imports count too.

use regex::Regex;

use crate::error::{BundlerError, BundlerResult};

/// Default identifier of the shared configuration module
pub const DEFAULT_SHARED_MODULE: &str = "shared_configuration";

/// Compiled detection patterns for one shared module name
#[derive(Debug, Clone)]
pub struct SharedImportPatterns {
    module: String,
    patterns: Vec<Regex>,
}

impl SharedImportPatterns {
    /// Compile the patterns for `module`, which must be a Python identifier.
    pub fn new(module: &str) -> BundlerResult<Self> {
        validate_identifier(module)?;
        let escaped = regex::escape(module);
        let sources = [
            format!(r"from \.{escaped} import"),
            format!(r"import {escaped}\b"),
            format!(r"from {escaped} import"),
        ];
        let patterns = sources
            .iter()
            .map(|source| {
                Regex::new(source).map_err(|e| BundlerError::InvalidSharedModule {
                    name: module.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<BundlerResult<Vec<_>>>()?;
        Ok(Self {
            module: module.to_string(),
            patterns,
        })
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn is_match(&self, line: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(line))
    }
}

fn validate_identifier(name: &str) -> BundlerResult<()> {
    let invalid = |reason: &str| BundlerError::InvalidSharedModule {
        name: name.to_string(),
        reason: reason.to_string(),
    };
    let mut chars = name.chars();
    match chars.next() {
        None => return Err(invalid("name is empty")),
        Some(c) if !(c.is_ascii_alphabetic() || c == '_') => {
            return Err(invalid("must start with a letter or underscore"))
        }
        Some(_) => {}
    }
    if chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(())
    } else {
        Err(invalid("may only contain letters, digits and underscores"))
    }
}
