//! Event types shared by every command's JSON output.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
            duration_ms: None,
        }
    }

    pub fn failure(command: &'a str) -> Self {
        Self {
            success: false,
            ..Self::success(command)
        }
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

/// A command-level failure: bad config, missing directories, unknown target
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub code: &'a str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, code: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            code,
            message: message.into(),
            help: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DataEvent<'a, T: Serialize> {
    pub event: &'static str,
    pub command: &'a str,
    #[serde(flatten)]
    pub data: T,
}

impl<'a, T: Serialize> DataEvent<'a, T> {
    pub fn new(command: &'a str, data: T) -> Self {
        Self {
            event: "data",
            command,
            data,
        }
    }
}

/// Outcome of one build target (`written`, `unchanged` or `failed`)
#[derive(Debug, Clone, Serialize)]
pub struct TargetEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub name: String,
    pub output: String,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

/// Validation outcome of one source document
#[derive(Debug, Clone, Serialize)]
pub struct FileEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub path: String,
    pub kind: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

/// Non-fatal problem: a malformed import or an unknown config key
#[derive(Debug, Clone, Serialize)]
pub struct WarningEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    pub message: String,
}

impl<'a> WarningEvent<'a> {
    pub fn new(
        command: &'a str,
        file: impl Into<String>,
        line: Option<usize>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            event: "warning",
            command,
            file: file.into(),
            line,
            message: message.into(),
        }
    }
}

/// One path handled by `clean` (`removed`, `would_remove`, `removed_dir`, `missing` or `failed`)
#[derive(Debug, Clone, Serialize)]
pub struct CleanFileEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub path: String,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl<'a> CleanFileEvent<'a> {
    pub fn new(command: &'a str, path: impl Into<String>, status: &'static str) -> Self {
        Self {
            event: "file",
            command,
            path: path.into(),
            status,
            reason: None,
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}
