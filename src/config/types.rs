//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::application::layout::{BundleLayout, TargetSpec, DEFAULT_ARTIFACT_NAME};
use crate::domain::services::PipelineSettings;
use crate::domain::value_objects::DEFAULT_SHARED_MODULE;
use crate::error::BundlerResult;

use super::loader;
use super::ConfigWarning;

/// Where sources are read from and artifacts written to
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BundleConfig {
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    #[serde(default = "default_deployment_dir")]
    pub deployment_dir: PathBuf,

    #[serde(default = "default_shared_module")]
    pub shared_module: String,

    #[serde(default = "default_artifact_name")]
    pub artifact_name: String,

    /// Empty means every eligible `*.py` file in `source_dir`
    #[serde(default)]
    pub targets: Vec<TargetEntry>,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            deployment_dir: default_deployment_dir(),
            shared_module: default_shared_module(),
            artifact_name: default_artifact_name(),
            targets: Vec::new(),
        }
    }
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("src/functions")
}

fn default_deployment_dir() -> PathBuf {
    PathBuf::from("deployment")
}

fn default_shared_module() -> String {
    DEFAULT_SHARED_MODULE.to_string()
}

fn default_artifact_name() -> String {
    DEFAULT_ARTIFACT_NAME.to_string()
}

/// One configured target.
///
/// Supports both the bare form:
///   targets = ["user_auth", "billing"]
///
/// And the table form with path overrides:
///   [[bundle.targets]]
///   name = "orders"
///   source = "legacy/orders_v2.py"
///   output = "orders/handler.py"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetEntry {
    pub name: String,
    pub source: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl TargetEntry {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: None,
            output: None,
        }
    }

    pub fn to_spec(&self) -> TargetSpec {
        TargetSpec {
            name: self.name.clone(),
            source: self.source.clone(),
            output: self.output.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TargetEntryDe {
    Name(String),
    Table {
        name: String,
        #[serde(default)]
        source: Option<PathBuf>,
        #[serde(default)]
        output: Option<PathBuf>,
    },
}

impl<'de> Deserialize<'de> for TargetEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match TargetEntryDe::deserialize(deserializer)? {
            TargetEntryDe::Name(name) => Ok(Self::named(name)),
            TargetEntryDe::Table {
                name,
                source,
                output,
            } => Ok(Self {
                name,
                source,
                output,
            }),
        }
    }
}

/// Extra reference names for import classification
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct ClassifierConfig {
    #[serde(default)]
    pub third_party: Vec<String>,

    #[serde(default)]
    pub standard_library: Vec<String>,

    /// Module names treated as the shared module
    #[serde(default)]
    pub shared_aliases: Vec<String>,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure (`bundler.toml`)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub bundle: BundleConfig,

    #[serde(default)]
    pub classifier: ClassifierConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> BundlerResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> BundlerResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// `{workspace}/bundler.toml` if present, else defaults; env overrides applied
    pub fn discover(workspace: &Path) -> BundlerResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(workspace)
    }

    /// Apply environment variable overrides (BUNDLER_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    /// Resolve the bundle section against `workspace`
    pub fn layout(&self, workspace: &Path) -> BundleLayout {
        let bundle = &self.bundle;
        BundleLayout::new(
            workspace.join(&bundle.source_dir),
            workspace.join(&bundle.deployment_dir),
        )
        .with_shared_module(&bundle.shared_module)
        .with_artifact_name(&bundle.artifact_name)
        .with_targets(bundle.targets.iter().map(TargetEntry::to_spec).collect())
    }

    pub fn pipeline_settings(&self) -> PipelineSettings {
        PipelineSettings {
            shared_module: self.bundle.shared_module.clone(),
            third_party: self.classifier.third_party.clone(),
            standard_library: self.classifier.standard_library.clone(),
            shared_aliases: self.classifier.shared_aliases.clone(),
        }
    }
}
