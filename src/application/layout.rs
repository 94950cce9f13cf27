//! Bundle layout and target resolution
//!
//! A target named `N` reads `{source_dir}/N.py` and writes
//! `{deployment_dir}/N/{artifact_name}` unless its entry overrides either
//! path. With no configured targets every `*.py` file directly inside the
//! source directory is a target, except the shared module and dunder files.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::DEFAULT_SHARED_MODULE;
use crate::error::{BundlerError, BundlerResult};

/// Default artifact file name inside each target's deployment directory
pub const DEFAULT_ARTIFACT_NAME: &str = "lambda_function.py";

/// One configured target entry before path resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSpec {
    pub name: String,
    pub source: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl TargetSpec {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: None,
            output: None,
        }
    }
}

/// A fully resolved (source, output) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildTarget {
    pub name: String,
    pub source_path: PathBuf,
    pub output_path: PathBuf,
}

/// Where sources live and where artifacts go
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleLayout {
    pub source_dir: PathBuf,
    pub deployment_dir: PathBuf,
    pub shared_module: String,
    pub artifact_name: String,
    pub targets: Vec<TargetSpec>,
}

impl BundleLayout {
    pub fn new(source_dir: impl Into<PathBuf>, deployment_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            deployment_dir: deployment_dir.into(),
            shared_module: DEFAULT_SHARED_MODULE.to_string(),
            artifact_name: DEFAULT_ARTIFACT_NAME.to_string(),
            targets: Vec::new(),
        }
    }

    pub fn with_shared_module(mut self, module: impl Into<String>) -> Self {
        self.shared_module = module.into();
        self
    }

    pub fn with_artifact_name(mut self, name: impl Into<String>) -> Self {
        self.artifact_name = name.into();
        self
    }

    pub fn with_targets(mut self, targets: Vec<TargetSpec>) -> Self {
        self.targets = targets;
        self
    }

    /// Path of the shared module source
    pub fn shared_path(&self) -> PathBuf {
        self.source_dir.join(format!("{}.py", self.shared_module))
    }

    /// Resolve one target entry to concrete paths
    pub fn target(&self, spec: &TargetSpec) -> BuildTarget {
        let source_path = match &spec.source {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => self.source_dir.join(path),
            None => self.source_dir.join(format!("{}.py", spec.name)),
        };
        let output_path = match &spec.output {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => self.deployment_dir.join(path),
            None => self
                .deployment_dir
                .join(&spec.name)
                .join(&self.artifact_name),
        };
        BuildTarget {
            name: spec.name.clone(),
            source_path,
            output_path,
        }
    }

    /// Configured targets, or every eligible source file when none are configured
    pub fn resolve_targets<FS: FileSystem>(&self, fs: &FS) -> BundlerResult<Vec<BuildTarget>> {
        if !self.targets.is_empty() {
            return Ok(self.targets.iter().map(|spec| self.target(spec)).collect());
        }

        let entries = fs
            .list_dir(&self.source_dir)
            .map_err(|_| BundlerError::SourceDirNotFound {
                path: self.source_dir.clone(),
            })?;

        let mut names: Vec<String> = entries
            .iter()
            .filter(|path| path.extension().is_some_and(|ext| ext == "py"))
            .filter_map(|path| path.file_stem())
            .map(|stem| stem.to_string_lossy().into_owned())
            .filter(|stem| stem != &self.shared_module && !stem.starts_with("__"))
            .collect();
        names.sort();

        debug!(
            source_dir = %self.source_dir.display(),
            discovered = names.len(),
            "discovered targets"
        );
        Ok(names
            .into_iter()
            .map(|name| self.target(&TargetSpec::named(name)))
            .collect())
    }

    /// Look up one target by name among the resolved targets
    pub fn find_target<FS: FileSystem>(&self, fs: &FS, name: &str) -> BundlerResult<BuildTarget> {
        let name = name.strip_suffix(".py").unwrap_or(name);
        self.resolve_targets(fs)?
            .into_iter()
            .find(|target| target.name == name)
            .ok_or_else(|| BundlerError::UnknownTarget {
                name: name.to_string(),
            })
    }

    /// Whether `dir` lies strictly inside the deployment directory
    pub fn is_inside_deployment(&self, dir: &Path) -> bool {
        dir != self.deployment_dir && dir.starts_with(&self.deployment_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::MockFileSystem;

    fn layout() -> BundleLayout {
        BundleLayout::new("/ws/src/functions", "/ws/deployment")
    }

    #[test]
    fn default_target_paths() {
        let target = layout().target(&TargetSpec::named("user_auth"));
        assert_eq!(target.source_path, PathBuf::from("/ws/src/functions/user_auth.py"));
        assert_eq!(
            target.output_path,
            PathBuf::from("/ws/deployment/user_auth/lambda_function.py")
        );
    }

    #[test]
    fn overridden_target_paths() {
        let spec = TargetSpec {
            name: "orders".to_string(),
            source: Some(PathBuf::from("legacy/orders_v2.py")),
            output: Some(PathBuf::from("/abs/out/handler.py")),
        };
        let target = layout().with_artifact_name("main.py").target(&spec);
        assert_eq!(target.source_path, PathBuf::from("/ws/src/functions/legacy/orders_v2.py"));
        assert_eq!(target.output_path, PathBuf::from("/abs/out/handler.py"));
    }

    #[test]
    fn discovery_skips_shared_and_dunder_files() {
        let fs = MockFileSystem::with_files([
            ("/ws/src/functions/user_auth.py", ""),
            ("/ws/src/functions/shared_configuration.py", ""),
            ("/ws/src/functions/__init__.py", ""),
            ("/ws/src/functions/README.md", ""),
            ("/ws/src/functions/billing.py", ""),
        ]);
        let names: Vec<String> = layout()
            .resolve_targets(&fs)
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["billing", "user_auth"]);
    }

    #[test]
    fn configured_targets_win_over_discovery() {
        let fs = MockFileSystem::new();
        let targets = layout()
            .with_targets(vec![TargetSpec::named("b"), TargetSpec::named("a")])
            .resolve_targets(&fs)
            .unwrap();
        assert_eq!(targets[0].name, "b");
        assert_eq!(targets[1].name, "a");
    }

    #[test]
    fn missing_source_dir_is_an_error() {
        let err = layout().resolve_targets(&MockFileSystem::new()).unwrap_err();
        assert!(matches!(err, BundlerError::SourceDirNotFound { .. }));
    }

    #[test]
    fn find_target_accepts_file_name() {
        let fs = MockFileSystem::with_files([("/ws/src/functions/user_auth.py", "")]);
        assert_eq!(layout().find_target(&fs, "user_auth.py").unwrap().name, "user_auth");
        assert!(matches!(
            layout().find_target(&fs, "nope"),
            Err(BundlerError::UnknownTarget { .. })
        ));
    }

    #[test]
    fn inside_deployment_excludes_the_root() {
        let layout = layout();
        assert!(layout.is_inside_deployment(Path::new("/ws/deployment/user_auth")));
        assert!(!layout.is_inside_deployment(Path::new("/ws/deployment")));
        assert!(!layout.is_inside_deployment(Path::new("/ws/other")));
    }
}
