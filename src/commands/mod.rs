//! Command handlers for the binary
//!
//! Each handler loads the workspace, runs one use case and renders the
//! result as human output or NDJSON. Any failure exits with status 1.

pub mod build;
pub mod clean;
pub mod validate;

use std::path::{Path, PathBuf};

use lambda_bundler::application::BundleLayout;
use lambda_bundler::config::{Config, ConfigWarning};
use lambda_bundler::domain::ports::FileSystem;
use lambda_bundler::presentation::WorkspaceArgs;
use lambda_bundler::{BundlerError, BundlerResult, LocalFs};

use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{ErrorEvent, WarningEvent};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// A loaded workspace: root directory, merged configuration and resolved layout
pub struct Workspace {
    pub root: PathBuf,
    pub config: Config,
    pub layout: BundleLayout,
    pub warnings: Vec<ConfigWarning>,
}

impl Workspace {
    /// CLI directories override `bundler.toml` and `BUNDLER_*` values
    pub fn open(args: &WorkspaceArgs) -> BundlerResult<Self> {
        let root = match &args.workspace {
            Some(path) => path.clone(),
            None => std::env::current_dir()?,
        };
        let (config, warnings) = Config::discover(&root)?;

        let mut layout = config.layout(&root);
        if let Some(dir) = &args.source_dir {
            layout.source_dir = root.join(dir);
        }
        if let Some(dir) = &args.deployment_dir {
            layout.deployment_dir = root.join(dir);
        }

        Ok(Self {
            root,
            config,
            layout,
            warnings,
        })
    }

    /// Fail early when the shared module is absent instead of once per target
    pub fn require_shared_module(&self) -> BundlerResult<PathBuf> {
        let path = self.layout.shared_path();
        if !LocalFs::new().exists(&path) {
            return Err(BundlerError::SharedModuleNotFound { path });
        }
        Ok(path)
    }
}

/// Stable machine-readable code for a command-level error
pub fn error_code(err: &BundlerError) -> &'static str {
    match err {
        BundlerError::Io(_) => "io",
        BundlerError::InvalidConfig { .. } => "invalid_config",
        BundlerError::SourceDirNotFound { .. } => "source_dir_not_found",
        BundlerError::SharedModuleNotFound { .. } => "shared_module_not_found",
        BundlerError::InvalidSharedModule { .. } => "invalid_shared_module",
        BundlerError::UnknownTarget { .. } => "unknown_target",
    }
}

fn error_help(err: &BundlerError) -> Option<&'static str> {
    match err {
        BundlerError::SourceDirNotFound { .. } => {
            Some("pass --source-dir or set bundle.source_dir in bundler.toml")
        }
        BundlerError::SharedModuleNotFound { .. } => {
            Some("create the shared module or set bundle.shared_module in bundler.toml")
        }
        BundlerError::UnknownTarget { .. } => {
            Some("targets are the *.py files in the source directory, or bundle.targets")
        }
        _ => None,
    }
}

/// Report a command-level error and exit with status 1
pub fn fail(ui: &UiContext, command: &str, err: &BundlerError) -> ! {
    if ui.json {
        let mut event = ErrorEvent::new(command, error_code(err), err.to_string());
        if let Some(help) = error_help(err) {
            event = event.with_help(help);
        }
        let _ = emit_event(&event);
    } else {
        eprintln!(
            "{} {}",
            Icon::Error.colored(ui.color, ui.unicode),
            ColoredText::error(format!("Error: {}", err)).render(ui.color)
        );
        if let Some(help) = error_help(err) {
            eprintln!(
                "  {} {}",
                Icon::Arrow.colored(ui.color, ui.unicode),
                ColoredText::dim(help).render(ui.color)
            );
        }
        if ui.annotate() {
            println!(
                "{}",
                github_actions_annotation(AnnotationLevel::Error, &err.to_string(), None, None, None)
            );
        }
    }
    std::process::exit(1);
}

/// Unknown config keys never stop a command; they are surfaced on stderr or as events
pub fn report_config_warnings(ui: &UiContext, command: &str, workspace: &Workspace) {
    for warning in &workspace.warnings {
        if ui.json {
            let _ = emit_event(&WarningEvent::new(
                command,
                warning.file.display().to_string(),
                warning.line,
                warning.to_string(),
            ));
        } else {
            eprintln!(
                "{} {}",
                Icon::Warning.colored(ui.color, ui.unicode),
                ColoredText::warning(warning.to_string()).render(ui.color)
            );
        }
    }
}

/// Open the workspace, or report the failure with a context built from defaults
pub fn open_or_fail(
    args: &WorkspaceArgs,
    command: &str,
    json: bool,
    verbose: u8,
    color: Option<lambda_bundler::presentation::ColorWhen>,
) -> (Workspace, UiContext) {
    match Workspace::open(args) {
        Ok(workspace) => {
            let ui = UiContext::new(json, verbose, color, &workspace.config);
            (workspace, ui)
        }
        Err(err) => {
            let ui = UiContext::new(json, verbose, color, &Config::default());
            fail(&ui, command, &err)
        }
    }
}

/// Path shown in annotations: relative to the workspace when possible
pub fn annotation_path(path: &Path, workspace: &Path) -> String {
    crate::ui::views::display_path(path, workspace)
}
