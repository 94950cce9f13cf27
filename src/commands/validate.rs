//! Validate command handler
//!
//! Scans markers without writing. `--preview` additionally assembles one
//! target in memory and prints the artifact.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use lambda_bundler::application::{ValidateResult, ValidateScope};
use lambda_bundler::presentation::{create_validate_use_case, ColorWhen, ValidateArgs, WorkspaceArgs};
use lambda_bundler::LocalFs;

use crate::commands::{annotation_path, fail, open_or_fail, report_config_warnings};
use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, DataEvent, FileEvent, StartEvent, WarningEvent};
use crate::ui::views::display_path;
use crate::ui::views::validate::{render_preview, render_validate_header, render_validate_result};

const COMMAND: &str = "validate";

/// Map the mutually exclusive flags to a scope; no flag means complete
pub fn scope_from_args(args: &ValidateArgs) -> ValidateScope {
    if let Some(name) = &args.file {
        ValidateScope::File(name.clone())
    } else if args.all {
        ValidateScope::All
    } else if args.shared_config {
        ValidateScope::SharedConfig
    } else {
        ValidateScope::Complete
    }
}

fn scope_label(scope: &ValidateScope) -> String {
    match scope {
        ValidateScope::File(name) => format!("file {}", name),
        ValidateScope::All => "all targets".to_string(),
        ValidateScope::SharedConfig => "shared configuration".to_string(),
        ValidateScope::Complete => "all targets + shared configuration".to_string(),
    }
}

pub fn cmd_validate(
    workspace_args: &WorkspaceArgs,
    args: &ValidateArgs,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let started = Instant::now();
    let (workspace, ui) = open_or_fail(workspace_args, COMMAND, json, verbose, color);

    if ui.json {
        emit_event(&StartEvent::new(COMMAND))?;
    }
    report_config_warnings(&ui, COMMAND, &workspace);

    let use_case = match create_validate_use_case(&workspace.config.pipeline_settings()) {
        Ok(use_case) => use_case,
        Err(err) => fail(&ui, COMMAND, &err),
    };
    let fs = LocalFs::new();

    if let Some(name) = &args.preview {
        let target = match workspace.layout.find_target(&fs, name) {
            Ok(target) => target,
            Err(err) => fail(&ui, COMMAND, &err),
        };
        let preview = use_case.preview(&target, &workspace.layout.shared_path());

        if ui.json {
            emit_files(&preview.validation, &workspace.root)?;
            for warning in &preview.warnings {
                emit_event(&WarningEvent::new(
                    COMMAND,
                    display_path(&warning.file, &workspace.root),
                    Some(warning.line),
                    warning.message.as_str(),
                ))?;
            }
            if let (Some(artifact), Some(summary)) = (&preview.artifact, &preview.summary) {
                emit_event(&DataEvent::new(
                    COMMAND,
                    serde_json::json!({
                        "target": target.name,
                        "artifact": artifact.text(),
                        "summary": summary,
                    }),
                ))?;
            }
            emit_complete(preview.is_valid(), started)?;
        } else {
            print!(
                "{}",
                render_preview(
                    &preview,
                    &target.name,
                    &workspace.root,
                    ui.caps.width,
                    ui.color,
                    ui.unicode
                )
            );
            if ui.annotate() {
                print_annotations(&preview.validation, &workspace.root);
            }
        }

        if !preview.is_valid() {
            std::process::exit(1);
        }
        return Ok(());
    }

    let scope = scope_from_args(args);
    let (targets, shared_path) = match scope.resolve(&workspace.layout, &fs) {
        Ok(resolved) => resolved,
        Err(err) => fail(&ui, COMMAND, &err),
    };

    if !ui.json {
        print!(
            "{}",
            render_validate_header(&scope_label(&scope), &workspace.root, ui.color, ui.unicode)
        );
    }

    let result = use_case.execute(&targets, shared_path.as_deref());

    if ui.json {
        emit_files(&result, &workspace.root)?;
        emit_complete(result.is_valid(), started)?;
    } else {
        print!(
            "{}",
            render_validate_result(
                &result,
                &workspace.root,
                ui.verbose > 0,
                ui.color,
                ui.unicode
            )
        );
        if ui.annotate() {
            print_annotations(&result, &workspace.root);
        }
    }

    if !result.is_valid() {
        std::process::exit(1);
    }
    Ok(())
}

fn emit_files(result: &ValidateResult, root: &Path) -> Result<()> {
    for file in &result.files {
        emit_event(&FileEvent {
            event: "file",
            command: COMMAND,
            path: display_path(&file.path, root),
            kind: file.kind.to_string(),
            valid: file.is_valid(),
            errors: file.messages(),
        })?;
    }
    Ok(())
}

fn emit_complete(valid: bool, started: Instant) -> Result<()> {
    let complete = if valid {
        CompleteEvent::success(COMMAND)
    } else {
        CompleteEvent::failure(COMMAND)
    };
    emit_event(&complete.with_duration(started.elapsed().as_millis() as u64))?;
    Ok(())
}

fn print_annotations(result: &ValidateResult, root: &Path) {
    for file in result.files.iter().filter(|f| !f.is_valid()) {
        let path = annotation_path(&file.path, root);
        if let Some(error) = &file.read_error {
            println!(
                "{}",
                github_actions_annotation(AnnotationLevel::Error, error, Some(&path), None, None)
            );
        }
        for issue in &file.issues {
            println!(
                "{}",
                github_actions_annotation(
                    AnnotationLevel::Error,
                    &issue.message,
                    Some(&path),
                    issue.line,
                    None
                )
            );
        }
    }
}
