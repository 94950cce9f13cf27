//! Build command handler

use std::time::Instant;

use anyhow::Result;

use lambda_bundler::application::{BuildResult, BuildTarget, TargetError, TargetStatus};
use lambda_bundler::presentation::{create_build_use_case, ColorWhen, WorkspaceArgs};
use lambda_bundler::{BundlerError, BundlerResult, LocalFs};

use crate::commands::{annotation_path, fail, open_or_fail, report_config_warnings};
use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, StartEvent, TargetEvent, WarningEvent};
use crate::ui::views::build::{render_build_header, render_build_result};
use crate::ui::views::display_path;

const COMMAND: &str = "build";

pub fn cmd_build(
    args: &WorkspaceArgs,
    only: Option<&[String]>,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let started = Instant::now();
    let (workspace, ui) = open_or_fail(args, COMMAND, json, verbose, color);

    if ui.json {
        emit_event(&StartEvent::new(COMMAND))?;
    }
    report_config_warnings(&ui, COMMAND, &workspace);

    let fs = LocalFs::new();
    let targets = match workspace
        .layout
        .resolve_targets(&fs)
        .and_then(|all| select_targets(all, only))
    {
        Ok(targets) => targets,
        Err(err) => fail(&ui, COMMAND, &err),
    };
    let shared_path = match workspace.require_shared_module() {
        Ok(path) => path,
        Err(err) => fail(&ui, COMMAND, &err),
    };
    let use_case = match create_build_use_case(&workspace.config.pipeline_settings()) {
        Ok(use_case) => use_case,
        Err(err) => fail(&ui, COMMAND, &err),
    };

    if !ui.json {
        print!(
            "{}",
            render_build_header(
                &workspace.layout,
                &workspace.root,
                targets.len(),
                ui.color,
                ui.unicode
            )
        );
    }

    let result = use_case.execute(&targets, &shared_path);

    if ui.json {
        emit_json(&result, &workspace.root)?;
        let complete = if result.is_success() {
            CompleteEvent::success(COMMAND)
        } else {
            CompleteEvent::failure(COMMAND)
        };
        emit_event(&complete.with_duration(started.elapsed().as_millis() as u64))?;
    } else {
        print!(
            "{}",
            render_build_result(
                &result,
                &workspace.root,
                ui.verbose > 0,
                ui.color,
                ui.unicode
            )
        );
        if ui.annotate() {
            for line in annotations(&result, &workspace.root) {
                println!("{}", line);
            }
        }
    }

    if !result.is_success() {
        std::process::exit(1);
    }
    Ok(())
}

/// Keep the requested targets, in the order given
fn select_targets(all: Vec<BuildTarget>, only: Option<&[String]>) -> BundlerResult<Vec<BuildTarget>> {
    let Some(names) = only else {
        return Ok(all);
    };
    names
        .iter()
        .map(|name| {
            let name = name.strip_suffix(".py").unwrap_or(name);
            all.iter()
                .find(|target| target.name == name)
                .cloned()
                .ok_or_else(|| BundlerError::UnknownTarget {
                    name: name.to_string(),
                })
        })
        .collect()
}

fn emit_json(result: &BuildResult, root: &std::path::Path) -> Result<()> {
    for report in &result.targets {
        let (status, errors) = match &report.status {
            TargetStatus::Built => ("written", Vec::new()),
            TargetStatus::Unchanged => ("unchanged", Vec::new()),
            TargetStatus::Failed(errors) => (
                "failed",
                errors.iter().flat_map(TargetError::messages).collect(),
            ),
        };
        emit_event(&TargetEvent {
            event: "target",
            command: COMMAND,
            name: report.name.clone(),
            output: display_path(&report.output_path, root),
            status,
            errors,
        })?;
    }
    for warning in &result.warnings {
        emit_event(&WarningEvent::new(
            COMMAND,
            display_path(&warning.file, root),
            Some(warning.line),
            warning.message.as_str(),
        ))?;
    }
    Ok(())
}

/// One annotation per problem, pointing at the file and line that caused it
fn annotations(result: &BuildResult, root: &std::path::Path) -> Vec<String> {
    let mut lines = Vec::new();
    for (name, errors) in result.failures() {
        for error in errors {
            match error {
                TargetError::StructuralMarker { file, issues } => {
                    let file = annotation_path(file, root);
                    for issue in issues {
                        lines.push(github_actions_annotation(
                            AnnotationLevel::Error,
                            &issue.message,
                            Some(&file),
                            issue.line,
                            Some(name),
                        ));
                    }
                }
                TargetError::Io { path, message } => lines.push(github_actions_annotation(
                    AnnotationLevel::Error,
                    message,
                    Some(&annotation_path(path, root)),
                    None,
                    Some(name),
                )),
                TargetError::SelfCheck { path, reasons } => {
                    let file = annotation_path(path, root);
                    for reason in reasons {
                        lines.push(github_actions_annotation(
                            AnnotationLevel::Error,
                            &format!("self-check failed: {}", reason),
                            Some(&file),
                            None,
                            Some(name),
                        ));
                    }
                }
            }
        }
    }
    for warning in &result.warnings {
        lines.push(github_actions_annotation(
            AnnotationLevel::Warning,
            &warning.message,
            Some(&annotation_path(&warning.file, root)),
            Some(warning.line),
            None,
        ));
    }
    lines
}
