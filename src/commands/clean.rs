//! Clean command handler
//!
//! Removes the artifacts of every resolved target. Never validates sources.

use std::time::Instant;

use anyhow::Result;

use lambda_bundler::application::{CleanOptions, CleanResult, SkipReason};
use lambda_bundler::presentation::{create_clean_use_case, ColorWhen, WorkspaceArgs};
use lambda_bundler::LocalFs;

use crate::commands::{fail, open_or_fail, report_config_warnings};
use crate::ui::json::emit_event;
use crate::ui::json::events::{CleanFileEvent, CompleteEvent, StartEvent};
use crate::ui::views::clean::{render_clean_header, render_clean_result};
use crate::ui::views::display_path;

const COMMAND: &str = "clean";

pub fn cmd_clean(
    args: &WorkspaceArgs,
    dry_run: bool,
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

    let targets = match workspace.layout.resolve_targets(&LocalFs::new()) {
        Ok(targets) => targets,
        Err(err) => fail(&ui, COMMAND, &err),
    };

    if !ui.json {
        print!(
            "{}",
            render_clean_header(
                &workspace.layout.deployment_dir,
                &workspace.root,
                dry_run,
                ui.color,
                ui.unicode
            )
        );
    }

    let options = CleanOptions::new().with_dry_run(dry_run);
    let result = create_clean_use_case().execute(&workspace.layout, &targets, &options);

    if ui.json {
        emit_json(&result, &workspace.root, dry_run)?;
        let complete = if result.is_success() {
            CompleteEvent::success(COMMAND)
        } else {
            CompleteEvent::failure(COMMAND)
        };
        emit_event(&complete.with_duration(started.elapsed().as_millis() as u64))?;
    } else {
        print!(
            "{}",
            render_clean_result(&result, &workspace.root, dry_run, ui.color, ui.unicode)
        );
    }

    if !result.is_success() {
        std::process::exit(1);
    }
    Ok(())
}

fn emit_json(result: &CleanResult, root: &std::path::Path, dry_run: bool) -> Result<()> {
    let removed = if dry_run { "would_remove" } else { "removed" };
    for path in &result.removed {
        emit_event(&CleanFileEvent::new(COMMAND, display_path(path, root), removed))?;
    }
    for path in &result.removed_dirs {
        emit_event(&CleanFileEvent::new(COMMAND, display_path(path, root), "removed_dir"))?;
    }
    for skipped in &result.skipped {
        let event = match &skipped.reason {
            SkipReason::Missing => CleanFileEvent::new(COMMAND, display_path(&skipped.path, root), "missing"),
            SkipReason::Failed(reason) => {
                CleanFileEvent::new(COMMAND, display_path(&skipped.path, root), "failed")
                    .with_reason(reason.as_str())
            }
        };
        emit_event(&event)?;
    }
    Ok(())
}
