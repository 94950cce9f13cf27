//! Build command UI views

use std::path::Path;

use crate::ui::blocks::check_item::{CheckItem, CheckStatus};
use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::{display_path, render_warnings};
use lambda_bundler::application::{BuildResult, BundleLayout, TargetStatus};

pub fn render_build_header(
    layout: &BundleLayout,
    workspace: &Path,
    target_count: usize,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Build, "Lambda Bundler Build");
    header.add("Source", display_path(&layout.source_dir, workspace));
    header.add("Deployment", display_path(&layout.deployment_dir, workspace));
    header.add("Shared", display_path(&layout.shared_path(), workspace));
    header.add("Targets", target_count.to_string());
    header.render(supports_color, supports_unicode)
}

/// One check item per target, then warnings, then the summary
pub fn render_build_result(
    result: &BuildResult,
    workspace: &Path,
    verbose: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::from("\n");

    for report in &result.targets {
        let output = display_path(&report.output_path, workspace);
        let item = match &report.status {
            TargetStatus::Built => {
                CheckItem::new(&report.name, CheckStatus::Pass, "(written)").with_details(vec![output])
            }
            TargetStatus::Unchanged => CheckItem::new(&report.name, CheckStatus::Unchanged, "(unchanged)")
                .with_details(vec![output]),
            TargetStatus::Failed(errors) => CheckItem::new(&report.name, CheckStatus::Error, "")
                .with_details(
                    errors
                        .iter()
                        .flat_map(|e| e.messages())
                        .map(|m| relative_message(&m, workspace))
                        .collect(),
                ),
        };
        out.push_str(&item.render(verbose, supports_color, supports_unicode));
    }

    if !result.warnings.is_empty() {
        out.push('\n');
        out.push_str(&ColoredText::warning("Warnings:").bold().render(supports_color));
        out.push('\n');
        out.push_str(&render_warnings(
            &result.warnings,
            workspace,
            supports_color,
            supports_unicode,
        ));
    }

    let failed = result.failures().count();
    let mut summary = if result.is_success() {
        ResultSummary::success("Build Complete")
    } else {
        ResultSummary::failure("Build Failed")
    };
    summary.add_stat("written", result.written().len());
    summary.add_stat("unchanged", result.unchanged().len());
    if failed > 0 {
        summary.add_stat("failed", failed);
        summary.with_next_step("lambda-bundler validate --complete");
    }
    out.push_str(&summary.render(supports_color, supports_unicode));
    out
}

/// Error messages carry absolute paths; shorten the workspace prefix
fn relative_message(message: &str, workspace: &Path) -> String {
    let prefix = format!("{}/", workspace.display());
    message.replace(&prefix, "")
}
