//! Validate command UI views

use std::path::Path;

use crate::ui::blocks::check_item::{CheckItem, CheckStatus};
use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::{display_path, render_warnings};
use lambda_bundler::application::{PreviewResult, ValidateResult};

pub fn render_validate_header(
    scope: &str,
    workspace: &Path,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Validate, "Lambda Bundler Validate");
    header.add("Workspace", workspace.display().to_string());
    header.add("Scope", scope);
    header.render(supports_color, supports_unicode)
}

pub fn render_validate_result(
    result: &ValidateResult,
    workspace: &Path,
    verbose: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::from("\n");
    out.push_str(&render_files(result, workspace, verbose, supports_color, supports_unicode));

    let mut summary = if result.is_valid() {
        ResultSummary::success("All Files Valid")
    } else {
        ResultSummary::failure("Validation Failed")
    };
    summary.add_stat("checked", result.files.len());
    if !result.is_valid() {
        summary.add_stat("invalid", result.invalid_count());
    }
    out.push_str(&summary.render(supports_color, supports_unicode));
    out
}

fn render_files(
    result: &ValidateResult,
    workspace: &Path,
    verbose: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();
    for file in &result.files {
        let name = display_path(&file.path, workspace);
        let label = format!("({})", file.kind);
        let item = if file.is_valid() {
            CheckItem::new(name, CheckStatus::Pass, label)
        } else {
            let details = file
                .read_error
                .iter()
                .cloned()
                .chain(file.issues.iter().map(|issue| match issue.line {
                    Some(line) => format!("line {}: {}", line, issue.message),
                    None => issue.message.clone(),
                }))
                .collect();
            CheckItem::new(name, CheckStatus::Error, label).with_details(details)
        };
        out.push_str(&item.render(verbose, supports_color, supports_unicode));
    }
    out
}

/// Validation lines, then the assembled artifact between rules, then section sizes
pub fn render_preview(
    preview: &PreviewResult,
    target: &str,
    workspace: &Path,
    width: u16,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Preview, "Lambda Bundler Preview");
    header.add("Target", target);
    let mut out = header.render(supports_color, supports_unicode);
    out.push('\n');
    out.push_str(&render_files(&preview.validation, workspace, false, supports_color, supports_unicode));

    out.push_str(&render_warnings(
        &preview.warnings,
        workspace,
        supports_color,
        supports_unicode,
    ));

    let Some(artifact) = &preview.artifact else {
        out.push_str(&ResultSummary::failure("Preview Unavailable").render(supports_color, supports_unicode));
        return out;
    };

    let rule_char = if supports_unicode { "─" } else { "-" };
    let rule = ColoredText::dim(rule_char.repeat(usize::from(width.clamp(20, 100))))
        .render(supports_color);
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    out.push_str(artifact.text());
    if !artifact.text().ends_with('\n') {
        out.push('\n');
    }
    out.push_str(&rule);
    out.push('\n');

    let mut summary = ResultSummary::success("Preview Assembled");
    if let Some(sizes) = &preview.summary {
        summary.add_stat("header lines", sizes.header_lines);
        summary.add_stat("import statements", sizes.import_statements);
        summary.add_stat("shared import lines stripped", sizes.shared_import_lines);
        summary.add_stat("function lines", sizes.function_lines);
    }
    out.push_str(&summary.render(supports_color, supports_unicode));
    out
}
