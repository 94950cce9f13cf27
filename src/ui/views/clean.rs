//! Clean command UI views

use std::path::Path;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::display_path;
use lambda_bundler::application::{CleanResult, SkipReason};

pub fn render_clean_header(
    deployment_dir: &Path,
    workspace: &Path,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let action = if dry_run { "Clean (Dry Run)" } else { "Clean" };
    let mut header = CommandHeader::new(Icon::Clean, format!("Lambda Bundler {}", action));
    header.add("Deployment", display_path(deployment_dir, workspace));
    header.render(supports_color, supports_unicode)
}

pub fn render_clean_result(
    result: &CleanResult,
    workspace: &Path,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::from("\n");

    if !result.removed.is_empty() {
        let title = if dry_run { "Would remove:" } else { "Removed:" };
        out.push_str(&ColoredText::info(title).bold().render(supports_color));
        out.push('\n');
        for path in result.removed.iter().chain(&result.removed_dirs) {
            out.push_str(&format!("  - {}\n", display_path(path, workspace)));
        }
    }

    if !result.skipped.is_empty() {
        out.push_str(&ColoredText::dim("Skipped:").render(supports_color));
        out.push('\n');
        for skipped in &result.skipped {
            let icon = match skipped.reason {
                SkipReason::Missing => Icon::Unchanged,
                SkipReason::Failed(_) => Icon::Error,
            };
            out.push_str(&format!(
                "  {} {} ({})\n",
                icon.colored(supports_color, supports_unicode),
                display_path(&skipped.path, workspace),
                skipped.reason
            ));
        }
    }

    let mut summary = match (result.is_success(), dry_run) {
        (true, true) => ResultSummary::success("Dry Run Complete"),
        (true, false) => ResultSummary::success("Clean Complete"),
        (false, _) => ResultSummary::failure("Clean Incomplete"),
    };
    let label = if dry_run { "to remove" } else { "removed" };
    summary.add_stat(label, result.removed.len());
    summary.add_stat("missing", result.missing().count());
    let failed = result.errors().len();
    if failed > 0 {
        summary.add_stat("failed", failed);
    }
    if dry_run && !result.removed.is_empty() {
        summary.with_next_step("lambda-bundler clean");
    }
    out.push_str(&summary.render(supports_color, supports_unicode));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn dry_run_lists_would_remove() {
        let mut result = CleanResult::new();
        result.add_removed(PathBuf::from("/ws/deployment/a/lambda_function.py"));
        result.add_skipped(PathBuf::from("/ws/deployment/b/lambda_function.py"), SkipReason::Missing);

        let rendered = render_clean_result(&result, Path::new("/ws"), true, false, false);
        assert!(rendered.contains("Would remove:\n  - deployment/a/lambda_function.py\n"));
        assert!(rendered.contains("  [ ] deployment/b/lambda_function.py (missing)\n"));
        assert!(rendered.contains("1 to remove, 1 missing"));
        assert!(rendered.contains("lambda-bundler clean"));
    }
}
