pub mod build;
pub mod clean;
pub mod validate;

use std::path::{Path, PathBuf};

use crate::ui::blocks::check_item::{CheckItem, CheckStatus};
use lambda_bundler::application::FileWarning;

/// Show `path` relative to the workspace when it lies inside it
pub fn display_path(path: &Path, workspace: &Path) -> String {
    path.strip_prefix(workspace)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// One warning item per file, in first-seen order, with `line N: message` details
pub fn render_warnings(
    warnings: &[FileWarning],
    workspace: &Path,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut by_file: Vec<(&PathBuf, Vec<String>)> = Vec::new();
    for warning in warnings {
        let detail = format!("line {}: {}", warning.line, warning.message);
        match by_file.iter_mut().find(|(file, _)| *file == &warning.file) {
            Some((_, details)) => details.push(detail),
            None => by_file.push((&warning.file, vec![detail])),
        }
    }

    by_file
        .into_iter()
        .map(|(file, details)| {
            CheckItem::new(display_path(file, workspace), CheckStatus::Warning, "")
                .with_details(details)
                .render(false, supports_color, supports_unicode)
        })
        .collect()
}
