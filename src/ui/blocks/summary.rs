use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

#[derive(Debug, Clone)]
pub struct ResultSummary {
    title: String,
    success: bool,
    stats: Vec<(String, usize)>,
    next_step: Option<String>,
}

impl ResultSummary {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            success: true,
            stats: Vec::new(),
            next_step: None,
        }
    }

    pub fn failure(title: impl Into<String>) -> Self {
        Self {
            success: false,
            ..Self::success(title)
        }
    }

    pub fn add_stat(&mut self, label: impl Into<String>, count: usize) {
        self.stats.push((label.into(), count));
    }

    pub fn with_next_step(&mut self, hint: impl Into<String>) {
        self.next_step = Some(hint.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (icon, title) = if self.success {
            (
                Icon::Success,
                ColoredText::success(self.title.as_str()).bold(),
            )
        } else {
            (Icon::Error, ColoredText::error(self.title.as_str()).bold())
        };

        let mut out = format!(
            "\n{} {}\n",
            icon.colored(supports_color, supports_unicode),
            title.render(supports_color)
        );

        let stats: Vec<String> = self
            .stats
            .iter()
            .map(|(label, count)| format!("{} {}", count, label))
            .collect();
        if !stats.is_empty() {
            out.push_str(&format!("  {}\n", stats.join(", ")));
        }

        if let Some(next_step) = &self.next_step {
            out.push_str(&format!(
                "  {} {} {}\n",
                Icon::Arrow.colored(supports_color, supports_unicode),
                ColoredText::dim("Next:").render(supports_color),
                next_step
            ));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_success_icon_and_stats() {
        let mut summary = ResultSummary::success("Build Complete");
        summary.add_stat("written", 2);
        summary.add_stat("unchanged", 1);

        let rendered = summary.render(false, false);
        assert_eq!(rendered, "\n[OK] Build Complete\n  2 written, 1 unchanged\n");
    }

    #[test]
    fn failure_renders_error_icon() {
        let rendered = ResultSummary::failure("Build Failed").render(false, true);
        assert!(rendered.contains("✗ Build Failed"));
    }
}
