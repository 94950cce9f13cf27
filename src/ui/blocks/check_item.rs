use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Unchanged,
    Warning,
    Error,
}

/// One line per file or target, with indented details underneath
#[derive(Debug, Clone)]
pub struct CheckItem {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub details: Vec<String>,
}

impl CheckItem {
    pub fn new(name: impl Into<String>, status: CheckStatus, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status,
            message: message.into(),
            details: Vec::new(),
        }
    }

    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }

    /// Details are always shown for errors and warnings, otherwise only when verbose
    pub fn render(&self, verbose: bool, supports_color: bool, supports_unicode: bool) -> String {
        let icon = match self.status {
            CheckStatus::Pass => Icon::Success,
            CheckStatus::Unchanged => Icon::Unchanged,
            CheckStatus::Warning => Icon::Warning,
            CheckStatus::Error => Icon::Error,
        }
        .colored(supports_color, supports_unicode);

        let mut out = String::new();
        if self.message.is_empty() {
            out.push_str(&format!("  {} {}\n", icon, self.name));
        } else {
            out.push_str(&format!(
                "  {} {} {}\n",
                icon,
                self.name,
                ColoredText::dim(self.message.as_str()).render(supports_color)
            ));
        }

        let show_details = verbose || matches!(self.status, CheckStatus::Warning | CheckStatus::Error);
        if show_details {
            for detail in &self.details {
                out.push_str(&format!(
                    "    {} {}\n",
                    Icon::Arrow.colored(supports_color, supports_unicode),
                    detail
                ));
            }
        }

        out
    }
}
