use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Unchanged,
    Arrow,
    Build,
    Validate,
    Preview,
    Clean,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Unchanged) => theme::icons::UNCHANGED,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Build) => theme::icons::BUILD,
            (true, Icon::Validate) => theme::icons::VALIDATE,
            (true, Icon::Preview) => theme::icons::PREVIEW,
            (true, Icon::Clean) => theme::icons::CLEAN,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Unchanged) => theme::icons_ascii::UNCHANGED,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Build) => theme::icons_ascii::BUILD,
            (false, Icon::Validate) => theme::icons_ascii::VALIDATE,
            (false, Icon::Preview) => theme::icons_ascii::PREVIEW,
            (false, Icon::Clean) => theme::icons_ascii::CLEAN,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Unchanged | Icon::Arrow => theme::colors::DIM,
            Icon::Build | Icon::Validate | Icon::Preview | Icon::Clean => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
