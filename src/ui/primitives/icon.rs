use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Info,
    Arrow,
    Create,
    Start,
    Stop,
    Status,
    Debug,
    Update,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Info) => theme::icons::INFO,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Create) => theme::icons::CREATE,
            (true, Icon::Start) => theme::icons::START,
            (true, Icon::Stop) => theme::icons::STOP,
            (true, Icon::Status) => theme::icons::STATUS,
            (true, Icon::Debug) => theme::icons::DEBUG,
            (true, Icon::Update) => theme::icons::UPDATE,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Info) => theme::icons_ascii::INFO,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Create) => theme::icons_ascii::CREATE,
            (false, Icon::Start) => theme::icons_ascii::START,
            (false, Icon::Stop) => theme::icons_ascii::STOP,
            (false, Icon::Status) => theme::icons_ascii::STATUS,
            (false, Icon::Debug) => theme::icons_ascii::DEBUG,
            (false, Icon::Update) => theme::icons_ascii::UPDATE,
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
            Icon::Arrow => theme::colors::DIM,
            Icon::Info
            | Icon::Create
            | Icon::Start
            | Icon::Stop
            | Icon::Status
            | Icon::Debug
            | Icon::Update => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
