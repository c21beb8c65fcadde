use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use tunn8n::config::{ColorMode, Config};
use tunn8n::presentation::ColorWhen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(cli_color: Option<ColorWhen>, config: &Config) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(cli_color, config, caps)
    }

    pub(crate) fn from_caps(
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            color,
            unicode: caps.supports_unicode,
        }
    }
}
