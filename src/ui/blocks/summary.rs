use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// Boxed closing verdict of a command
#[derive(Debug, Clone)]
pub struct ResultSummary {
    title: String,
    success: bool,
    infos: Vec<String>,
    warnings: Vec<String>,
    next_steps: Vec<String>,
    footer: Option<String>,
}

impl ResultSummary {
    pub fn success(title: impl Into<String>) -> Self {
        Self::with_outcome(title, true)
    }

    pub fn partial(title: impl Into<String>) -> Self {
        Self::with_outcome(title, false)
    }

    fn with_outcome(title: impl Into<String>, success: bool) -> Self {
        Self {
            title: title.into(),
            success,
            infos: Vec::new(),
            warnings: Vec::new(),
            next_steps: Vec::new(),
            footer: None,
        }
    }

    /// Add an informational message (shown with success icon)
    pub fn add_info(&mut self, message: impl Into<String>) {
        self.infos.push(message.into());
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn add_next_step(&mut self, hint: impl Into<String>) {
        self.next_steps.push(hint.into());
    }

    /// Dim last line, e.g. a timestamp
    pub fn with_footer(&mut self, footer: impl Into<String>) {
        self.footer = Some(footer.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (style, icon) = if self.success {
            (BoxStyle::Success, Icon::Success)
        } else {
            (BoxStyle::Warning, Icon::Warning)
        };

        let title = if self.success {
            ColoredText::success(self.title.as_str())
                .bold()
                .render(supports_color)
        } else {
            ColoredText::warning(self.title.as_str())
                .bold()
                .render(supports_color)
        };

        let header = format!(
            "{} {}",
            icon.colored(supports_color, supports_unicode),
            title
        );

        let mut b = Box::with_title(header).style(style);

        if !self.infos.is_empty() {
            b.add_empty();
            for info in &self.infos {
                b.add_line(format!(
                    "{} {}",
                    Icon::Success.colored(supports_color, supports_unicode),
                    info
                ));
            }
        }

        if !self.warnings.is_empty() {
            b.add_empty();
            for warning in &self.warnings {
                b.add_line(format!(
                    "{} {}",
                    Icon::Warning.colored(supports_color, supports_unicode),
                    warning
                ));
            }
        }

        if !self.next_steps.is_empty() {
            b.add_empty();
            b.add_line(ColoredText::dim("Next:").render(supports_color));
            for step in &self.next_steps {
                b.add_line(format!(
                    "  {} {}",
                    Icon::Arrow.colored(supports_color, supports_unicode),
                    step
                ));
            }
        }

        if let Some(footer) = &self.footer {
            b.add_empty();
            b.add_line(ColoredText::dim(footer.as_str()).render(supports_color));
        }

        b.render(supports_color, supports_unicode)
    }
}
