//! Framed block of lines; borders take the color of the block's outcome

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use crate::ui::primitives::border::Borders;
use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxStyle {
    #[default]
    Info,
    Success,
    Warning,
}

impl BoxStyle {
    fn color(self) -> crossterm::style::Color {
        match self {
            BoxStyle::Info => theme::colors::INFO,
            BoxStyle::Success => theme::colors::SUCCESS,
            BoxStyle::Warning => theme::colors::WARNING,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct Box {
    title: Option<String>,
    content: Vec<String>,
    style: BoxStyle,
}

impl Box {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn style(mut self, style: BoxStyle) -> Self {
        self.style = style;
        self
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        for part in line.lines() {
            self.content.push(part.to_string());
        }
    }

    pub fn add_empty(&mut self) {
        self.content.push(String::new());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let rows: Vec<&str> = self
            .title
            .iter()
            .chain(self.content.iter())
            .map(String::as_str)
            .collect();
        let inner_width = rows.iter().map(|r| visible_width(r)).max().unwrap_or(0) + 2;

        let borders = Borders::for_terminal(supports_unicode);
        let paint = |s: &str| -> String {
            if supports_color {
                s.with(self.style.color()).to_string()
            } else {
                s.to_string()
            }
        };
        let side = paint(borders.vertical);

        let mut out = paint(&borders.top(inner_width));
        out.push('\n');
        for row in rows {
            let pad = inner_width - 1 - visible_width(row);
            out.push_str(&format!("{} {}{}{}\n", side, row, " ".repeat(pad), side));
        }
        out.push_str(&paint(&borders.bottom(inner_width)));
        out.push('\n');
        out
    }
}

pub(crate) fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

fn strip_ansi(s: &str) -> std::borrow::Cow<'_, str> {
    if !s.contains('\u{1b}') {
        return std::borrow::Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // Skip ANSI escape sequence: ESC [ ... <final>
            if matches!(chars.peek(), Some('[') | Some(']')) {
                let _ = chars.next();
            }
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }

    std::borrow::Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_splits_multiline_content_into_rows() {
        let mut b = Box::with_title("TITLE");
        b.add_line("Line1\nLine2");
        let rendered = b.render(false, true);

        let line2 = rendered
            .lines()
            .find(|l| l.contains("Line2"))
            .expect("expected Line2 to appear in output");
        assert!(line2.starts_with(Borders::for_terminal(true).vertical));
    }

    #[test]
    fn rows_align_with_wide_and_colored_content() {
        let mut b = Box::with_title("tunn8n").style(BoxStyle::Success);
        b.add_line("\u{1b}[32mok\u{1b}[39m");
        b.add_line("📦 n8n");
        let rendered = b.render(false, true);

        let widths: Vec<usize> = rendered.lines().map(visible_width).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{}", rendered);
    }

    #[test]
    fn strip_ansi_leaves_plain_text() {
        assert_eq!(strip_ansi("\u{1b}[1;36mhi\u{1b}[0m"), "hi");
        assert_eq!(strip_ansi("plain"), "plain");
    }
}
