//! Box-drawing glyphs, picked once per render

use crate::ui::theme;

/// The six glyphs a framed block needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Borders {
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_left: &'static str,
    pub bottom_right: &'static str,
    pub horizontal: &'static str,
    pub vertical: &'static str,
}

impl Borders {
    /// Rounded unicode corners, or `+-|` for terminals without unicode
    pub fn for_terminal(supports_unicode: bool) -> Self {
        if supports_unicode {
            Self {
                top_left: theme::borders::TOP_LEFT,
                top_right: theme::borders::TOP_RIGHT,
                bottom_left: theme::borders::BOTTOM_LEFT,
                bottom_right: theme::borders::BOTTOM_RIGHT,
                horizontal: theme::borders::HORIZONTAL,
                vertical: theme::borders::VERTICAL,
            }
        } else {
            Self {
                top_left: theme::borders_ascii::TOP_LEFT,
                top_right: theme::borders_ascii::TOP_RIGHT,
                bottom_left: theme::borders_ascii::BOTTOM_LEFT,
                bottom_right: theme::borders_ascii::BOTTOM_RIGHT,
                horizontal: theme::borders_ascii::HORIZONTAL,
                vertical: theme::borders_ascii::VERTICAL,
            }
        }
    }

    pub fn top(&self, inner_width: usize) -> String {
        format!("{}{}{}", self.top_left, self.horizontal.repeat(inner_width), self.top_right)
    }

    pub fn bottom(&self, inner_width: usize) -> String {
        format!(
            "{}{}{}",
            self.bottom_left,
            self.horizontal.repeat(inner_width),
            self.bottom_right
        )
    }
}
