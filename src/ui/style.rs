//! Single formatting entry point for human output lines

use tunn8n::domain::value_objects::Level;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{ColoredText, SemanticColor};

/// Format `message` for `level`.
///
/// Pure: the caller decides whether color and Unicode are available.
pub fn style(level: Level, message: &str, color: bool, unicode: bool) -> String {
    match level {
        Level::Success => prefixed(Icon::Success, SemanticColor::Success, message, color, unicode),
        Level::Error => prefixed(Icon::Error, SemanticColor::Error, message, color, unicode),
        Level::Warning => prefixed(Icon::Warning, SemanticColor::Warning, message, color, unicode),
        Level::Info => prefixed(Icon::Info, SemanticColor::Info, message, color, unicode),
        Level::Dim => ColoredText::dim(message).render(color),
        Level::Heading => ColoredText::info(message).bold().render(color),
    }
}

fn prefixed(icon: Icon, tone: SemanticColor, message: &str, color: bool, unicode: bool) -> String {
    format!(
        "{} {}",
        icon.colored(color, unicode),
        ColoredText::new(message, Some(tone)).render(color)
    )
}
