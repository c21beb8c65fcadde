//! `tunn8n --help`, no arguments, or anything unrecognized

use crate::ui::context::UiContext;
use crate::ui::views::help::render_help;

pub fn cmd_help(ui: &UiContext) {
    print!("{}", render_help(ui.color, ui.unicode));
}
