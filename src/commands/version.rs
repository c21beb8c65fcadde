//! `tunn8n --version`

use crate::ui::context::UiContext;
use crate::ui::views::version::render_version;

pub fn cmd_version(ui: &UiContext) {
    print!("{}", render_version(env!("CARGO_PKG_VERSION"), ui.color, ui.unicode));
}
