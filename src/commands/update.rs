//! `tunn8n update`

use anyhow::{Context, Result};
use tunn8n::presentation::factory;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::context::UiContext;
use crate::ui::events::ConsoleEventSink;
use crate::ui::primitives::icon::Icon;

pub fn cmd_update(ui: &UiContext) -> Result<()> {
    let header = CommandHeader::new(Icon::Update, "tunn8n update");
    print!("{}", header.render(ui.color, ui.unicode));

    let sink = ConsoleEventSink::new(ui);
    factory::create_update_use_case()
        .execute(&sink)
        .context("Error updating tunn8n")
}
