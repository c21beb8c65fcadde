//! `tunn8n stop`

use std::path::Path;

use anyhow::{Context, Result};
use tunn8n::application::ProjectLayout;
use tunn8n::config::Config;
use tunn8n::presentation::factory;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::context::UiContext;
use crate::ui::events::ConsoleEventSink;
use crate::ui::primitives::icon::Icon;

pub fn cmd_stop(ui: &UiContext, config: &Config, project_dir: &Path) -> Result<()> {
    let header = CommandHeader::new(Icon::Stop, "Stopping tunn8n services...");
    print!("{}", header.render(ui.color, ui.unicode));

    let layout = ProjectLayout::from_config(project_dir, config);
    let sink = ConsoleEventSink::new(ui);
    factory::create_stop_use_case(config)
        .execute(&layout, &sink)
        .context("Fallback method also failed")?;
    Ok(())
}
