//! `tunn8n start`

use std::path::Path;

use anyhow::{Context, Result};
use tunn8n::application::{ProjectLayout, StartOptions, StartOutcome};
use tunn8n::config::Config;
use tunn8n::infrastructure::InteractiveConfirmer;
use tunn8n::presentation::factory;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::context::UiContext;
use crate::ui::events::ConsoleEventSink;
use crate::ui::primitives::icon::Icon;

pub fn cmd_start(ui: &UiContext, config: &Config, project_dir: &Path) -> Result<()> {
    let header = CommandHeader::new(Icon::Start, "Starting tunn8n services...");
    print!("{}", header.render(ui.color, ui.unicode));

    let options = StartOptions::from_config(ProjectLayout::from_config(project_dir, config), config);
    let sink = ConsoleEventSink::new(ui);
    let confirmer = InteractiveConfirmer::new();

    let outcome = factory::create_start_use_case(config)
        .execute(&options, &confirmer, &sink)
        .context("Error starting tunn8n")?;

    if let StartOutcome::Started { compose, url } = outcome {
        tracing::info!(%compose, %url, "stack started");
    }
    Ok(())
}
