//! `tunn8n init` - create `.env` from `.env.example` when missing

use std::path::Path;

use anyhow::{Context, Result};
use tunn8n::application::{init_env, InitOutcome, ProjectLayout};
use tunn8n::config::Config;
use tunn8n::domain::value_objects::Level;

use crate::ui::context::UiContext;
use crate::ui::events::ConsoleEventSink;
use crate::ui::output::say;

pub fn cmd_init(ui: &UiContext, config: &Config, project_dir: &Path) -> Result<()> {
    let layout = ProjectLayout::from_config(project_dir, config);
    let sink = ConsoleEventSink::new(ui);
    let outcome = init_env(&layout, &sink).context("Error initializing .env")?;

    if outcome == InitOutcome::Created {
        say(ui, Level::Warning, "Please edit .env file with your configuration:");
        for key in &config.env.required {
            say(ui, Level::Dim, &format!("  - {}", key));
        }
        say(ui, Level::Dim, "  - N8N_PROTOCOL (http or https)");
        say(ui, Level::Dim, "  - Other environment variables as needed");
    }
    Ok(())
}
