//! `tunn8n status` and `tunn8n debug`

use std::path::Path;

use anyhow::{Context, Result};
use tunn8n::application::{DiagnosticsOptions, ProjectLayout, Profile};
use tunn8n::config::Config;
use tunn8n::presentation::factory;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::diagnostics::render_report;

pub fn cmd_status(ui: &UiContext, config: &Config, project_dir: &Path) -> Result<()> {
    run(ui, config, project_dir, Profile::Status)
}

pub fn cmd_debug(ui: &UiContext, config: &Config, project_dir: &Path) -> Result<()> {
    run(ui, config, project_dir, Profile::Debug)
}

fn run(ui: &UiContext, config: &Config, project_dir: &Path, profile: Profile) -> Result<()> {
    let (icon, title, failure) = match profile {
        Profile::Status => (Icon::Status, "Checking service status...", "Error checking status"),
        Profile::Debug => (Icon::Debug, "Running debug utilities...", "Error running debug"),
    };
    let mut header = CommandHeader::new(icon, title);
    header.add("Project", project_dir.display().to_string());
    print!("{}", header.render(ui.color, ui.unicode));

    let layout = ProjectLayout::from_config(project_dir, config);
    let options = DiagnosticsOptions::from_config(profile, layout, config);
    let report = factory::create_diagnostics_use_case(config)
        .execute(&options)
        .context(failure)?;

    print!("{}", render_report(&report, ui.color, ui.unicode));
    Ok(())
}
