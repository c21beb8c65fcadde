//! `tunn8n create <name>` - scaffold a new project directory

use std::path::PathBuf;

use anyhow::{Context, Result};
use tunn8n::application::{probe_engine, InitOutcome, ProjectLayout};
use tunn8n::config::Config;
use tunn8n::domain::value_objects::Level;
use tunn8n::presentation::factory;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::context::UiContext;
use crate::ui::events::ConsoleEventSink;
use crate::ui::primitives::icon::Icon;

/// `create` was run without a project name
#[derive(Debug, thiserror::Error)]
#[error("Project name required!")]
pub struct MissingProjectName;

pub fn cmd_create(ui: &UiContext, config: &Config, name: Option<&str>) -> Result<()> {
    let name = name.filter(|n| !n.trim().is_empty()).ok_or(MissingProjectName)?;

    let header = CommandHeader::new(Icon::Create, format!("Creating new tunn8n project: {}", name));
    print!("{}", header.render(ui.color, ui.unicode));

    let layout = ProjectLayout::from_config(PathBuf::from(name), config);
    let sink = ConsoleEventSink::new(ui);
    let result = factory::create_create_use_case(config)
        .execute(&layout, &sink)
        .context("Error creating project")?;

    let mut summary = ResultSummary::success("Project created successfully!");
    summary.add_info(format!("{} entries copied", result.entries.len()));
    match result.env {
        InitOutcome::Created => summary.add_info(".env created from .env.example"),
        InitOutcome::AlreadyExists => {}
        InitOutcome::ExampleMissing => summary.add_warning("No .env.example to create .env from"),
    }

    let probe = probe_engine(&factory::engine(config));
    if !probe.engine_available {
        summary.add_warning("Docker is not installed or not running");
        summary.add_warning("Install it first: https://docs.docker.com/get-docker/");
    } else if probe.compose.is_none() {
        summary.add_warning("Docker Compose is not installed");
        summary.add_warning("Install it: https://docs.docker.com/compose/install/");
    }

    summary.add_next_step(format!("cd {}", name));
    summary.add_next_step("Edit .env with your configuration");
    summary.add_next_step("tunn8n start   # Start services");
    summary.add_next_step("tunn8n status  # Check service status");

    println!();
    print!("{}", summary.render(ui.color, ui.unicode));
    Ok(())
}

/// Extra guidance printed under a `create` failure
pub fn hint_for(err: &anyhow::Error) -> Option<(Level, &'static str)> {
    if err.downcast_ref::<MissingProjectName>().is_some() {
        return Some((Level::Info, "Usage: tunn8n create <project-name>"));
    }
    match err.downcast_ref::<tunn8n::Tunn8nError>() {
        Some(tunn8n::Tunn8nError::DirectoryExists { .. }) => Some((
            Level::Warning,
            "Please choose a different project name or remove the existing directory.",
        )),
        _ => None,
    }
}

/// Failures that make `create` exit non-zero: no name, or the target exists
pub fn is_fatal(err: &anyhow::Error) -> bool {
    err.downcast_ref::<MissingProjectName>().is_some()
        || matches!(
            err.downcast_ref::<tunn8n::Tunn8nError>(),
            Some(tunn8n::Tunn8nError::DirectoryExists { .. })
        )
}
