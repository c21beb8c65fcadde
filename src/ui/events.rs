//! Console rendering of lifecycle events

use tunn8n::domain::ports::{LifecycleEvent, LifecycleEventSink};
use tunn8n::domain::value_objects::Level;

use crate::ui::context::UiContext;
use crate::ui::style::style;

/// Writes each lifecycle event as one or more styled lines on stdout
pub struct ConsoleEventSink {
    color: bool,
    unicode: bool,
}

impl ConsoleEventSink {
    pub fn new(ui: &UiContext) -> Self {
        Self {
            color: ui.color,
            unicode: ui.unicode,
        }
    }
}

impl LifecycleEventSink for ConsoleEventSink {
    fn on_event(&self, event: LifecycleEvent) {
        for (level, message) in describe(&event) {
            println!("{}", style(level, &message, self.color, self.unicode));
        }
    }
}

/// Lines for one event, without styling
pub fn describe(event: &LifecycleEvent) -> Vec<(Level, String)> {
    use LifecycleEvent as E;

    let one = |level: Level, message: String| vec![(level, message)];
    match event {
        E::EngineReady => one(Level::Success, "Docker is running".to_string()),

        E::ValidatingEnv { path } => one(
            Level::Info,
            format!("Validating environment variables in {}", file_name(path)),
        ),
        E::EnvFileMissing { path } => vec![
            (Level::Warning, format!("{} file not found!", file_name(path))),
            (Level::Dim, "Run 'tunn8n init' to create it from .env.example".to_string()),
        ],
        E::EnvEmptyValue { key, line } => one(
            Level::Warning,
            format!("Empty value for {} on line {}", key, line),
        ),
        E::EnvDuplicateKey { key } => one(
            Level::Info,
            format!("{} is defined more than once; the last definition wins", key),
        ),
        E::EnvRequiredMissing { key } => one(
            Level::Warning,
            format!("Required variable {} is missing or empty", key),
        ),
        E::Aborted => one(Level::Warning, "Aborting start process.".to_string()),

        E::CleanupStarted => one(Level::Info, "Cleaning up existing containers...".to_string()),
        E::ContainersFound { names } => one(
            Level::Dim,
            format!("Found {} container(s): {}", names.len(), names.join(", ")),
        ),
        E::ContainerRemoved { name } => one(Level::Success, format!("Removed {}", name)),
        E::ContainerRemovalFailed { name, error } => one(
            Level::Warning,
            format!("Could not remove {}: {}", name, error),
        ),
        E::CleanupFailed { error } => one(
            Level::Warning,
            format!("Could not list existing containers: {}", error),
        ),

        E::DescriptorRepaired { path } => one(
            Level::Success,
            format!("Removed obsolete 'version' from {}", file_name(path)),
        ),
        E::DescriptorRepairFailed { path, error } => one(
            Level::Warning,
            format!("Could not update {}: {}", file_name(path), error),
        ),

        E::Launching { compose } => vec![
            (Level::Info, "Starting n8n, PostgreSQL, and Ngrok services...".to_string()),
            (Level::Dim, format!("{} up -d", compose)),
        ],
        E::Launched { url } => vec![
            (Level::Success, "Services started successfully!".to_string()),
            (Level::Info, format!("n8n will be available at: {}", url)),
            (Level::Info, "Ngrok tunnel will be created automatically".to_string()),
        ],
        E::PostCheckSection { title } => one(Level::Heading, format!("\n=== {} ===", title)),

        E::Stopping { compose } => one(Level::Dim, format!("{} down", compose)),
        E::StopFallback { error } => vec![
            (Level::Error, format!("Error stopping tunn8n: {}", error)),
            (Level::Warning, "Trying fallback method...".to_string()),
        ],
        E::Stopped { via_fallback: false } => {
            one(Level::Success, "Services stopped successfully!".to_string())
        }
        E::Stopped { via_fallback: true } => one(
            Level::Success,
            "Services stopped using fallback method!".to_string(),
        ),

        E::DirectoryCreated { path } => one(Level::Success, format!("Created {}", path.display())),
        E::EntryCopied { name } => one(Level::Dim, format!("  {}", name)),
        E::IgnoreFileWritten => one(Level::Dim, "  .gitignore".to_string()),
        E::IgnoreFileExists => Vec::new(),
        E::EnvFileCreated { path } => one(
            Level::Success,
            format!("{} file created from template", file_name(path)),
        ),
        E::EnvFileExists { path } => vec![
            (Level::Warning, format!("{} file already exists", file_name(path))),
            (Level::Dim, "Skipping initialization...".to_string()),
        ],
        E::EnvExampleMissing { path } => one(
            Level::Error,
            format!("{} template not found!", file_name(path)),
        ),

        E::Updating { command } => vec![
            (Level::Info, "Updating tunn8n to latest version...".to_string()),
            (Level::Dim, command.clone()),
        ],
        E::Updated => one(Level::Success, "tunn8n updated successfully!".to_string()),
    }
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
