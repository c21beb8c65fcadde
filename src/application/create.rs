//! Create Use Case
//!
//! Scaffolds a new project directory:
//! 1. Refuse an existing destination or an unusable template
//! 2. Create the directory and copy every template entry
//! 3. Write a default `.gitignore` if the template has none
//! 4. Create `.env` from `.env.example`
//!
//! Nothing is written until both checks in step 1 pass. A failure after that
//! leaves the partial copy in place.

use crate::domain::ports::{LifecycleEvent, LifecycleEventSink, TemplateSource};
use crate::error::{Tunn8nError, Tunn8nResult};

use super::init::{init_env, InitOutcome};
use super::layout::ProjectLayout;

/// Written when the template does not ship its own `.gitignore`
pub const DEFAULT_GITIGNORE: &str = "# Dependencies
node_modules/
npm-debug.log*
yarn-debug.log*
yarn-error.log*

# Environment variables
.env
.env.local
.env.production

# Logs
logs
*.log

# Runtime data
pids
*.pid
*.seed
*.pid.lock

# Coverage directory
coverage/

# Docker volumes and data
data/
docker-data/
volumes/

# IDE
.vscode/
.idea/
*.swp
*.swo

# OS
.DS_Store
Thumbs.db

# Temporary folders
tmp/
temp/

# n8n specific
n8n/
n8n_public/

# Ngrok
ngrok.yml

# Docker compose override
docker-compose.override.yml
";

/// What `create` produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateResult {
    /// Top-level entries copied from the template, in copy order
    pub entries: Vec<String>,
    pub ignore_file_written: bool,
    pub env: InitOutcome,
}

pub struct CreateProjectUseCase<T: TemplateSource> {
    template: T,
}

impl<T: TemplateSource> CreateProjectUseCase<T> {
    pub fn new(template: T) -> Self {
        Self { template }
    }

    pub fn execute(
        &self,
        layout: &ProjectLayout,
        sink: &dyn LifecycleEventSink,
    ) -> Tunn8nResult<CreateResult> {
        if layout.dir.exists() {
            return Err(Tunn8nError::DirectoryExists {
                path: layout.dir.clone(),
            });
        }
        self.template.check()?;

        std::fs::create_dir_all(&layout.dir)?;
        sink.on_event(LifecycleEvent::DirectoryCreated {
            path: layout.dir.clone(),
        });

        tracing::debug!(template = %self.template.describe(), "copying template");
        let entries = self.template.materialize(&layout.dir)?;
        for name in &entries {
            sink.on_event(LifecycleEvent::EntryCopied { name: name.clone() });
        }

        let ignore_path = layout.dir.join(".gitignore");
        let ignore_file_written = if ignore_path.exists() {
            sink.on_event(LifecycleEvent::IgnoreFileExists);
            false
        } else {
            std::fs::write(&ignore_path, DEFAULT_GITIGNORE)?;
            sink.on_event(LifecycleEvent::IgnoreFileWritten);
            true
        };

        let env = init_env(layout, sink)?;

        Ok(CreateResult {
            entries,
            ignore_file_written,
            env,
        })
    }
}
