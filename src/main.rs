//! tunn8n CLI - n8n with Docker & Ngrok
//!
//! Usage: tunn8n <COMMAND>
//!
//! Commands:
//!   create  Scaffold a new project directory
//!   start   Validate, clean up and launch the stack
//!   stop    Bring the stack down
//!   status  Short diagnostics
//!   debug   Full diagnostics
//!   init    Create .env from .env.example
//!   update  Reinstall the latest release

use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tunn8n::config::Config;
use tunn8n::domain::value_objects::Level;
use tunn8n::presentation::{Action, Cli, Commands};

mod commands;
mod ui;

use ui::context::UiContext;
use ui::output::{print_config_warnings, say};

fn main() -> ExitCode {
    let parsed = Cli::parse_action(std::env::args_os());
    init_tracing(parsed.verbose);

    let project_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let (config, warnings) = Config::load_or_default(Some(project_dir.as_path()));
    let ui = UiContext::new(parsed.color, &config);
    print_config_warnings(&ui, &warnings);

    let command = match parsed.action {
        Action::Help => {
            commands::help::cmd_help(&ui);
            return ExitCode::SUCCESS;
        }
        Action::Version => {
            commands::version::cmd_version(&ui);
            return ExitCode::SUCCESS;
        }
        Action::Run(command) => command,
    };

    tracing::debug!(command = command.name(), dir = %project_dir.display(), "dispatch");
    let result = match &command {
        Commands::Create { name, .. } => commands::create::cmd_create(&ui, &config, name.as_deref()),
        Commands::Start(_) => commands::start::cmd_start(&ui, &config, &project_dir),
        Commands::Stop(_) => commands::stop::cmd_stop(&ui, &config, &project_dir),
        Commands::Status(_) => commands::diagnostics::cmd_status(&ui, &config, &project_dir),
        Commands::Debug(_) => commands::diagnostics::cmd_debug(&ui, &config, &project_dir),
        Commands::Init(_) => commands::init::cmd_init(&ui, &config, &project_dir),
        Commands::Update(_) => commands::update::cmd_update(&ui),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report_failure(&ui, &command, &err),
    }
}

/// Print a failed command and pick the exit code
fn report_failure(ui: &UiContext, command: &Commands, err: &anyhow::Error) -> ExitCode {
    say(ui, Level::Error, &format!("{:#}", err));

    match command {
        Commands::Create { .. } => {
            if let Some((level, hint)) = commands::create::hint_for(err) {
                say(ui, level, hint);
            }
            if commands::create::is_fatal(err) {
                return ExitCode::FAILURE;
            }
        }
        Commands::Start(_) => say(
            ui,
            Level::Warning,
            "Make sure Docker is running and you have proper permissions",
        ),
        _ => {}
    }
    ExitCode::SUCCESS
}

/// `TUNN8N_LOG` wins; otherwise `--verbose` raises the level from warn.
/// Diagnostic logs go to stderr so stdout stays for command output.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("TUNN8N_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("tunn8n={}", default_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
