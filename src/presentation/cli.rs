//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - `-h/--help` and `-v/--version` are plain flags so that the binary owns
//!   their output and exit code
//! - Global flags (--color, --verbose) are inherited by all subcommands
//! - Positional words after a command are accepted and ignored
//! - Anything else clap rejects becomes `Action::Help`; the binary prints
//!   usage and exits 0

use clap::{Args, Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// tunn8n - Docker tunnel management for n8n
#[derive(Parser, Debug)]
#[command(name = "tunn8n")]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Show usage
    #[arg(short = 'h', long, global = true)]
    pub help: bool,

    /// Show version
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Diagnostic log verbosity (--verbose, --verbose --verbose)
    #[arg(long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

// Extra positional words after a command; never read
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct TrailingArgs {
    #[arg(hide = true)]
    pub rest: Vec<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create a new n8n project from the template
    Create {
        /// Name of the project directory to create
        name: Option<String>,
        #[command(flatten)]
        trailing: TrailingArgs,
    },
    /// Start the n8n stack
    Start(TrailingArgs),
    /// Stop the n8n stack
    Stop(TrailingArgs),
    /// Show service status
    Status(TrailingArgs),
    /// Full diagnostics of the running stack
    Debug(TrailingArgs),
    /// Create .env from .env.example
    Init(TrailingArgs),
    /// Reinstall the latest release
    Update(TrailingArgs),
}

impl Commands {
    /// Name as typed on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Create { .. } => "create",
            Commands::Start(_) => "start",
            Commands::Stop(_) => "stop",
            Commands::Status(_) => "status",
            Commands::Debug(_) => "debug",
            Commands::Init(_) => "init",
            Commands::Update(_) => "update",
        }
    }
}

/// What the binary should do after parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Help,
    Version,
    Run(Commands),
}

#[derive(Debug)]
pub struct Parsed {
    pub action: Action,
    pub color: Option<ColorWhen>,
    pub verbose: u8,
}

impl Cli {
    /// Parse the given arguments; never fails.
    ///
    /// Help wins over version, and version wins over a subcommand. A command
    /// line clap cannot make sense of degrades to help.
    pub fn parse_action<I, T>(args: I) -> Parsed
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        match Cli::try_parse_from(args) {
            Ok(cli) => {
                let action = if cli.help {
                    Action::Help
                } else if cli.version {
                    Action::Version
                } else {
                    match cli.command {
                        Some(command) => Action::Run(command),
                        None => Action::Help,
                    }
                };
                Parsed {
                    action,
                    color: cli.color,
                    verbose: cli.verbose,
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "unrecognized command line");
                Parsed {
                    action: Action::Help,
                    color: None,
                    verbose: 0,
                }
            }
        }
    }
}
