//! Docker Compose front-end spelling

use std::fmt;

/// The two equivalent ways of invoking Docker Compose
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeCommand {
    /// Legacy standalone binary: `docker-compose`
    Standalone,
    /// CLI plugin: `docker compose`
    Plugin,
}

impl ComposeCommand {
    /// Probe order: standalone first, then the plugin
    pub const PROBE_ORDER: [ComposeCommand; 2] = [ComposeCommand::Standalone, ComposeCommand::Plugin];

    /// Program and leading arguments, given the engine binary
    pub fn program<'a>(&self, engine_bin: &'a str) -> (&'a str, Vec<&'static str>) {
        match self {
            ComposeCommand::Standalone => ("docker-compose", Vec::new()),
            ComposeCommand::Plugin => (engine_bin, vec!["compose"]),
        }
    }

    /// Arguments that ask the front-end for its version
    pub fn version_args(&self) -> &'static [&'static str] {
        match self {
            ComposeCommand::Standalone => &["--version"],
            ComposeCommand::Plugin => &["version"],
        }
    }
}

impl fmt::Display for ComposeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComposeCommand::Standalone => write!(f, "docker-compose"),
            ComposeCommand::Plugin => write!(f, "docker compose"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_invocation() {
        assert_eq!(ComposeCommand::Standalone.to_string(), "docker-compose");
        assert_eq!(ComposeCommand::Plugin.to_string(), "docker compose");
    }

    #[test]
    fn plugin_runs_through_engine_binary() {
        let (program, args) = ComposeCommand::Plugin.program("podman");
        assert_eq!(program, "podman");
        assert_eq!(args, vec!["compose"]);
    }

    #[test]
    fn version_args_differ_per_spelling() {
        assert_eq!(ComposeCommand::Standalone.version_args(), &["--version"]);
        assert_eq!(ComposeCommand::Plugin.version_args(), &["version"]);
    }
}
