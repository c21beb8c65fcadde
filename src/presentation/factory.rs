//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{
    CreateProjectUseCase, DiagnosticsUseCase, StartUseCase, StopUseCase, UpdateUseCase,
};
use crate::config::Config;
use crate::domain::ports::TemplateSource;
use crate::infrastructure::{CargoInstaller, DirTemplate, DockerCli, EmbeddedTemplate, HttpHealthCheck};

/// Type alias for the concrete CreateProjectUseCase
pub type ConcreteCreateUseCase = CreateProjectUseCase<Box<dyn TemplateSource>>;

pub type ConcreteStartUseCase = StartUseCase<DockerCli>;
pub type ConcreteStopUseCase = StopUseCase<DockerCli>;
pub type ConcreteDiagnosticsUseCase = DiagnosticsUseCase<DockerCli, HttpHealthCheck>;
pub type ConcreteUpdateUseCase = UpdateUseCase<CargoInstaller>;

/// Engine client for the configured binary
pub fn engine(config: &Config) -> DockerCli {
    DockerCli::new(config.engine.binary.as_str())
}

/// Template directory from config when set, otherwise the built-in template
pub fn template(config: &Config) -> Box<dyn TemplateSource> {
    match &config.template.dir {
        Some(dir) => Box::new(DirTemplate::new(dir.clone())),
        None => Box::new(EmbeddedTemplate::new()),
    }
}

pub fn create_create_use_case(config: &Config) -> ConcreteCreateUseCase {
    CreateProjectUseCase::new(template(config))
}

pub fn create_start_use_case(config: &Config) -> ConcreteStartUseCase {
    StartUseCase::new(engine(config))
}

pub fn create_stop_use_case(config: &Config) -> ConcreteStopUseCase {
    StopUseCase::new(engine(config))
}

pub fn create_diagnostics_use_case(config: &Config) -> ConcreteDiagnosticsUseCase {
    DiagnosticsUseCase::new(engine(config), HttpHealthCheck::new())
}

pub fn create_update_use_case() -> ConcreteUpdateUseCase {
    UpdateUseCase::new(CargoInstaller::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn engine_uses_configured_binary() {
        let mut config = Config::default();
        config.engine.binary = "podman".to_string();
        assert_eq!(engine(&config).bin(), "podman");
    }

    #[test]
    fn template_defaults_to_embedded() {
        let config = Config::default();
        assert_eq!(template(&config).describe(), EmbeddedTemplate::new().describe());
    }

    #[test]
    fn template_dir_from_config() {
        let mut config = Config::default();
        config.template.dir = Some(PathBuf::from("/srv/templates/n8n"));
        assert!(template(&config).describe().contains("/srv/templates/n8n"));
    }
}
