//! Blocking HTTP health probe

use std::time::Duration;

use crate::domain::ports::{HealthCheck, HealthStatus};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// `GET <url>` with a short timeout; redirects are not followed
pub struct HttpHealthCheck {
    agent: ureq::Agent,
}

impl HttpHealthCheck {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .redirects(0)
            .build();
        Self { agent }
    }
}

impl Default for HttpHealthCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthCheck for HttpHealthCheck {
    fn probe(&self, url: &str) -> HealthStatus {
        tracing::debug!(%url, "health probe");
        match self.agent.get(url).call() {
            Ok(response) => HealthStatus::from_status(response.status()),
            Err(ureq::Error::Status(code, _)) => HealthStatus::from_status(code),
            Err(ureq::Error::Transport(transport)) => HealthStatus::Unreachable {
                error: transport.to_string(),
            },
        }
    }
}
