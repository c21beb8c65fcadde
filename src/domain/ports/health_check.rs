//! Health Check Port
//!
//! An HTTP probe against a published service endpoint.

/// Result of probing one URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// 2xx response
    Healthy { status: u16 },
    /// Any other HTTP status
    Unhealthy { status: u16 },
    /// No HTTP response at all
    Unreachable { error: String },
}

impl HealthStatus {
    pub fn from_status(status: u16) -> Self {
        if (200..300).contains(&status) {
            HealthStatus::Healthy { status }
        } else {
            HealthStatus::Unhealthy { status }
        }
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthStatus::Healthy { .. })
    }
}

pub trait HealthCheck {
    fn probe(&self, url: &str) -> HealthStatus;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_2xx_is_healthy() {
        assert!(HealthStatus::from_status(200).is_healthy());
        assert!(HealthStatus::from_status(204).is_healthy());
        assert!(!HealthStatus::from_status(301).is_healthy());
        assert!(!HealthStatus::from_status(503).is_healthy());
    }
}
