//! Container state as seen through the engine port

/// One row of a container listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerInfo {
    pub name: String,
    /// Human status, e.g. "Up 3 minutes" or "Exited (1) 2 hours ago"
    pub status: String,
    /// Published ports, e.g. "0.0.0.0:5678->5678/tcp"
    pub ports: String,
    /// Machine state, e.g. "running" or "exited"
    pub state: String,
}

impl ContainerInfo {
    pub fn is_running(&self) -> bool {
        if self.state.is_empty() {
            self.status.starts_with("Up")
        } else {
            self.state.eq_ignore_ascii_case("running")
        }
    }

    /// Host ports that forward to `container_port`
    pub fn host_ports_for(&self, container_port: u16) -> Vec<u16> {
        parse_host_ports(&self.ports, container_port)
    }
}

/// Detailed inspect data for a single container
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContainerDetail {
    pub name: String,
    pub status: String,
    pub running: bool,
    pub restart_count: u32,
    pub image: String,
    /// (network name, IP address)
    pub networks: Vec<(String, String)>,
}

impl ContainerDetail {
    pub fn has_restarted(&self) -> bool {
        self.restart_count > 0
    }

    pub fn ip_addresses(&self) -> Vec<&str> {
        self.networks
            .iter()
            .map(|(_, ip)| ip.as_str())
            .filter(|ip| !ip.is_empty())
            .collect()
    }
}

/// A container network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkInfo {
    pub id: String,
    pub name: String,
    pub driver: String,
    pub scope: String,
}

/// Point-in-time resource usage of one container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceStats {
    pub name: String,
    pub cpu: String,
    pub memory: String,
    pub net_io: String,
    pub block_io: String,
}

/// Name filter for container listings.
///
/// Multiple name filters are OR-ed, matching the engine's own semantics.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContainerFilter {
    pub names: Vec<String>,
    /// Include stopped containers
    pub all: bool,
}

impl ContainerFilter {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            names: vec![name.into()],
            all: false,
        }
    }

    pub fn names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            all: false,
        }
    }

    pub fn include_stopped(mut self) -> Self {
        self.all = true;
        self
    }

    /// Substring match on any configured name (an empty filter matches everything)
    pub fn matches(&self, container_name: &str) -> bool {
        self.names.is_empty() || self.names.iter().any(|n| container_name.contains(n.as_str()))
    }
}

fn parse_host_ports(ports: &str, container_port: u16) -> Vec<u16> {
    let mut out = Vec::new();
    for mapping in ports.split(',') {
        let Some((host, target)) = mapping.trim().split_once("->") else {
            continue;
        };
        let target_port = target.split('/').next().unwrap_or_default();
        if target_port.parse::<u16>().ok() != Some(container_port) {
            continue;
        }
        let host_port = host.rsplit(':').next().unwrap_or_default();
        if let Ok(port) = host_port.parse::<u16>() {
            if !out.contains(&port) {
                out.push(port);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(ports: &str) -> ContainerInfo {
        ContainerInfo {
            name: "n8n-app".to_string(),
            status: "Up 2 minutes".to_string(),
            ports: ports.to_string(),
            state: String::new(),
        }
    }

    #[test]
    fn host_ports_parses_ipv4_and_ipv6_mappings() {
        let c = info("0.0.0.0:5678->5678/tcp, :::5678->5678/tcp");
        assert_eq!(c.host_ports_for(5678), vec![5678]);
    }

    #[test]
    fn host_ports_ignores_other_targets() {
        let c = info("0.0.0.0:4040->4040/tcp, 0.0.0.0:8080->5678/tcp");
        assert_eq!(c.host_ports_for(5678), vec![8080]);
    }

    #[test]
    fn host_ports_empty_when_unpublished() {
        assert!(info("5678/tcp").host_ports_for(5678).is_empty());
        assert!(info("").host_ports_for(5678).is_empty());
    }

    #[test]
    fn running_falls_back_to_status_text() {
        assert!(info("").is_running());
        let mut exited = info("");
        exited.status = "Exited (1) 3 seconds ago".to_string();
        assert!(!exited.is_running());
        exited.state = "running".to_string();
        assert!(exited.is_running());
    }

    #[test]
    fn filter_matches_any_name() {
        let f = ContainerFilter::names(["n8n", "postgres", "ngrok"]);
        assert!(f.matches("n8n-app"));
        assert!(f.matches("n8n-postgres"));
        assert!(f.matches("ngrok"));
        assert!(!f.matches("redis"));
        assert!(ContainerFilter::default().matches("anything"));
    }

    #[test]
    fn detail_ip_addresses_skip_blank() {
        let d = ContainerDetail {
            networks: vec![
                ("n8n_default".to_string(), "172.18.0.3".to_string()),
                ("bridge".to_string(), String::new()),
            ],
            ..Default::default()
        };
        assert_eq!(d.ip_addresses(), vec!["172.18.0.3"]);
    }
}
