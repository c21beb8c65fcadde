//! Decoding of Docker CLI `--format '{{json .}}'` and `inspect` output

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::domain::entities::{ContainerDetail, ContainerInfo, NetworkInfo, ResourceStats};

#[derive(Debug, Deserialize)]
struct PsRow {
    #[serde(rename = "Names", default)]
    names: String,
    #[serde(rename = "Status", default)]
    status: String,
    #[serde(rename = "Ports", default)]
    ports: String,
    #[serde(rename = "State", default)]
    state: String,
}

#[derive(Debug, Deserialize)]
struct NetworkRow {
    #[serde(rename = "ID", default)]
    id: String,
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "Driver", default)]
    driver: String,
    #[serde(rename = "Scope", default)]
    scope: String,
}

#[derive(Debug, Deserialize)]
struct StatsRow {
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "CPUPerc", default)]
    cpu: String,
    #[serde(rename = "MemUsage", default)]
    memory: String,
    #[serde(rename = "NetIO", default)]
    net_io: String,
    #[serde(rename = "BlockIO", default)]
    block_io: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct InspectDoc {
    #[serde(default)]
    name: String,
    #[serde(default)]
    restart_count: u32,
    #[serde(default)]
    state: InspectState,
    #[serde(default)]
    config: InspectConfig,
    #[serde(default)]
    network_settings: InspectNetworkSettings,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct InspectState {
    #[serde(default)]
    status: String,
    #[serde(default)]
    running: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct InspectConfig {
    #[serde(default)]
    image: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct InspectNetworkSettings {
    #[serde(default)]
    networks: Option<BTreeMap<String, InspectEndpoint>>,
}

#[derive(Debug, Default, Deserialize)]
struct InspectEndpoint {
    #[serde(rename = "IPAddress", default)]
    ip_address: String,
}

fn json_lines<'a, T: Deserialize<'a>>(output: &'a str) -> serde_json::Result<Vec<T>> {
    output
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(serde_json::from_str)
        .collect()
}

/// `docker ps --format '{{json .}}'`
pub fn parse_ps(output: &str) -> serde_json::Result<Vec<ContainerInfo>> {
    Ok(json_lines::<PsRow>(output)?
        .into_iter()
        .map(|row| ContainerInfo {
            name: row.names,
            status: row.status,
            ports: row.ports,
            state: row.state,
        })
        .collect())
}

/// `docker network ls --format '{{json .}}'`
pub fn parse_networks(output: &str) -> serde_json::Result<Vec<NetworkInfo>> {
    Ok(json_lines::<NetworkRow>(output)?
        .into_iter()
        .map(|row| NetworkInfo {
            id: row.id,
            name: row.name,
            driver: row.driver,
            scope: row.scope,
        })
        .collect())
}

/// `docker stats --no-stream --format '{{json .}}' <name>`
pub fn parse_stats(output: &str) -> serde_json::Result<Vec<ResourceStats>> {
    Ok(json_lines::<StatsRow>(output)?
        .into_iter()
        .map(|row| ResourceStats {
            name: row.name,
            cpu: row.cpu,
            memory: row.memory,
            net_io: row.net_io,
            block_io: row.block_io,
        })
        .collect())
}

/// `docker inspect <name>` (a JSON array with one document per object)
pub fn parse_inspect(output: &str) -> serde_json::Result<Option<ContainerDetail>> {
    let docs: Vec<InspectDoc> = serde_json::from_str(output)?;
    Ok(docs.into_iter().next().map(|doc| ContainerDetail {
        name: doc.name.trim_start_matches('/').to_string(),
        status: doc.state.status,
        running: doc.state.running,
        restart_count: doc.restart_count,
        image: doc.config.image,
        networks: doc
            .network_settings
            .networks
            .unwrap_or_default()
            .into_iter()
            .map(|(name, ep)| (name, ep.ip_address))
            .collect(),
    }))
}
