//! Rendering of `status` and `debug` reports

use tunn8n::application::diagnostics::{
    DiagnosticsReport, HealthProbe, LogExcerpt, NetworkSection, Section, Summary,
};
use tunn8n::application::Profile;
use tunn8n::domain::entities::{ContainerDetail, ContainerInfo, ResourceStats};
use tunn8n::domain::ports::HealthStatus;
use tunn8n::domain::services::EnvReport;
use tunn8n::domain::value_objects::Level;

use crate::ui::blocks::check_item::{CheckItem, CheckStatus};
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::style::style;
use crate::ui::widgets::table::Table;

struct Writer {
    out: String,
    color: bool,
    unicode: bool,
}

impl Writer {
    fn line(&mut self, level: Level, message: &str) {
        self.out.push_str(&style(level, message, self.color, self.unicode));
        self.out.push('\n');
    }

    fn heading(&mut self, title: &str) {
        self.out.push('\n');
        self.line(Level::Heading, &format!("=== {} ===", title));
    }

    fn raw(&mut self, text: &str) {
        self.out.push_str(text);
        if !text.ends_with('\n') {
            self.out.push('\n');
        }
    }

    /// Renders the error of a failed section and reports whether it failed
    fn failed<T>(&mut self, what: &str, section: &Section<T>) -> bool {
        match section {
            Ok(_) => false,
            Err(e) => {
                self.line(Level::Error, &format!("Could not {}: {}", what, e));
                true
            }
        }
    }
}

pub fn render_report(report: &DiagnosticsReport, color: bool, unicode: bool) -> String {
    let mut w = Writer {
        out: String::new(),
        color,
        unicode,
    };

    w.line(Level::Success, "Docker is running");
    render_env(&mut w, report);
    render_containers(&mut w, &report.containers, &report.summary.service);

    if let Some(primary) = &report.primary {
        render_primary(&mut w, primary, &report.summary.service);
    }
    if let Some(logs) = &report.logs {
        render_logs(&mut w, logs);
    }
    if let Some(networks) = &report.networks {
        render_networks(&mut w, networks);
    }
    if let Some(stats) = &report.stats {
        render_stats(&mut w, stats);
    }
    if report.profile == Profile::Status {
        render_health(&mut w, &report.health);
    }

    w.out.push('\n');
    w.out
        .push_str(&render_summary(&report.summary, report.profile).render(color, unicode));
    w.out
}

fn render_env(w: &mut Writer, report: &DiagnosticsReport) {
    let env: &EnvReport = &report.env;
    if !env.has_warnings() {
        w.line(Level::Success, "Environment variables look good");
        return;
    }

    let name = report
        .env_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| report.env_path.display().to_string());
    if !env.file_found {
        w.line(Level::Warning, &format!("{} file not found!", name));
    }
    for entry in &env.empty_keys {
        w.line(
            Level::Warning,
            &format!("Empty value for {} on line {}", entry.key, entry.line),
        );
    }
    for key in &env.duplicate_keys {
        w.line(
            Level::Info,
            &format!("{} is defined more than once; the last definition wins", key),
        );
    }
    for key in &env.missing_required {
        w.line(
            Level::Warning,
            &format!("Required variable {} is missing or empty", key),
        );
    }
}

fn render_containers(w: &mut Writer, containers: &Section<Vec<ContainerInfo>>, service: &str) {
    w.heading("Containers");
    if w.failed("list containers", containers) {
        return;
    }
    let listed: &[ContainerInfo] = containers.as_deref().unwrap_or(&[]);
    if listed.is_empty() {
        w.line(Level::Warning, "No matching containers found");
        w.line(Level::Dim, &format!("Looked for names containing '{}'", service));
        return;
    }

    let mut table = Table::new(["NAME", "STATUS", "PORTS"]);
    for c in listed {
        table.add_row([c.name.as_str(), c.status.as_str(), c.ports.as_str()]);
    }
    let rendered = table.render(w.color);
    w.raw(&rendered);
}

fn render_primary(w: &mut Writer, primary: &Section<Option<ContainerDetail>>, name: &str) {
    w.heading(&format!("Container {}", name));
    if w.failed("inspect container", primary) {
        return;
    }
    let Ok(Some(detail)) = primary else {
        w.line(Level::Warning, &format!("Container {} not found", name));
        return;
    };

    w.raw(&format!("  Status:        {}", detail.status));
    w.raw(&format!("  Running:       {}", detail.running));
    w.raw(&format!("  Restart count: {}", detail.restart_count));
    w.raw(&format!("  Image:         {}", detail.image));
}

fn render_logs(w: &mut Writer, logs: &Section<LogExcerpt>) {
    w.heading("Recent logs");
    if w.failed("read logs", logs) {
        return;
    }
    if let Ok(excerpt) = logs {
        w.line(Level::Dim, &excerpt.container);
        if excerpt.text.trim().is_empty() {
            w.line(Level::Dim, "(no output)");
        } else {
            for line in excerpt.text.lines() {
                w.raw(&format!("  {}", line));
            }
        }
    }
}

fn render_networks(w: &mut Writer, networks: &Section<NetworkSection>) {
    w.heading("Networks");
    if w.failed("list networks", networks) {
        return;
    }
    let Ok(section) = networks else {
        return;
    };

    if section.networks.is_empty() {
        w.line(Level::Warning, "No matching networks found");
    } else {
        let mut table = Table::new(["NETWORK", "ID", "DRIVER", "SCOPE"]);
        for n in &section.networks {
            table.add_row([
                n.name.as_str(),
                n.id.as_str(),
                n.driver.as_str(),
                n.scope.as_str(),
            ]);
        }
        let rendered = table.render(w.color);
        w.raw(&rendered);
    }

    for (network, ip) in &section.addresses {
        w.line(Level::Info, &format!("{}: {}", network, ip));
    }
}

fn render_stats(w: &mut Writer, stats: &Section<ResourceStats>) {
    w.heading("Resource usage");
    if w.failed("read resource usage", stats) {
        return;
    }
    if let Ok(s) = stats {
        let mut table = Table::new(["NAME", "CPU", "MEMORY", "NET I/O", "BLOCK I/O"]);
        table.add_row([
            s.name.as_str(),
            s.cpu.as_str(),
            s.memory.as_str(),
            s.net_io.as_str(),
            s.block_io.as_str(),
        ]);
        let rendered = table.render(w.color);
        w.raw(&rendered);
    }
}

fn render_health(w: &mut Writer, health: &[HealthProbe]) {
    w.heading("Health");
    if health.is_empty() {
        w.line(Level::Dim, "No running container publishes the n8n port");
        return;
    }
    w.line(Level::Dim, "Only a 2xx response counts as healthy");
    for probe in health {
        let item = match &probe.status {
            HealthStatus::Healthy { status } => CheckItem::new(
                &probe.container,
                CheckStatus::Pass,
                format!("{} answered {}", probe.url, status),
            ),
            HealthStatus::Unhealthy { status } => CheckItem::new(
                &probe.container,
                CheckStatus::Warning,
                format!("{} answered {}", probe.url, status),
            )
            .recommend("n8n may still be starting; check the logs"),
            HealthStatus::Unreachable { error } => CheckItem::new(
                &probe.container,
                CheckStatus::Error,
                format!("{} unreachable: {}", probe.url, error),
            ),
        };
        let rendered = item.render(w.color, w.unicode);
        w.out.push_str(&rendered);
    }
}

fn render_summary(summary: &Summary, profile: Profile) -> ResultSummary {
    let mut block = if summary.running {
        ResultSummary::success(format!("{} is running", summary.service))
    } else {
        ResultSummary::partial(format!("{} is not running", summary.service))
    };

    if summary.is_crash_looping() {
        if let Some(count) = summary.restart_count {
            block.add_warning(format!(
                "Container restarted {} time(s); it may be crash-looping",
                count
            ));
        }
    }
    if let Some(hint) = &summary.hint {
        block.add_next_step(hint.clone());
    }

    let what = match profile {
        Profile::Status => "Status check",
        Profile::Debug => "Debug",
    };
    block.with_footer(format!(
        "{} completed at {}",
        what,
        summary.finished_at.format("%Y-%m-%d %H:%M:%S")
    ));
    block
}
