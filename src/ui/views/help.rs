use tunn8n::domain::value_objects::Level;

use crate::ui::style::style;

const COMMANDS: &[(&str, &str)] = &[
    ("create <project-name>", "Create new n8n project"),
    ("start", "Start docker services"),
    ("stop", "Stop docker services"),
    ("status", "Check service status"),
    ("debug", "Debug mode"),
    ("init", "Initialize .env file"),
    ("update", "Update tunn8n to latest version"),
    ("--version, -v", "Show version"),
    ("--help, -h", "Show this help message"),
];

const OPTIONS: &[(&str, &str)] = &[
    ("--color <auto|always|never>", "Color output mode"),
    ("--verbose", "Diagnostic logging on stderr (repeat for more)"),
];

const STRUCTURE: &[(&str, &str)] = &[
    ("scripts/", "Shell scripts for service management"),
    (".env", "Environment configuration"),
    ("docker-compose.yml", "Docker service definitions"),
    ("README.md", "Documentation"),
    (".gitignore", "Git ignore rules"),
    (".env.example", "Example environment configuration"),
];

const EXAMPLES: &[&str] = &[
    "tunn8n create my-automation",
    "cd my-automation",
    "tunn8n start",
    "tunn8n status",
];

pub fn render_help(supports_color: bool, supports_unicode: bool) -> String {
    let heading = |text: &str| style(Level::Heading, text, supports_color, supports_unicode);
    let title = if supports_unicode {
        "🚀 tunn8n - n8n with Docker & Ngrok"
    } else {
        "tunn8n - n8n with Docker & Ngrok"
    };

    let mut out = String::new();
    out.push_str(&heading(title));
    out.push_str("\n\n");

    out.push_str(&heading("Usage:"));
    out.push('\n');
    push_pairs(&mut out, "tunn8n ", COMMANDS);

    out.push('\n');
    out.push_str(&heading("Options:"));
    out.push('\n');
    push_pairs(&mut out, "", OPTIONS);

    out.push('\n');
    out.push_str(&heading("Project Structure:"));
    out.push('\n');
    push_pairs(&mut out, "", STRUCTURE);

    out.push('\n');
    out.push_str(&heading("Examples:"));
    out.push('\n');
    for example in EXAMPLES {
        out.push_str(&format!("  {}\n", example));
    }
    out
}

fn push_pairs(out: &mut String, prefix: &str, pairs: &[(&str, &str)]) {
    let width = pairs
        .iter()
        .map(|(left, _)| prefix.len() + left.len())
        .max()
        .unwrap_or(0);
    for (left, right) in pairs {
        let left = format!("{}{}", prefix, left);
        out.push_str(&format!("  {:<width$}  {}\n", left, right, width = width));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_command() {
        let help = render_help(false, false);
        for cmd in ["create", "start", "stop", "status", "debug", "init", "update"] {
            assert!(
                help.contains(&format!("tunn8n {}", cmd)),
                "missing {} in\n{}",
                cmd,
                help
            );
        }
        assert!(help.contains("--version, -v"));
    }

    #[test]
    fn ascii_title_without_unicode() {
        let help = render_help(false, false);
        assert!(help.starts_with("tunn8n - n8n with Docker & Ngrok\n"));
    }

    #[test]
    fn descriptions_are_aligned() {
        let help = render_help(false, false);
        let start = help.lines().find(|l| l.contains("tunn8n start")).unwrap();
        let stop = help.lines().find(|l| l.contains("tunn8n stop")).unwrap();
        assert_eq!(start.find("Start docker"), stop.find("Stop docker"));
    }
}
