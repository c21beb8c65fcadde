use tunn8n::config::ConfigWarning;
use tunn8n::domain::value_objects::Level;

use crate::ui::context::UiContext;
use crate::ui::style::style;

/// Unknown-key warnings go to stderr so they never mix with command output
pub fn print_config_warnings(ui: &UiContext, warnings: &[ConfigWarning]) {
    for w in warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", w.file.display(), line),
            None => w.file.display().to_string(),
        };
        eprintln!(
            "{}",
            style(
                Level::Warning,
                &format!("Unknown config key '{}' in {}", w.key, location),
                ui.color,
                ui.unicode
            )
        );

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?", suggestion);
        }
    }
}

/// Print one styled line to stdout
pub fn say(ui: &UiContext, level: Level, message: &str) {
    println!("{}", style(level, message, ui.color, ui.unicode));
}
