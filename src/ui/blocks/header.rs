use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Title line shown at the top of a command's output, followed by
/// `Label: value` facts with the values aligned
#[derive(Debug, Clone)]
pub struct CommandHeader {
    icon: Icon,
    title: String,
    facts: Vec<(String, String)>,
}

impl CommandHeader {
    pub fn new(icon: Icon, title: impl Into<String>) -> Self {
        Self {
            icon,
            title: title.into(),
            facts: Vec::new(),
        }
    }

    pub fn add(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.facts.push((label.into(), value.into()));
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = ColoredText::info(self.title.as_str())
            .bold()
            .render(supports_color);
        let mut out = format!(
            "{} {}\n",
            self.icon.colored(supports_color, supports_unicode),
            title
        );

        let width = self.facts.iter().map(|(l, _)| l.len() + 1).max().unwrap_or(0);
        for (label, value) in &self.facts {
            let label = format!("{:<width$}", format!("{}:", label), width = width);
            out.push_str(&format!(
                "  {} {}\n",
                ColoredText::dim(label).render(supports_color),
                value
            ));
        }
        out
    }
}
