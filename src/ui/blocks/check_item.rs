use crate::ui::primitives::icon::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Warning,
    Error,
}

/// One verdict line of a diagnostics section
#[derive(Debug, Clone)]
pub struct CheckItem {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub recommendation: Option<String>,
}

impl CheckItem {
    pub fn new(name: impl Into<String>, status: CheckStatus, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status,
            message: message.into(),
            recommendation: None,
        }
    }

    pub fn recommend(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendation = Some(recommendation.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let icon = match self.status {
            CheckStatus::Pass => Icon::Success,
            CheckStatus::Warning => Icon::Warning,
            CheckStatus::Error => Icon::Error,
        }
        .colored(supports_color, supports_unicode);

        let mut out = String::new();
        out.push_str(&format!("  {} {} - {}\n", icon, self.name, self.message));

        if let Some(rec) = &self.recommendation {
            out.push_str(&format!(
                "    {} {}\n",
                Icon::Arrow.colored(supports_color, supports_unicode),
                rec
            ));
        }

        out
    }
}
