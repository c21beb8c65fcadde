use crate::ui::widgets::r#box::{Box, BoxStyle};

pub fn render_version(version: &str, supports_color: bool, supports_unicode: bool) -> String {
    let mut b = Box::default().style(BoxStyle::Info);
    b.add_line(format!("tunn8n CLI Version: {}", version));
    b.add_line("Template: n8n with Docker + Ngrok integration");
    b.render(supports_color, supports_unicode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_renders_with_themed_borders() {
        let rendered = render_version("1.3.8", false, true);
        assert!(rendered.starts_with('╭'));
        assert!(rendered.contains("tunn8n CLI Version: 1.3.8"));
    }

    #[test]
    fn version_ascii_snapshot() {
        insta::assert_snapshot!(render_version("1.3.8", false, false).trim_end(), @r"
        +-----------------------------------------------+
        | tunn8n CLI Version: 1.3.8                     |
        | Template: n8n with Docker + Ngrok integration |
        +-----------------------------------------------+
        ");
    }
}
