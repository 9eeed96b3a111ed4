use chrono::{DateTime, Local};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Ella,
}

impl Sender {
    /// Display label. The assistant side uses the configured name so the
    /// transcript matches the typing indicator.
    pub fn label(&self) -> String {
        match self {
            Sender::User => "You".to_string(),
            Sender::Ella => crate::config::get_config().assistant_name,
        }
    }

    fn style(&self) -> Style {
        Style::default().fg(match self {
            Sender::User => Color::Rgb(255, 223, 128), // warm yellow
            Sender::Ella => Color::Rgb(144, 238, 144), // soft green
        })
    }
}

/// A single transcript entry. Content is held verbatim and rendered as plain
/// text spans only; it is never assembled into or parsed as markup.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub sender: Sender,
    pub content: String,
    pub timestamp: DateTime<Local>,
}

impl ChatMessage {
    pub fn new(sender: Sender, content: impl Into<String>) -> Self {
        Self {
            sender,
            content: content.into(),
            timestamp: Local::now(),
        }
    }

    /// Renders the message as `<label>: <body>` with continuation lines
    /// aligned under the body.
    pub fn render(&self, area: Rect) -> Vec<Line<'static>> {
        let style = self.sender.style();
        let prefix = format!("{}: ", self.sender.label());
        let prefix_width = prefix.width();
        let wrap_width = (area.width as usize).saturating_sub(prefix_width).max(8);

        let wrapped = wrap(&self.content, wrap_width);
        let timestamp = self.timestamp.format("%H:%M").to_string();

        let mut lines = Vec::new();
        for (idx, chunk) in wrapped.iter().enumerate() {
            if idx == 0 {
                lines.push(Line::from(vec![
                    Span::styled(prefix.clone(), style.add_modifier(Modifier::BOLD)),
                    Span::styled(chunk.to_string(), style),
                    Span::styled(
                        format!("  {}", timestamp),
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::DIM),
                    ),
                ]));
            } else {
                lines.push(Line::from(vec![
                    Span::raw(" ".repeat(prefix_width)),
                    Span::styled(chunk.to_string(), style),
                ]));
            }
        }

        if lines.is_empty() {
            lines.push(Line::from(Span::styled(
                prefix,
                style.add_modifier(Modifier::BOLD),
            )));
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.clone()).collect()
    }

    #[test]
    fn test_user_label() {
        assert_eq!(Sender::User.label(), "You");
    }

    // Owns the global assistant name for its duration; the other tests in
    // this module only rely on the label width, which "Ella" and "Luna"
    // share.
    #[test]
    fn test_transcript_label_follows_configured_assistant_name() {
        assert_eq!(Sender::Ella.label(), "Ella");

        let mut cfg = crate::config::get_config();
        cfg.assistant_name = "Luna".to_string();
        crate::config::set_config(cfg);

        let msg = ChatMessage::new(Sender::Ella, "hi");
        let lines = msg.render(Rect::new(0, 0, 80, 24));
        assert!(line_text(&lines[0]).starts_with("Luna: hi"));

        crate::config::set_config(crate::config::Config::default());
    }

    #[test]
    fn test_render_prefixes_sender_label() {
        let msg = ChatMessage::new(Sender::User, "hello");
        let area = Rect::new(0, 0, 80, 24);
        let lines = msg.render(area);
        assert!(line_text(&lines[0]).starts_with("You: hello"));
    }

    #[test]
    fn test_render_wraps_long_content() {
        let msg = ChatMessage::new(Sender::Ella, "one two three four five six seven eight");
        let area = Rect::new(0, 0, 20, 24);
        let lines = msg.render(area);
        assert!(lines.len() > 1);
        // continuation lines align under the body, past the label
        assert!(line_text(&lines[1]).starts_with("      "));
    }

    #[test]
    fn test_render_is_plain_text() {
        let msg = ChatMessage::new(Sender::User, "<strong>not markup</strong>");
        let area = Rect::new(0, 0, 80, 24);
        let lines = msg.render(area);
        assert!(line_text(&lines[0]).contains("<strong>not markup</strong>"));
    }
}
