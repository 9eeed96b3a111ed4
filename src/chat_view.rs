use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn draw_chat(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(3),
            ]
            .as_ref(),
        )
        .split(area);

    draw_messages(f, app, chunks[0]);
    app.status_indicator.render(f, chunks[1]);
    draw_input(f, app, chunks[2]);
}

fn draw_messages(f: &mut Frame, app: &mut App, area: Rect) {
    let mut lines = Vec::new();
    for message in app.messages.iter() {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.extend(message.render(area));
    }

    let max = max_scroll(lines.len() as u16, area.height);
    app.last_max_scroll = max;

    // Appends re-stick the view to the bottom; manual scrolling in between
    // is clamped to the rendered content.
    let scroll = if app.stick_to_bottom {
        max
    } else {
        app.scroll.min(max)
    };

    let msgs_para = Paragraph::new(lines)
        .style(Style::default())
        .block(Block::default())
        .wrap(Wrap { trim: true });
    f.render_widget(msgs_para.scroll((scroll, 0)), area);
}

fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let separator = "─".repeat(area.width as usize);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            separator.clone(),
            Style::default().fg(Color::DarkGray),
        ))),
        Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: 1,
        },
    );

    let input = Line::from(vec![
        Span::styled("→ ", Style::default().fg(Color::DarkGray)),
        Span::styled(&app.input, Style::default().fg(Color::White)),
    ]);

    let visible_width = area.width.saturating_sub(2);
    let text_width = input_width(&app.input);
    let scroll_offset = text_width.saturating_sub(visible_width);

    f.render_widget(
        Paragraph::new(input).scroll((0, scroll_offset)),
        Rect {
            x: area.x,
            y: area.y + 1,
            width: area.width,
            height: 1,
        },
    );

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            separator,
            Style::default().fg(Color::DarkGray),
        ))),
        Rect {
            x: area.x,
            y: area.y + area.height - 1,
            width: area.width,
            height: 1,
        },
    );

    let cursor_x = area.x + 2 + input_width(&app.input) - scroll_offset;
    f.set_cursor_position((cursor_x, area.y + 1));
}

/// Display columns of the input buffer, not bytes.
fn input_width(input: &str) -> u16 {
    input.width() as u16
}

/// Highest scroll offset that still shows a full screen of content.
fn max_scroll(total_lines: u16, available_height: u16) -> u16 {
    total_lines.saturating_sub(available_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use crate::chat_message::{ChatMessage, Sender};

    #[test]
    fn test_max_scroll_zero_when_content_fits() {
        assert_eq!(max_scroll(5, 10), 0);
        assert_eq!(max_scroll(10, 10), 0);
    }

    #[test]
    fn test_max_scroll_is_overflow_amount() {
        assert_eq!(max_scroll(25, 10), 15);
    }

    #[test]
    fn test_view_ends_at_max_after_append() {
        let mut app = App::new();
        for i in 0..50 {
            app.messages
                .push(ChatMessage::new(Sender::User, format!("line {}", i)));
        }
        app.stick_to_bottom = true;

        // the effective scroll draw_messages would use
        let area = Rect::new(0, 0, 80, 10);
        let total: u16 = app
            .messages
            .iter()
            .map(|m| m.render(area).len() as u16 + 1)
            .sum::<u16>()
            - 1;
        let max = max_scroll(total, area.height);
        let effective = if app.stick_to_bottom {
            max
        } else {
            app.scroll.min(max)
        };
        assert_eq!(effective, max);
        assert!(max > 0);
    }

    #[test]
    fn test_input_width_counts_display_columns_not_bytes() {
        assert_eq!(input_width("hello"), 5);
        assert_eq!(input_width("héllo"), 5);
        assert!("héllo".len() > 5);
        assert_eq!(input_width("日本"), 4);
    }

    #[test]
    fn test_manual_scroll_is_clamped() {
        let mut app = App::new();
        app.stick_to_bottom = false;
        app.scroll = 1000;
        let effective = app.scroll.min(max_scroll(30, 10));
        assert_eq!(effective, 20);
    }
}
