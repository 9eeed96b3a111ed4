use crate::app::{App, AppState};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Draws the footer with dynamic instructions
pub fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    let instructions = match app.state {
        AppState::Chat => "Type your message and press Enter to send. PgUp/PgDn to scroll, Esc to quit.",
        _ => "Press 'y' to confirm quit or 'n' to cancel.",
    };

    let footer = Paragraph::new(instructions)
        .style(Style::default().fg(Color::LightCyan))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(footer, area);
}
