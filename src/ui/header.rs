use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

pub fn draw_header(f: &mut Frame, area: Rect) {
    let logo = r#"
    ███████╗██╗     ██╗      █████╗
    ██╔════╝██║     ██║     ██╔══██╗
    █████╗  ██║     ██║     ███████║
    ██╔══╝  ██║     ██║     ██╔══██║
    ███████╗███████╗███████╗██║  ██║
    ╚══════╝╚══════╝╚══════╝╚═╝  ╚═╝
    "#;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(area);

    let logo_paragraph = Paragraph::new(logo)
        .style(
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Left);

    f.render_widget(logo_paragraph, chunks[0]);

    let title = Paragraph::new("fitness, mental clarity, and calm")
        .style(
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::ITALIC),
        )
        .alignment(Alignment::Center);

    f.render_widget(title, chunks[1]);
}
