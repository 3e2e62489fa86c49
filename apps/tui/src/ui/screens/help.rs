use crate::ui::widgets::popup::centered_rect;
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_help_popup(f: &mut Frame<'_>) {
    let area = centered_rect(60, 70, f.area());

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines = vec![
        heading("Filters"),
        entry("Tab / Shift+Tab", "move focus between panels"),
        entry("Up / Down", "move the cursor in a list"),
        entry("PgUp / PgDn", "jump 5 rows"),
        entry("Home / End", "first / last row"),
        entry("Space / Enter", "toggle a state or city, pick a category"),
        entry("typing (Cities)", "narrow the city list, Esc clears"),
        TextLine::from(""),
        heading("Views"),
        entry("Restaurants", "Up/Down scrolls the filtered table"),
        entry("Map", "Left/Right walks the plotted restaurants"),
        TextLine::from(""),
        heading("Global"),
        entry("r", "clear all filters"),
        entry("?", "toggle this help"),
        entry("q", "quit"),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::Gray),
        )),
    ];

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn heading(text: &str) -> TextLine<'_> {
    TextLine::from(Span::styled(
        text,
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    ))
}

fn entry<'a>(key: &'a str, action: &'a str) -> TextLine<'a> {
    TextLine::from(vec![
        Span::styled(
            format!("{key:<16}"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(action),
    ])
}
