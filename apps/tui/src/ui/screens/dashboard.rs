use crate::app::{App, Focus};
use crate::ui::widgets::charts::render_category_barchart;
use crate::ui::widgets::map::render_map;
use crate::ui::widgets::sidebar::render_sidebar;
use crate::ui::widgets::tables::{render_restaurants_table, render_top_categories_table};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_dashboard(app: &App, f: &mut Frame<'_>) {
    // One full derivation per draw; nothing below holds state.
    let plan = app.plan();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title area
            Constraint::Min(12),   // Content area
            Constraint::Length(3), // Status area
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(1, 0)));

    render_title_section(app, f, main_layout[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(28), Constraint::Percentage(72)])
        .split(main_layout[1]);

    render_sidebar(app, f, body[0]);

    let views = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(body[1]);

    render_category_barchart(&plan.counts, f, views[0]);

    let table_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(42), Constraint::Percentage(58)])
        .split(views[1]);

    render_top_categories_table(&plan.top, f, table_row[0]);
    render_restaurants_table(app, &plan, f, table_row[1]);

    render_map(app, plan.map.as_ref(), f, views[2]);

    render_status_section(app, f, main_layout[2]);
    render_shortcuts(app, f, main_layout[3]);
}

fn render_title_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let title_block = Block::default()
        .title("== Fast Food Categories by State ==")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let summary = format!(
        "{} restaurants across {} states - filter with the sidebar, all views follow",
        app.dataset().len(),
        app.states().len()
    );

    let paragraph = Paragraph::new(summary)
        .block(title_block)
        .alignment(Alignment::Left);
    f.render_widget(paragraph, area);
}

fn render_status_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let status_block = Block::default()
        .title(" Status ")
        .title_style(Style::default().fg(Color::Green))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let text = if app.status_message.is_empty() {
        selection_summary(app)
    } else {
        app.status_message.clone()
    };

    f.render_widget(Paragraph::new(text).block(status_block), area);
}

fn selection_summary(app: &App) -> String {
    let selection = app.selection();
    let category = selection
        .category
        .map_or("no category", |category| category.label());
    format!(
        "Filters: {} states | {} cities | {category} | focus on {}",
        selection.states.len(),
        selection.cities.len(),
        app.focus.label()
    )
}

fn render_shortcuts(app: &App, f: &mut Frame<'_>, area: Rect) {
    let mut spans = vec![
        shortcut_span("Tab"),
        Span::raw(": Next Panel   "),
        shortcut_span("Space/Enter"),
        Span::raw(": Toggle   "),
    ];

    if app.focus == Focus::Map {
        spans.push(shortcut_span("←/→"));
        spans.push(Span::raw(": Walk Points   "));
    } else {
        spans.push(shortcut_span("↑/↓"));
        spans.push(Span::raw(": Navigate   "));
    }

    spans.extend([
        shortcut_span("?"),
        Span::raw(": Help   "),
        shortcut_span("r"),
        Span::raw(": Reset   "),
        shortcut_span("q"),
        Span::raw(": Quit"),
    ]);

    f.render_widget(Paragraph::new(TextLine::from(spans)), area);
}

fn shortcut_span(key: &str) -> Span<'_> {
    Span::styled(
        key,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
}
