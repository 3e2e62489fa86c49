use crate::app::{App, Focus};
use crate::domain::Category;
use crate::ui::widgets::charts::category_color;
use crate::ui::widgets::focus_border;
use crate::ui::widgets::tables::scroll_offset;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// The three filter sections: states, cities (with the search box), and
/// the single-select category list.
pub fn render_sidebar(app: &App, f: &mut Frame<'_>, area: Rect) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),
            Constraint::Length(3),
            Constraint::Min(6),
            // Six category rows plus the border
            Constraint::Length(8),
        ])
        .split(area);

    render_states_section(app, f, sections[0]);
    render_city_search(app, f, sections[1]);
    render_cities_section(app, f, sections[2]);
    render_category_section(app, f, sections[3]);
}

fn cursor_style() -> Style {
    Style::default()
        .bg(Color::Rgb(0, 0, 238))
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

fn checkbox(selected: bool) -> &'static str {
    if selected {
        "[x] "
    } else {
        "[ ] "
    }
}

fn render_states_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let focused = app.focus == Focus::States;
    let states = app.states();
    let selected_count = states
        .iter()
        .filter(|state| app.is_state_selected(state))
        .count();

    let block = Block::default()
        .title(format!("Select States ({selected_count} selected)"))
        .borders(Borders::ALL)
        .border_style(focus_border(focused));

    let max_visible_rows = area.height.saturating_sub(2) as usize;
    let offset = scroll_offset(states.len(), max_visible_rows, app.state_cursor);

    let lines: Vec<TextLine<'_>> = states
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .map(|(position, state)| {
            let selected = app.is_state_selected(state);
            let style = if focused && position == app.state_cursor {
                cursor_style()
            } else if selected {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            TextLine::from(Span::styled(format!("{}{state}", checkbox(selected)), style))
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_city_search(app: &App, f: &mut Frame<'_>, area: Rect) {
    let focused = app.focus == Focus::Cities;
    let block = Block::default()
        .title("City Search")
        .borders(Borders::ALL)
        .border_style(focus_border(focused));

    let cursor = if focused { "_" } else { "" };
    let query = Paragraph::new(format!("{}{cursor}", app.city_query)).block(block);
    f.render_widget(query, area);
}

fn render_cities_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let focused = app.focus == Focus::Cities;
    let cities = app.visible_cities();

    let block = Block::default()
        .title("Select Cities")
        .borders(Borders::ALL)
        .border_style(focus_border(focused));

    if cities.is_empty() {
        let hint = if app.selected_states_sorted().is_empty() {
            "Select a state first"
        } else {
            "No city matches the search"
        };
        let paragraph = Paragraph::new(hint).block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let cursor = app.city_cursor.min(cities.len() - 1);
    let max_visible_rows = area.height.saturating_sub(2) as usize;
    let offset = scroll_offset(cities.len(), max_visible_rows, cursor);

    let lines: Vec<TextLine<'_>> = cities
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .map(|(position, city)| {
            let selected = app.is_city_selected(city);
            let style = if focused && position == cursor {
                cursor_style()
            } else if selected {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            TextLine::from(Span::styled(format!("{}{city}", checkbox(selected)), style))
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_category_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let focused = app.focus == Focus::Category;
    let block = Block::default()
        .title("Select a Category")
        .borders(Borders::ALL)
        .border_style(focus_border(focused));

    let lines: Vec<TextLine<'_>> = Category::ALL
        .into_iter()
        .enumerate()
        .map(|(position, category)| {
            let selected = app.selected_category == Some(category);
            let marker = if selected { "(o) " } else { "( ) " };
            let style = if focused && position == app.category_cursor {
                cursor_style()
            } else if selected {
                Style::default().fg(category_color(category))
            } else {
                Style::default()
            };
            TextLine::from(Span::styled(format!("{marker}{}", category.label()), style))
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}
