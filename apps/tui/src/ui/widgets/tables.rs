use crate::app::{App, DashboardPlan, Focus};
use crate::data::TopCategory;
use crate::ui::widgets::charts::category_color;
use crate::ui::widgets::focus_border;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

pub const fn scroll_offset(
    total_rows: usize,
    max_visible_rows: usize,
    selected_index: usize,
) -> usize {
    if total_rows <= max_visible_rows {
        return 0;
    }

    if selected_index >= max_visible_rows {
        return selected_index.saturating_sub(max_visible_rows) + 1;
    }

    selected_index
}

pub fn render_top_categories_table(top: &[TopCategory], f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Most Popular Category by State")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if top.is_empty() {
        let paragraph = Paragraph::new("No restaurants available")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("State"),
        Cell::from("Category"),
        Cell::from("Counts"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows = top.iter().map(|entry| {
        Row::new(vec![
            Cell::from(entry.state.clone()),
            Cell::from(entry.category.label()),
            Cell::from(entry.count.to_string()),
        ])
        .style(Style::default().fg(category_color(entry.category)))
    });

    let widths = [
        Constraint::Length(6),
        Constraint::Length(16),
        Constraint::Length(7),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1);

    f.render_widget(table, area);
}

/// The city/category/state result table. A filter error renders inline and
/// the rest of the dashboard keeps going.
pub fn render_restaurants_table(app: &App, plan: &DashboardPlan, f: &mut Frame<'_>, area: Rect) {
    let focused = app.focus == Focus::Restaurants;
    let block = Block::default()
        .title("Filtered Fast-Food Restaurants")
        .borders(Borders::ALL)
        .border_style(focus_border(focused));

    let view = match &plan.filtered {
        Ok(view) => view,
        Err(error) => {
            let message = format!("An error occurred while filtering data: {error}");
            let paragraph = Paragraph::new(message)
                .style(Style::default().fg(Color::Red))
                .block(block)
                .alignment(Alignment::Center);
            f.render_widget(paragraph, area);
            return;
        }
    };

    if view.is_empty() {
        let paragraph = Paragraph::new("No restaurants found for the selected criteria.")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Fast Food Restaurant"),
        Cell::from("Address"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let total_rows = view.len();
    let selected = app.restaurant_cursor.min(total_rows - 1);
    let max_visible_rows = area.height.saturating_sub(3) as usize;
    let offset = scroll_offset(total_rows, max_visible_rows, selected);

    let rows = view
        .rows
        .iter()
        .zip(view.addresses.iter())
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .map(|(position, (row, address))| {
            let name = app
                .dataset()
                .record(*row)
                .map_or_else(String::new, |restaurant| restaurant.name.clone());

            let style = if focused && position == selected {
                Style::default()
                    .bg(Color::Rgb(0, 0, 238))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            Row::new(vec![Cell::from(name), Cell::from(address.clone())]).style(style)
        });

    let widths = [Constraint::Percentage(35), Constraint::Percentage(65)];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!(
                    "Filtered Fast-Food Restaurants ({} of {})",
                    selected + 1,
                    total_rows
                ))
                .borders(Borders::ALL)
                .border_style(focus_border(focused)),
        )
        .column_spacing(1);

    f.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::scroll_offset;

    #[test]
    fn short_lists_never_scroll() {
        assert_eq!(scroll_offset(3, 10, 2), 0);
    }

    #[test]
    fn window_follows_the_selection() {
        assert_eq!(scroll_offset(20, 5, 4), 4);
        assert_eq!(scroll_offset(20, 5, 10), 6);
        assert_eq!(scroll_offset(20, 5, 19), 15);
    }
}
