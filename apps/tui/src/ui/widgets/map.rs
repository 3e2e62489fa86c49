use crate::app::{App, Focus, MapPlan};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::canvas::{Canvas, Map, MapResolution, Points};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

// Fixed-zoom viewport around the mean coordinate, wide enough for a
// handful of neighboring states.
const LON_SPAN: f64 = 70.0;
const LAT_SPAN: f64 = 35.0;

/// Scatter map of the state-filtered records. The selected point's details
/// render underneath as a tooltip line.
pub fn render_map(app: &App, plan: Option<&MapPlan>, f: &mut Frame<'_>, area: Rect) {
    let focused = app.focus == Focus::Map;
    let block = Block::default()
        .title("Geographic Distribution")
        .borders(Borders::ALL)
        .border_style(super::focus_border(focused));

    let Some(plan) = plan else {
        let paragraph = Paragraph::new("No geographic data available for the selected states.")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    };

    let map_split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(2)])
        .split(area);

    let selected = app.map_cursor.min(plan.points.len() - 1);
    let coords: Vec<(f64, f64)> = plan
        .points
        .iter()
        .map(|point| (point.longitude, point.latitude))
        .collect();
    let highlight = [coords[selected]];

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([
            plan.center_longitude - LON_SPAN / 2.0,
            plan.center_longitude + LON_SPAN / 2.0,
        ])
        .y_bounds([
            plan.center_latitude - LAT_SPAN / 2.0,
            plan.center_latitude + LAT_SPAN / 2.0,
        ])
        .paint(|ctx| {
            ctx.draw(&Map {
                resolution: MapResolution::High,
                color: Color::Gray,
            });
            ctx.draw(&Points {
                coords: &coords,
                color: Color::Red,
            });
            ctx.draw(&Points {
                coords: &highlight,
                color: Color::Yellow,
            });
        });

    f.render_widget(canvas, map_split[0]);
    render_tooltip(app, plan, selected, f, map_split[1]);
}

fn render_tooltip(app: &App, plan: &MapPlan, selected: usize, f: &mut Frame<'_>, area: Rect) {
    let Some(restaurant) = plan
        .points
        .get(selected)
        .and_then(|point| app.dataset().record(point.row))
    else {
        return;
    };

    let lines = vec![
        TextLine::from(Span::styled(
            restaurant.name.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(restaurant.formatted_address()),
    ];

    f.render_widget(Paragraph::new(lines), area);
}
