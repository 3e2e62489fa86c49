use crate::data::CategoryCounts;
use crate::domain::Category;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};
use ratatui::Frame;

pub const fn category_color(category: Category) -> Color {
    match category {
        Category::Asian => Color::Cyan,
        Category::AmericanBurger => Color::Rgb(0, 0, 238),
        Category::MexicanTaco => Color::Yellow,
        Category::ItalianPizza => Color::Magenta,
        Category::IceCream => Color::LightCyan,
        Category::Uncategorized => Color::Gray,
    }
}

/// One bar group per state, one bar per category with a nonzero count.
/// The zero cells of the wide table simply have no visible segment.
pub fn render_category_barchart(counts: &CategoryCounts, f: &mut Frame<'_>, area: Rect) {
    if counts.is_empty() {
        let block = Block::default()
            .title("Category Distribution by State")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let paragraph = Paragraph::new("No restaurants available")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let chart_split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(area);

    let mut chart = BarChart::default()
        .block(
            Block::default()
                .title("Category Distribution by State")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .max(counts.max_cell().max(1))
        .bar_width(3)
        .bar_gap(0)
        .group_gap(2);

    for (state, cells) in counts.rows() {
        let bars: Vec<Bar<'_>> = Category::ALL
            .into_iter()
            .filter(|category| cells[category.index()] > 0)
            .map(|category| {
                Bar::default()
                    .value(cells[category.index()])
                    .style(Style::default().fg(category_color(category)))
                    .value_style(
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    )
            })
            .collect();

        chart = chart.data(
            BarGroup::default()
                .label(TextLine::from(state))
                .bars(&bars),
        );
    }

    f.render_widget(chart, chart_split[0]);
    render_category_legend(f, chart_split[1]);
}

fn render_category_legend(f: &mut Frame<'_>, area: Rect) {
    let mut spans = Vec::new();
    for category in Category::ALL {
        spans.push(Span::styled(
            "■ ",
            Style::default().fg(category_color(category)),
        ));
        spans.push(Span::raw(category.label()));
        spans.push(Span::raw("  "));
    }

    let legend = Paragraph::new(TextLine::from(spans)).alignment(Alignment::Center);
    f.render_widget(legend, area);
}
