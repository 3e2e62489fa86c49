use color_eyre::Result;
use crossterm::event::{self, Event};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;

use crate::app::{handle_input, App};
use crate::data::CategoryCounts;
use crate::domain::Category;
use crate::ui;

/// Run the application in headless mode (no UI)
pub fn run_headless(app: &App, json: bool) -> Result<()> {
    if json {
        render_headless_json(app)
    } else {
        render_headless_stats(app)
    }
}

fn render_headless_stats(app: &App) -> Result<()> {
    let stats = build_headless_stats(app);

    println!("\nFast Food Dataset Stats");
    println!("=======================");
    println!("Total restaurants: {}", stats.total_restaurants);
    println!("With coordinates: {}", stats.located_restaurants);
    println!("States: {}", stats.states);
    println!("Cities: {}", stats.cities);

    println!("\nRestaurants by Category:");
    for (category, count) in &stats.by_category {
        println!("- {category}: {count}");
    }

    println!("\nTop Category by State:");
    for top in &stats.top_by_state {
        println!("- {} | {} | {}", top.state, top.category, top.count);
    }

    Ok(())
}

fn render_headless_json(app: &App) -> Result<()> {
    let stats = build_headless_stats(app);
    let json = serde_json::to_string_pretty(&stats)?;
    println!("{json}");
    Ok(())
}

fn build_headless_stats(app: &App) -> HeadlessStats {
    let data = app.dataset();
    let counts = CategoryCounts::count_by_state(data, &[]);

    let located_restaurants = data
        .records()
        .iter()
        .filter(|record| record.location().is_some())
        .count();

    let by_category = Category::ALL
        .into_iter()
        .map(|category| {
            let total = counts
                .rows()
                .map(|(_, cells)| cells[category.index()])
                .sum();
            (category.label().to_string(), total)
        })
        .collect();

    let top_by_state = counts
        .top_categories()
        .into_iter()
        .map(|top| HeadlessTopCategory {
            state: top.state,
            category: top.category.label().to_string(),
            count: top.count,
        })
        .collect();

    let states = data.states();
    let cities = data.cities_in(&states).len();

    HeadlessStats {
        total_restaurants: data.len(),
        located_restaurants,
        states: states.len(),
        cities,
        by_category,
        top_by_state,
    }
}

#[derive(serde::Serialize)]
struct HeadlessStats {
    total_restaurants: usize,
    located_restaurants: usize,
    states: usize,
    cities: usize,
    by_category: Vec<(String, u64)>,
    top_by_state: Vec<HeadlessTopCategory>,
}

#[derive(serde::Serialize)]
struct HeadlessTopCategory {
    state: String,
    category: String,
    count: u64,
}

/// Run the main application event loop
pub fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    loop {
        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    handle_input(app, key.code);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    // Force a redraw after resize
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_))
                | Err(_) => {
                    // Ignore non-key events
                }
            }
        }
    }
    Ok(())
}
