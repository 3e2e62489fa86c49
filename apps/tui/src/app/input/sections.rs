use crate::app::input::helpers::{
    jump_back, jump_forward, last_index, wrap_decrement, wrap_increment,
};
use crate::app::state::App;
use crate::domain::Category;
use crossterm::event::KeyCode;

const PAGE_JUMP: usize = 5;

pub fn handle_states_input(app: &mut App, key: KeyCode) {
    let total = app.states().len();
    match key {
        KeyCode::Up => app.state_cursor = wrap_decrement(app.state_cursor, total),
        KeyCode::Down => app.state_cursor = wrap_increment(app.state_cursor, total),
        KeyCode::PageUp => app.state_cursor = jump_back(app.state_cursor, PAGE_JUMP),
        KeyCode::PageDown => app.state_cursor = jump_forward(app.state_cursor, PAGE_JUMP, total),
        KeyCode::Home => app.state_cursor = 0,
        KeyCode::End => app.state_cursor = last_index(total),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_state_under_cursor(),
        _ => {}
    }
}

pub fn handle_cities_input(app: &mut App, key: KeyCode) {
    let total = app.visible_cities().len();
    match key {
        KeyCode::Up => app.city_cursor = wrap_decrement(app.city_cursor, total),
        KeyCode::Down => app.city_cursor = wrap_increment(app.city_cursor, total),
        KeyCode::PageUp => app.city_cursor = jump_back(app.city_cursor, PAGE_JUMP),
        KeyCode::PageDown => app.city_cursor = jump_forward(app.city_cursor, PAGE_JUMP, total),
        KeyCode::Home => app.city_cursor = 0,
        KeyCode::End => app.city_cursor = last_index(total),
        KeyCode::Enter | KeyCode::Char(' ') if key == KeyCode::Enter || app.city_query.is_empty() => {
            app.toggle_city_under_cursor();
        }
        KeyCode::Char(character) => app.push_city_query(character),
        KeyCode::Backspace => app.pop_city_query(),
        KeyCode::Esc => app.clear_city_query(),
        _ => {}
    }
}

pub fn handle_category_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up => app.category_cursor = wrap_decrement(app.category_cursor, Category::COUNT),
        KeyCode::Down => app.category_cursor = wrap_increment(app.category_cursor, Category::COUNT),
        KeyCode::Home => app.category_cursor = 0,
        KeyCode::End => app.category_cursor = last_index(Category::COUNT),
        KeyCode::Char(' ') | KeyCode::Enter => app.choose_category_under_cursor(),
        _ => {}
    }
}

pub fn handle_restaurants_input(app: &mut App, key: KeyCode) {
    let total = app.plan().filtered.map_or(0, |view| view.len());
    match key {
        KeyCode::Up => app.restaurant_cursor = wrap_decrement(app.restaurant_cursor, total),
        KeyCode::Down => app.restaurant_cursor = wrap_increment(app.restaurant_cursor, total),
        KeyCode::PageUp => app.restaurant_cursor = jump_back(app.restaurant_cursor, PAGE_JUMP),
        KeyCode::PageDown => {
            app.restaurant_cursor = jump_forward(app.restaurant_cursor, PAGE_JUMP, total);
        }
        KeyCode::Home => app.restaurant_cursor = 0,
        KeyCode::End => app.restaurant_cursor = last_index(total),
        _ => {}
    }
}

pub fn handle_map_input(app: &mut App, key: KeyCode) {
    let total = app.plan().map.map_or(0, |map| map.points.len());
    match key {
        KeyCode::Left => app.map_cursor = wrap_decrement(app.map_cursor, total),
        KeyCode::Right => app.map_cursor = wrap_increment(app.map_cursor, total),
        KeyCode::Home => app.map_cursor = 0,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::{handle_cities_input, handle_map_input, handle_states_input};
    use crate::app::state::{App, Focus};
    use crate::data::models::tests::sample_dataset;
    use crossterm::event::KeyCode;

    fn app_with_sample() -> App {
        App::new(sample_dataset())
    }

    #[test]
    fn state_cursor_wraps_around_the_list() {
        let mut app = app_with_sample();
        handle_states_input(&mut app, KeyCode::Up);
        assert_eq!(app.state_cursor, app.states().len() - 1);
        handle_states_input(&mut app, KeyCode::Down);
        assert_eq!(app.state_cursor, 0);
    }

    #[test]
    fn city_space_toggles_when_the_search_box_is_empty() {
        let mut app = app_with_sample();
        handle_states_input(&mut app, KeyCode::Enter);
        app.focus = Focus::Cities;

        handle_cities_input(&mut app, KeyCode::Char(' '));
        assert!(app.is_city_selected("Boston"));

        // With a query in flight, space is part of the search text.
        handle_cities_input(&mut app, KeyCode::Char('c'));
        handle_cities_input(&mut app, KeyCode::Char(' '));
        assert_eq!(app.city_query, "c ");
    }

    #[test]
    fn map_cursor_walks_the_plotted_points() {
        let mut app = app_with_sample();
        handle_states_input(&mut app, KeyCode::Enter);
        app.focus = Focus::Map;

        // MA has three located sample records.
        handle_map_input(&mut app, KeyCode::Right);
        assert_eq!(app.map_cursor, 1);
        handle_map_input(&mut app, KeyCode::Left);
        handle_map_input(&mut app, KeyCode::Left);
        assert_eq!(app.map_cursor, 2);
        handle_map_input(&mut app, KeyCode::Home);
        assert_eq!(app.map_cursor, 0);
    }
}
