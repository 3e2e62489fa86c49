mod helpers;
mod sections;

use crate::app::state::{App, Focus};
use crossterm::event::KeyCode;

/// Route a key press. Global keys first, then the focused panel's handler.
/// Every call is followed by a full re-derivation and redraw, so handlers
/// only mutate widget state.
pub fn handle_input(app: &mut App, key: KeyCode) {
    if app.show_help {
        app.show_help = false;
        return;
    }

    match key {
        KeyCode::Tab => {
            app.focus = app.focus.next();
            return;
        }
        KeyCode::BackTab => {
            app.focus = app.focus.prev();
            return;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            return;
        }
        _ => {}
    }

    // The city panel owns character input for its search box; everywhere
    // else 'q' quits and 'r' clears the filters.
    if app.focus != Focus::Cities {
        match key {
            KeyCode::Char('q') => {
                app.running = false;
                return;
            }
            KeyCode::Char('r') => {
                app.reset_filters();
                return;
            }
            KeyCode::Esc => {
                app.status_message.clear();
                return;
            }
            _ => {}
        }
    }

    match app.focus {
        Focus::States => sections::handle_states_input(app, key),
        Focus::Cities => sections::handle_cities_input(app, key),
        Focus::Category => sections::handle_category_input(app, key),
        Focus::Restaurants => sections::handle_restaurants_input(app, key),
        Focus::Map => sections::handle_map_input(app, key),
    }
}

#[cfg(test)]
mod tests {
    use super::handle_input;
    use crate::app::state::{App, Focus};
    use crate::data::models::tests::sample_dataset;
    use crossterm::event::KeyCode;

    fn app_with_sample() -> App {
        App::new(sample_dataset())
    }

    #[test]
    fn tab_cycles_focus_and_q_quits() {
        let mut app = app_with_sample();
        handle_input(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Cities);
        handle_input(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, Focus::States);

        handle_input(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn space_toggles_the_state_under_the_cursor() {
        let mut app = app_with_sample();
        handle_input(&mut app, KeyCode::Char(' '));
        assert!(app.is_state_selected("MA"));
        handle_input(&mut app, KeyCode::Char(' '));
        assert!(!app.is_state_selected("MA"));
    }

    #[test]
    fn typing_in_the_city_panel_feeds_the_search_box() {
        let mut app = app_with_sample();
        handle_input(&mut app, KeyCode::Char(' '));
        app.focus = Focus::Cities;

        handle_input(&mut app, KeyCode::Char('q'));
        assert!(app.running, "characters must not trigger global quit here");
        assert_eq!(app.city_query, "q");

        handle_input(&mut app, KeyCode::Backspace);
        assert!(app.city_query.is_empty());
    }

    #[test]
    fn help_popup_swallows_the_next_key() {
        let mut app = app_with_sample();
        handle_input(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        handle_input(&mut app, KeyCode::Char('q'));
        assert!(!app.show_help && app.running);
    }

    #[test]
    fn any_key_closes_help_before_acting() {
        let mut app = app_with_sample();
        app.show_help = true;
        handle_input(&mut app, KeyCode::Down);
        assert!(!app.show_help);
        assert_eq!(app.state_cursor, 0);
    }
}
