use crate::app::plan::{build_plan, DashboardPlan};
use crate::data::{Dataset, FilterSelection};
use crate::domain::Category;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::collections::HashSet;

/// Which panel currently receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    States,
    Cities,
    Category,
    Restaurants,
    Map,
}

impl Focus {
    pub const fn next(self) -> Self {
        match self {
            Self::States => Self::Cities,
            Self::Cities => Self::Category,
            Self::Category => Self::Restaurants,
            Self::Restaurants => Self::Map,
            Self::Map => Self::States,
        }
    }

    pub const fn prev(self) -> Self {
        match self {
            Self::States => Self::Map,
            Self::Cities => Self::States,
            Self::Category => Self::Cities,
            Self::Restaurants => Self::Category,
            Self::Map => Self::Restaurants,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::States => "States",
            Self::Cities => "Cities",
            Self::Category => "Category",
            Self::Restaurants => "Restaurants",
            Self::Map => "Map",
        }
    }
}

/// All widget state for the dashboard. Selections are keyed by value, not
/// list position, so they survive the city list being rescoped when states
/// change.
#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub show_help: bool,
    pub status_message: String,
    pub focus: Focus,
    pub state_cursor: usize,
    pub city_cursor: usize,
    pub category_cursor: usize,
    pub restaurant_cursor: usize,
    pub map_cursor: usize,
    pub city_query: String,
    pub selected_category: Option<Category>,
    dataset: Dataset,
    all_states: Vec<String>,
    selected_states: HashSet<String>,
    selected_cities: HashSet<String>,
}

impl App {
    pub fn new(dataset: Dataset) -> Self {
        let all_states = dataset.states();
        Self {
            running: true,
            show_help: false,
            status_message: String::new(),
            focus: Focus::States,
            state_cursor: 0,
            city_cursor: 0,
            category_cursor: 0,
            restaurant_cursor: 0,
            map_cursor: 0,
            city_query: String::new(),
            selected_category: None,
            dataset,
            all_states,
            selected_states: HashSet::new(),
            selected_cities: HashSet::new(),
        }
    }

    pub const fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn states(&self) -> &[String] {
        &self.all_states
    }

    pub fn is_state_selected(&self, state: &str) -> bool {
        self.selected_states.contains(state)
    }

    pub fn is_city_selected(&self, city: &str) -> bool {
        self.selected_cities.contains(city)
    }

    pub fn selected_states_sorted(&self) -> Vec<String> {
        let mut states: Vec<String> = self.selected_states.iter().cloned().collect();
        states.sort();
        states
    }

    fn selected_cities_sorted(&self) -> Vec<String> {
        let mut cities: Vec<String> = self.selected_cities.iter().cloned().collect();
        cities.sort();
        cities
    }

    /// Cities offered by the sidebar: scoped to the selected states and
    /// narrowed by the fuzzy search query, alphabetical order preserved.
    pub fn visible_cities(&self) -> Vec<String> {
        let scoped = self.dataset.cities_in(&self.selected_states_sorted());
        if self.city_query.is_empty() {
            return scoped;
        }

        let matcher = SkimMatcherV2::default();
        scoped
            .into_iter()
            .filter(|city| matcher.fuzzy_match(city, &self.city_query).is_some())
            .collect()
    }

    pub fn toggle_state_under_cursor(&mut self) {
        let Some(state) = self.all_states.get(self.state_cursor).cloned() else {
            return;
        };
        if !self.selected_states.remove(&state) {
            self.selected_states.insert(state);
        }
        self.prune_cities();
        self.city_cursor = 0;
    }

    pub fn toggle_city_under_cursor(&mut self) {
        let Some(city) = self.visible_cities().get(self.city_cursor).cloned() else {
            return;
        };
        if !self.selected_cities.remove(&city) {
            self.selected_cities.insert(city);
        }
    }

    /// Single-select: picking the already-selected category clears it,
    /// which is the only way back to the "nothing chosen" default.
    pub fn choose_category_under_cursor(&mut self) {
        let Some(category) = Category::from_index(self.category_cursor) else {
            return;
        };
        if self.selected_category == Some(category) {
            self.selected_category = None;
        } else {
            self.selected_category = Some(category);
        }
    }

    pub fn push_city_query(&mut self, character: char) {
        self.city_query.push(character);
        self.city_cursor = 0;
    }

    pub fn pop_city_query(&mut self) {
        self.city_query.pop();
        self.city_cursor = 0;
    }

    pub fn clear_city_query(&mut self) {
        self.city_query.clear();
        self.city_cursor = 0;
    }

    /// Drop selected cities that fell out of scope when a state was
    /// deselected; the city list only ever offers cities of selected states.
    fn prune_cities(&mut self) {
        let scoped = self.dataset.cities_in(&self.selected_states_sorted());
        self.selected_cities.retain(|city| scoped.contains(city));
    }

    /// The transient selection handed to the filter engine, rebuilt from
    /// widget state on every pass.
    pub fn selection(&self) -> FilterSelection {
        FilterSelection {
            states: self.selected_states_sorted(),
            cities: self.selected_cities_sorted(),
            category: self.selected_category,
        }
    }

    /// Re-derive everything the views consume. The dataset is small and
    /// rescanned in full on every interaction.
    pub fn plan(&self) -> DashboardPlan {
        build_plan(&self.dataset, &self.selection())
    }

    pub fn reset_filters(&mut self) {
        self.selected_states.clear();
        self.selected_cities.clear();
        self.selected_category = None;
        self.state_cursor = 0;
        self.city_cursor = 0;
        self.category_cursor = 0;
        self.restaurant_cursor = 0;
        self.map_cursor = 0;
        self.city_query.clear();
        self.status_message = "Filters cleared".to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::{App, Focus};
    use crate::data::models::tests::sample_dataset;
    use crate::domain::Category;

    fn app_with_sample() -> App {
        App::new(sample_dataset())
    }

    fn select_state(app: &mut App, state: &str) {
        let position = app
            .states()
            .iter()
            .position(|candidate| candidate == state)
            .unwrap();
        app.state_cursor = position;
        app.toggle_state_under_cursor();
    }

    #[test]
    fn focus_cycle_visits_every_panel() {
        let mut focus = Focus::States;
        for _ in 0..5 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::States);
        assert_eq!(Focus::States.prev(), Focus::Map);
    }

    #[test]
    fn toggling_a_state_twice_deselects_it() {
        let mut app = app_with_sample();
        select_state(&mut app, "MA");
        assert!(app.is_state_selected("MA"));
        app.toggle_state_under_cursor();
        assert!(!app.is_state_selected("MA"));
    }

    #[test]
    fn deselecting_a_state_prunes_out_of_scope_cities() {
        let mut app = app_with_sample();
        select_state(&mut app, "MA");
        select_state(&mut app, "OR");

        app.city_cursor = app
            .visible_cities()
            .iter()
            .position(|city| city == "Boston")
            .unwrap();
        app.toggle_city_under_cursor();
        assert!(app.is_city_selected("Boston"));

        // Dropping MA leaves Boston out of scope.
        select_state(&mut app, "MA");
        assert!(!app.is_city_selected("Boston"));
        assert_eq!(app.visible_cities(), vec!["Portland".to_string()]);
    }

    #[test]
    fn city_query_narrows_the_visible_list() {
        let mut app = app_with_sample();
        select_state(&mut app, "MA");
        assert_eq!(app.visible_cities().len(), 2);

        for character in "camb".chars() {
            app.push_city_query(character);
        }
        assert_eq!(app.visible_cities(), vec!["Cambridge".to_string()]);

        app.clear_city_query();
        assert_eq!(app.visible_cities().len(), 2);
    }

    #[test]
    fn choosing_the_same_category_again_clears_it() {
        let mut app = app_with_sample();
        app.category_cursor = Category::ItalianPizza.index();
        app.choose_category_under_cursor();
        assert_eq!(app.selected_category, Some(Category::ItalianPizza));
        app.choose_category_under_cursor();
        assert_eq!(app.selected_category, None);
    }

    #[test]
    fn selection_reflects_widget_state_in_sorted_order() {
        let mut app = app_with_sample();
        select_state(&mut app, "OR");
        select_state(&mut app, "MA");
        app.category_cursor = Category::ItalianPizza.index();
        app.choose_category_under_cursor();

        let selection = app.selection();
        assert_eq!(selection.states, vec!["MA".to_string(), "OR".to_string()]);
        assert_eq!(selection.category, Some(Category::ItalianPizza));
    }

    #[test]
    fn end_to_end_boston_pizza_scenario() {
        let mut app = app_with_sample();
        select_state(&mut app, "MA");
        app.city_cursor = app
            .visible_cities()
            .iter()
            .position(|city| city == "Boston")
            .unwrap();
        app.toggle_city_under_cursor();
        app.category_cursor = Category::ItalianPizza.index();
        app.choose_category_under_cursor();

        let plan = app.plan();
        let view = plan.filtered.unwrap();
        assert_eq!(view.rows, vec![0]);
        assert_eq!(view.addresses, vec!["1 A St, Boston, MA".to_string()]);
    }
}
