use crate::data::models::Dataset;
use crate::domain::Category;
use thiserror::Error;

/// The transient widget-owned selection, rebuilt from UI state on every
/// render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub states: Vec<String>,
    pub cities: Vec<String>,
    pub category: Option<Category>,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("selected city {city:?} is outside the selected states")]
    CityOutOfScope { city: String },
}

/// Rows matching the city/category/state selection, with the formatted
/// address derived per match. `rows` are indices into the dataset and
/// `addresses` is the parallel display column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredView {
    pub rows: Vec<usize>,
    pub addresses: Vec<String>,
}

impl FilteredView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// AND of city membership, category equality, and state membership.
/// An empty city set or unset category short-circuits to the empty view;
/// that is the designed default, not a failure. The one reportable failure
/// is a selected city that no selected state can produce, which means the
/// widget state and the dataset disagree.
pub fn filter_restaurants(
    data: &Dataset,
    selection: &FilterSelection,
) -> Result<FilteredView, FilterError> {
    let Some(category) = selection.category else {
        return Ok(FilteredView::default());
    };
    if selection.cities.is_empty() {
        return Ok(FilteredView::default());
    }

    let in_scope = data.cities_in(&selection.states);
    if let Some(city) = selection
        .cities
        .iter()
        .find(|&city| !in_scope.contains(city))
    {
        return Err(FilterError::CityOutOfScope { city: city.clone() });
    }

    let mut view = FilteredView::default();
    for (index, (restaurant, derived)) in data.iter().enumerate() {
        if derived == category
            && selection.cities.iter().any(|city| city == &restaurant.city)
            && selection
                .states
                .iter()
                .any(|state| state == &restaurant.province)
        {
            view.rows.push(index);
            view.addresses.push(restaurant.formatted_address());
        }
    }

    Ok(view)
}

#[cfg(test)]
mod tests {
    use super::{filter_restaurants, FilterError, FilterSelection};
    use crate::data::models::tests::sample_dataset;
    use crate::domain::Category;

    fn selection(states: &[&str], cities: &[&str], category: Option<Category>) -> FilterSelection {
        FilterSelection {
            states: states.iter().map(ToString::to_string).collect(),
            cities: cities.iter().map(ToString::to_string).collect(),
            category,
        }
    }

    #[test]
    fn empty_city_selection_short_circuits_to_empty() {
        let data = sample_dataset();
        let view = filter_restaurants(
            &data,
            &selection(&["MA"], &[], Some(Category::ItalianPizza)),
        )
        .unwrap();
        assert!(view.is_empty());
        assert!(view.addresses.is_empty());
    }

    #[test]
    fn unset_category_short_circuits_to_empty() {
        let data = sample_dataset();
        let view = filter_restaurants(&data, &selection(&["MA"], &["Boston"], None)).unwrap();
        assert!(view.is_empty());
    }

    #[test]
    fn matches_require_city_and_category_and_state() {
        let data = sample_dataset();
        let view = filter_restaurants(
            &data,
            &selection(&["MA"], &["Boston"], Some(Category::ItalianPizza)),
        )
        .unwrap();

        assert_eq!(view.len(), 1);
        assert_eq!(view.rows, vec![0]);
        assert_eq!(view.addresses, vec!["1 A St, Boston, MA".to_string()]);
    }

    #[test]
    fn city_outside_selected_states_is_an_error() {
        let data = sample_dataset();
        let error = filter_restaurants(
            &data,
            &selection(&["OR"], &["Boston"], Some(Category::ItalianPizza)),
        )
        .unwrap_err();
        assert_eq!(
            error,
            FilterError::CityOutOfScope {
                city: "Boston".to_string()
            }
        );
    }

    #[test]
    fn multiple_cities_widen_the_match() {
        let data = sample_dataset();
        let view = filter_restaurants(
            &data,
            &selection(&["MA"], &["Boston", "Cambridge"], Some(Category::ItalianPizza)),
        )
        .unwrap();
        assert_eq!(view.rows, vec![0, 2]);
    }
}
