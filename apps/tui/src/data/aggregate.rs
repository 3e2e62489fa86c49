use crate::data::models::Dataset;
use crate::domain::Category;
use std::collections::BTreeMap;

/// The wide count table: one row per state, one column per canonical
/// category, zero-filled. Feeds both the bar chart and the top-category
/// table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    states: Vec<String>,
    cells: Vec<[u64; Category::COUNT]>,
}

/// Per-state winner of the category argmax, `Uncategorized` excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopCategory {
    pub state: String,
    pub category: Category,
    pub count: u64,
}

impl CategoryCounts {
    /// Group the dataset by (state, category) and count. An empty state
    /// filter covers the whole dataset, matching the unfiltered chart view.
    pub fn count_by_state(data: &Dataset, states: &[String]) -> Self {
        let mut grouped: BTreeMap<String, [u64; Category::COUNT]> = BTreeMap::new();

        for (restaurant, category) in data.iter() {
            if !states.is_empty() && !states.iter().any(|state| state == &restaurant.province) {
                continue;
            }
            let row = grouped
                .entry(restaurant.province.clone())
                .or_insert([0; Category::COUNT]);
            row[category.index()] += 1;
        }

        let mut counts = Self::default();
        for (state, cells) in grouped {
            counts.states.push(state);
            counts.cells.push(cells);
        }
        counts
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn states(&self) -> &[String] {
        &self.states
    }

    /// Rows in state order, each cell array in `Category::ALL` column order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[u64; Category::COUNT])> + '_ {
        self.states
            .iter()
            .map(String::as_str)
            .zip(self.cells.iter())
    }

    pub fn cell(&self, state: &str, category: Category) -> u64 {
        self.states
            .iter()
            .position(|candidate| candidate == state)
            .and_then(|row| self.cells.get(row))
            .map_or(0, |cells| cells[category.index()])
    }

    /// Largest single cell, used to scale the chart axis.
    pub fn max_cell(&self) -> u64 {
        self.cells
            .iter()
            .flat_map(|cells| cells.iter().copied())
            .max()
            .unwrap_or(0)
    }

    /// First-occurrence argmax per state over the declared column order,
    /// skipping the `Uncategorized` column entirely. Ties resolve to the
    /// earlier column; a state with no categorized records reports the
    /// first column with a zero count, exactly like an argmax over the
    /// zero-filled row.
    pub fn top_categories(&self) -> Vec<TopCategory> {
        self.rows()
            .map(|(state, cells)| {
                let mut best = Category::ALL[0];
                let mut best_count = cells[best.index()];
                for category in Category::ALL {
                    if category == Category::Uncategorized {
                        continue;
                    }
                    let count = cells[category.index()];
                    if count > best_count {
                        best = category;
                        best_count = count;
                    }
                }
                TopCategory {
                    state: state.to_string(),
                    category: best,
                    count: best_count,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::CategoryCounts;
    use crate::data::models::tests::{restaurant, sample_dataset};
    use crate::data::models::Dataset;
    use crate::domain::Category;

    #[test]
    fn cells_are_zero_filled_for_absent_combinations() {
        let data = sample_dataset();
        let counts = CategoryCounts::count_by_state(&data, &[]);

        assert_eq!(counts.states(), ["MA".to_string(), "OR".to_string()]);
        assert_eq!(counts.cell("MA", Category::ItalianPizza), 2);
        assert_eq!(counts.cell("MA", Category::MexicanTaco), 1);
        assert_eq!(counts.cell("MA", Category::AmericanBurger), 0);
        assert_eq!(counts.cell("OR", Category::IceCream), 0);
        assert_eq!(counts.cell("ZZ", Category::Asian), 0);
    }

    #[test]
    fn state_filter_narrows_the_rows() {
        let data = sample_dataset();
        let counts = CategoryCounts::count_by_state(&data, &["OR".to_string()]);
        assert_eq!(counts.states(), ["OR".to_string()]);
        assert_eq!(counts.cell("OR", Category::AmericanBurger), 1);
    }

    #[test]
    fn top_category_picks_the_per_state_maximum() {
        let data = sample_dataset();
        let counts = CategoryCounts::count_by_state(&data, &[]);
        let top = counts.top_categories();

        assert_eq!(top.len(), 2);
        assert_eq!(top[0].state, "MA");
        assert_eq!(top[0].category, Category::ItalianPizza);
        assert_eq!(top[0].count, 2);
        assert_eq!(top[1].state, "OR");
        assert_eq!(top[1].category, Category::AmericanBurger);
    }

    #[test]
    fn top_category_ignores_uncategorized_even_when_it_dominates() {
        let data = Dataset::new(vec![
            restaurant("S1", "Salem", "OR", "Sandwiches"),
            restaurant("S2", "Salem", "OR", "Sandwiches"),
            restaurant("S3", "Salem", "OR", "Sushi Burger"),
        ]);
        let counts = CategoryCounts::count_by_state(&data, &[]);
        let top = counts.top_categories();

        assert_eq!(counts.cell("OR", Category::Uncategorized), 2);
        assert_eq!(top[0].category, Category::AmericanBurger);
        assert_eq!(top[0].count, 1);
    }

    #[test]
    fn ties_resolve_to_the_earlier_column() {
        let data = Dataset::new(vec![
            restaurant("P", "Boise", "ID", "Pizza Place"),
            restaurant("T", "Boise", "ID", "Taco Stand"),
        ]);
        let counts = CategoryCounts::count_by_state(&data, &[]);
        let top = counts.top_categories();

        // Mexican/Taco is declared before Italian/Pizza in column order.
        assert_eq!(top[0].category, Category::MexicanTaco);
        assert_eq!(top[0].count, 1);
    }

    #[test]
    fn all_zero_row_reports_the_first_column() {
        let data = Dataset::new(vec![restaurant("S", "Salem", "OR", "Sandwiches")]);
        let counts = CategoryCounts::count_by_state(&data, &[]);
        let top = counts.top_categories();

        assert_eq!(top[0].category, Category::Asian);
        assert_eq!(top[0].count, 0);
    }
}
