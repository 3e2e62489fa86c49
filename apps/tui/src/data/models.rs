use crate::domain::Category;
use serde::Deserialize;
use std::collections::BTreeSet;

/// One row of the source CSV. Coordinates may be absent; such records are
/// kept everywhere except map rendering.
#[derive(Debug, Clone, Deserialize)]
pub struct Restaurant {
    pub name: String,
    pub address: String,
    pub city: String,
    pub province: String,
    pub categories: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Restaurant {
    /// Display address in the `"{address}, {city}, {province}"` shape.
    pub fn formatted_address(&self) -> String {
        format!("{}, {}, {}", self.address, self.city, self.province)
    }

    /// `(latitude, longitude)` when both coordinates are present.
    pub fn location(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some((latitude, longitude)),
            _ => None,
        }
    }
}

/// The loaded dataset. Records are immutable for the process lifetime; the
/// normalized category is a derived column kept in a parallel vec rather
/// than an edit of the records themselves.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Restaurant>,
    categories: Vec<Category>,
}

impl Dataset {
    pub fn new(records: Vec<Restaurant>) -> Self {
        let categories = records
            .iter()
            .map(|record| Category::normalize(&record.categories))
            .collect();
        Self {
            records,
            categories,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Restaurant] {
        &self.records
    }

    pub fn record(&self, index: usize) -> Option<&Restaurant> {
        self.records.get(index)
    }

    pub fn category(&self, index: usize) -> Option<Category> {
        self.categories.get(index).copied()
    }

    /// Records paired with their derived category, in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&Restaurant, Category)> + '_ {
        self.records.iter().zip(self.categories.iter().copied())
    }

    /// Sorted distinct province codes.
    pub fn states(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|record| record.province.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Sorted distinct cities within the given states. Empty input means no
    /// states are selected, which scopes to no cities.
    pub fn cities_in(&self, states: &[String]) -> Vec<String> {
        self.records
            .iter()
            .filter(|record| states.iter().any(|state| state == &record.province))
            .map(|record| record.city.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
