pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod models;

pub use aggregate::{CategoryCounts, TopCategory};
pub use filter::{filter_restaurants, FilterError, FilterSelection, FilteredView};
pub use loader::{load_dataset, read_dataset, LoadError};
pub use models::{Dataset, Restaurant};
