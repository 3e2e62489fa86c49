use crate::data::models::{Dataset, Restaurant};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open dataset {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse dataset: {0}")]
    Csv(#[from] csv::Error),
}

/// Read the restaurant CSV at `path`. Any failure here is fatal to startup;
/// there is no partial dashboard without a dataset.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_dataset(file)
}

/// Deserialize restaurant rows from any reader. Empty coordinate fields
/// become `None`; any other malformed field propagates the csv error.
pub fn read_dataset<R: Read>(reader: R) -> Result<Dataset, LoadError> {
    let mut csv_reader = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut records = Vec::new();
    for row in csv_reader.deserialize() {
        let record: Restaurant = row?;
        records.push(record);
    }

    Ok(Dataset::new(records))
}

#[cfg(test)]
mod tests {
    use super::{load_dataset, read_dataset, LoadError};
    use crate::domain::Category;

    const SAMPLE: &str = "\
name,address,city,province,categories,latitude,longitude
McRonald's,1 Main St,Boston,MA,Burger Joint,42.35,-71.06
Taco Castle,2 Elm St,Austin,TX,Taco Stand,30.27,-97.74
Mystery Diner,3 Oak St,Salem,OR,Sandwiches,,
";

    #[test]
    fn parses_rows_and_derives_categories() {
        let data = read_dataset(SAMPLE.as_bytes()).unwrap();
        assert_eq!(data.len(), 3);
        assert_eq!(data.category(0), Some(Category::AmericanBurger));
        assert_eq!(data.category(1), Some(Category::MexicanTaco));
        assert_eq!(data.category(2), Some(Category::Uncategorized));
    }

    #[test]
    fn empty_coordinates_load_as_none() {
        let data = read_dataset(SAMPLE.as_bytes()).unwrap();
        let diner = data.record(2).unwrap();
        assert_eq!(diner.latitude, None);
        assert_eq!(diner.longitude, None);
        assert!(diner.location().is_none());
        assert!(data.record(0).unwrap().location().is_some());
    }

    #[test]
    fn missing_columns_fail_to_parse() {
        let headerless = "name,address\nMcRonald's,1 Main St\n";
        assert!(matches!(
            read_dataset(headerless.as_bytes()),
            Err(LoadError::Csv(_))
        ));
    }

    #[test]
    fn missing_file_reports_the_path() {
        let error = load_dataset("/nonexistent/fast_food_usa.csv").unwrap_err();
        assert!(matches!(error, LoadError::Io { .. }));
        assert!(error.to_string().contains("fast_food_usa.csv"));
    }
}
