use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_DATA_PATH: &str = "./data/fast_food_usa.csv";

/// Initializes the application configuration and resolves the dataset path.
/// CLI overrides land in the environment before this runs, so the
/// precedence is flag > environment > `.env` file > default.
pub fn init_app_config() -> PathBuf {
    // Load environment variables from .env file
    dotenv().ok();

    get_data_path()
}

/// Gets the path of the restaurant CSV
pub fn get_data_path() -> PathBuf {
    env::var("DATA_CSV").map_or_else(|_| PathBuf::from(DEFAULT_DATA_PATH), PathBuf::from)
}
