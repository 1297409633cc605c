pub mod config;
pub mod paths;

pub use config::{Config, HttpConfig, ProfileConfig, StorageConfig};
pub use paths::{storage_base_path, PathManager};
