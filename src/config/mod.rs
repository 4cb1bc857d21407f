mod filesystem;
mod loader;
mod model;
mod validation;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, parse_config};
pub use model::{Config, InputConfig, MultiplesConfig};
pub use validation::validate_config;
