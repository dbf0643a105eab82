mod configuration;

pub use configuration::{load_config, Config};
