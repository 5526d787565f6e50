//! User configuration
//!
//! Read from `~/.config/fieldvalues/config.toml`. A missing file means
//! defaults; a malformed one is reported instead of silently ignored.

mod loader;
mod types;

pub use loader::{config_path, load_config, load_config_from_path, parse_config_toml};
pub use types::{Config, DEFAULT_MAX_RESULTS, FilterConfig, FuzzyAlgorithm, OptionsConfig};
