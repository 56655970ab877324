mod config;

pub use config::{Config, ExportConfig};

use std::path::PathBuf;

/// Returns `~/.config/stresscast/`. Nothing is created on disk.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("stresscast"))
}
