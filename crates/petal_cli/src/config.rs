//! Theme configuration lookup
//!
//! The theme comes from `--config <path>` when given, otherwise from
//! `petal.toml` in the current directory when present, otherwise the
//! built-in light theme.

use anyhow::{Context, Result};
use petal_theme::{Theme, ThemeConfig};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default config file name looked up in the working directory
pub const CONFIG_FILE: &str = "petal.toml";

/// Resolve the theme for this run
pub fn load_theme(explicit: Option<&Path>) -> Result<Theme> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let default = PathBuf::from(CONFIG_FILE);
            default.exists().then_some(default)
        }
    };

    let Some(path) = path else {
        debug!("no {} found, using the light theme", CONFIG_FILE);
        return Ok(Theme::light());
    };

    let config = ThemeConfig::load(&path)
        .with_context(|| format!("Failed to load theme config {}", path.display()))?;
    let theme = config
        .to_theme()
        .with_context(|| format!("Invalid theme in {}", path.display()))?;

    info!(
        "Using theme '{}' from {} (animation scale {})",
        theme.name(),
        path.display(),
        theme.animation_scale()
    );
    Ok(theme)
}
