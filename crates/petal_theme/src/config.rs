//! TOML theme configuration
//!
//! ```toml
//! scheme = "dark"
//!
//! [animation]
//! scale = 0.5
//!
//! [colors]
//! primary_container = "#FFB4AB"
//! backdrop = "#000000CC"
//! ```
//!
//! Every section is optional. Color keys are the snake_case token names.

use crate::error::{Result, ThemeError};
use crate::theme::{ColorScheme, Theme};
use crate::tokens::ColorToken;
use petal_core::Color;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Theme configuration file contents
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Optional display name for the resulting theme
    pub name: Option<String>,
    pub scheme: ColorScheme,
    pub animation: AnimationConfig,
    /// Hex color overrides keyed by token name
    pub colors: BTreeMap<String, String>,
}

/// `[animation]` section
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationConfig {
    pub scale: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl ThemeConfig {
    /// Read and parse a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded theme config");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Build the theme this config describes
    pub fn to_theme(&self) -> Result<Theme> {
        let mut theme = Theme::for_scheme(self.scheme).with_animation_scale(self.animation.scale)?;
        if let Some(name) = &self.name {
            theme = theme.with_name(name.clone());
        }

        for (key, value) in &self.colors {
            let token =
                ColorToken::from_key(key).ok_or_else(|| ThemeError::UnknownToken(key.clone()))?;
            let color = Color::parse_hex(value).ok_or_else(|| ThemeError::InvalidColor {
                token: token.key().to_string(),
                value: value.clone(),
            })?;
            theme = theme.with_color(token, color);
        }

        Ok(theme)
    }
}
