//! Theme definition

use crate::error::{Result, ThemeError};
use crate::tokens::{AnimationTokens, ColorToken, ColorTokens};
use petal_core::Color;
use serde::{Deserialize, Serialize};

/// Light or dark color scheme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

/// A complete theme: colors plus animation tokens
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    name: String,
    scheme: ColorScheme,
    colors: ColorTokens,
    animation: AnimationTokens,
}

impl Theme {
    pub fn light() -> Self {
        Self::for_scheme(ColorScheme::Light)
    }

    pub fn dark() -> Self {
        Self::for_scheme(ColorScheme::Dark)
    }

    /// Baseline theme for a scheme
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        let (name, colors) = match scheme {
            ColorScheme::Light => ("petal-light", ColorTokens::light()),
            ColorScheme::Dark => ("petal-dark", ColorTokens::dark()),
        };
        Self {
            name: name.to_string(),
            scheme,
            colors,
            animation: AnimationTokens::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn colors(&self) -> &ColorTokens {
        &self.colors
    }

    pub fn animation(&self) -> &AnimationTokens {
        &self.animation
    }

    /// Get a color by token
    pub fn color(&self, token: ColorToken) -> Color {
        self.colors.get(token)
    }

    /// Override a single color
    pub fn with_color(mut self, token: ColorToken, color: Color) -> Self {
        self.colors.set(token, color);
        self
    }

    /// Duration multiplier applied to every component animation
    pub fn animation_scale(&self) -> f32 {
        self.animation.scale
    }

    /// Set the animation scale
    ///
    /// Fails for negative or non-finite values; `0.0` disables motion.
    pub fn with_animation_scale(mut self, scale: f32) -> Result<Self> {
        if !scale.is_finite() || scale < 0.0 {
            return Err(ThemeError::InvalidScale(scale));
        }
        self.animation.scale = scale;
        Ok(self)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
