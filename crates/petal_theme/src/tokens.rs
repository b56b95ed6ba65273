//! Design tokens
//!
//! Color roles follow the Material container / on-container pairing used by
//! floating action buttons: every container color has a matching foreground
//! that keeps contrast on top of it.

use petal_core::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorToken {
    Primary,
    OnPrimary,
    PrimaryContainer,
    OnPrimaryContainer,
    Secondary,
    OnSecondary,
    SecondaryContainer,
    OnSecondaryContainer,
    Tertiary,
    OnTertiary,
    TertiaryContainer,
    OnTertiaryContainer,
    Background,
    OnBackground,
    Surface,
    OnSurface,
    SurfaceVariant,
    OnSurfaceVariant,
    /// Surface tinted for elevation level 3
    SurfaceElevated,
    Outline,
    Shadow,
    /// Scrim drawn behind an open FAB group
    Backdrop,
}

impl ColorToken {
    pub const ALL: [ColorToken; 22] = [
        ColorToken::Primary,
        ColorToken::OnPrimary,
        ColorToken::PrimaryContainer,
        ColorToken::OnPrimaryContainer,
        ColorToken::Secondary,
        ColorToken::OnSecondary,
        ColorToken::SecondaryContainer,
        ColorToken::OnSecondaryContainer,
        ColorToken::Tertiary,
        ColorToken::OnTertiary,
        ColorToken::TertiaryContainer,
        ColorToken::OnTertiaryContainer,
        ColorToken::Background,
        ColorToken::OnBackground,
        ColorToken::Surface,
        ColorToken::OnSurface,
        ColorToken::SurfaceVariant,
        ColorToken::OnSurfaceVariant,
        ColorToken::SurfaceElevated,
        ColorToken::Outline,
        ColorToken::Shadow,
        ColorToken::Backdrop,
    ];

    /// Key used in configuration files
    pub fn key(self) -> &'static str {
        match self {
            ColorToken::Primary => "primary",
            ColorToken::OnPrimary => "on_primary",
            ColorToken::PrimaryContainer => "primary_container",
            ColorToken::OnPrimaryContainer => "on_primary_container",
            ColorToken::Secondary => "secondary",
            ColorToken::OnSecondary => "on_secondary",
            ColorToken::SecondaryContainer => "secondary_container",
            ColorToken::OnSecondaryContainer => "on_secondary_container",
            ColorToken::Tertiary => "tertiary",
            ColorToken::OnTertiary => "on_tertiary",
            ColorToken::TertiaryContainer => "tertiary_container",
            ColorToken::OnTertiaryContainer => "on_tertiary_container",
            ColorToken::Background => "background",
            ColorToken::OnBackground => "on_background",
            ColorToken::Surface => "surface",
            ColorToken::OnSurface => "on_surface",
            ColorToken::SurfaceVariant => "surface_variant",
            ColorToken::OnSurfaceVariant => "on_surface_variant",
            ColorToken::SurfaceElevated => "surface_elevated",
            ColorToken::Outline => "outline",
            ColorToken::Shadow => "shadow",
            ColorToken::Backdrop => "backdrop",
        }
    }

    /// Token for a configuration key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|token| token.key() == key)
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Complete set of color tokens for a theme
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorTokens {
    pub primary: Color,
    pub on_primary: Color,
    pub primary_container: Color,
    pub on_primary_container: Color,
    pub secondary: Color,
    pub on_secondary: Color,
    pub secondary_container: Color,
    pub on_secondary_container: Color,
    pub tertiary: Color,
    pub on_tertiary: Color,
    pub tertiary_container: Color,
    pub on_tertiary_container: Color,
    pub background: Color,
    pub on_background: Color,
    pub surface: Color,
    pub on_surface: Color,
    pub surface_variant: Color,
    pub on_surface_variant: Color,
    pub surface_elevated: Color,
    pub outline: Color,
    pub shadow: Color,
    pub backdrop: Color,
}

impl ColorTokens {
    /// Baseline light palette
    pub fn light() -> Self {
        Self {
            primary: Color::from_hex(0x6750A4),
            on_primary: Color::from_hex(0xFFFFFF),
            primary_container: Color::from_hex(0xEADDFF),
            on_primary_container: Color::from_hex(0x21005D),
            secondary: Color::from_hex(0x625B71),
            on_secondary: Color::from_hex(0xFFFFFF),
            secondary_container: Color::from_hex(0xE8DEF8),
            on_secondary_container: Color::from_hex(0x1D192B),
            tertiary: Color::from_hex(0x7D5260),
            on_tertiary: Color::from_hex(0xFFFFFF),
            tertiary_container: Color::from_hex(0xFFD8E4),
            on_tertiary_container: Color::from_hex(0x31111D),
            background: Color::from_hex(0xFFFBFE),
            on_background: Color::from_hex(0x1C1B1F),
            surface: Color::from_hex(0xFFFBFE),
            on_surface: Color::from_hex(0x1C1B1F),
            surface_variant: Color::from_hex(0xE7E0EC),
            on_surface_variant: Color::from_hex(0x49454F),
            surface_elevated: Color::from_hex(0xEEE8F4),
            outline: Color::from_hex(0x79747E),
            shadow: Color::BLACK,
            backdrop: Color::from_hex(0xFFFBFE).with_alpha(0.95),
        }
    }

    /// Baseline dark palette
    pub fn dark() -> Self {
        Self {
            primary: Color::from_hex(0xD0BCFF),
            on_primary: Color::from_hex(0x381E72),
            primary_container: Color::from_hex(0x4F378B),
            on_primary_container: Color::from_hex(0xEADDFF),
            secondary: Color::from_hex(0xCCC2DC),
            on_secondary: Color::from_hex(0x332D41),
            secondary_container: Color::from_hex(0x4A4458),
            on_secondary_container: Color::from_hex(0xE8DEF8),
            tertiary: Color::from_hex(0xEFB8C8),
            on_tertiary: Color::from_hex(0x492532),
            tertiary_container: Color::from_hex(0x633B48),
            on_tertiary_container: Color::from_hex(0xFFD8E4),
            background: Color::from_hex(0x1C1B1F),
            on_background: Color::from_hex(0xE6E1E5),
            surface: Color::from_hex(0x1C1B1F),
            on_surface: Color::from_hex(0xE6E1E5),
            surface_variant: Color::from_hex(0x49454F),
            on_surface_variant: Color::from_hex(0xCAC4D0),
            surface_elevated: Color::from_hex(0x2B2930),
            outline: Color::from_hex(0x938F99),
            shadow: Color::BLACK,
            backdrop: Color::from_hex(0x1C1B1F).with_alpha(0.95),
        }
    }

    /// Get a color by token
    pub fn get(&self, token: ColorToken) -> Color {
        *self.slot(token)
    }

    /// Replace a color by token
    pub fn set(&mut self, token: ColorToken, color: Color) {
        *self.slot_mut(token) = color;
    }

    fn slot(&self, token: ColorToken) -> &Color {
        match token {
            ColorToken::Primary => &self.primary,
            ColorToken::OnPrimary => &self.on_primary,
            ColorToken::PrimaryContainer => &self.primary_container,
            ColorToken::OnPrimaryContainer => &self.on_primary_container,
            ColorToken::Secondary => &self.secondary,
            ColorToken::OnSecondary => &self.on_secondary,
            ColorToken::SecondaryContainer => &self.secondary_container,
            ColorToken::OnSecondaryContainer => &self.on_secondary_container,
            ColorToken::Tertiary => &self.tertiary,
            ColorToken::OnTertiary => &self.on_tertiary,
            ColorToken::TertiaryContainer => &self.tertiary_container,
            ColorToken::OnTertiaryContainer => &self.on_tertiary_container,
            ColorToken::Background => &self.background,
            ColorToken::OnBackground => &self.on_background,
            ColorToken::Surface => &self.surface,
            ColorToken::OnSurface => &self.on_surface,
            ColorToken::SurfaceVariant => &self.surface_variant,
            ColorToken::OnSurfaceVariant => &self.on_surface_variant,
            ColorToken::SurfaceElevated => &self.surface_elevated,
            ColorToken::Outline => &self.outline,
            ColorToken::Shadow => &self.shadow,
            ColorToken::Backdrop => &self.backdrop,
        }
    }

    fn slot_mut(&mut self, token: ColorToken) -> &mut Color {
        match token {
            ColorToken::Primary => &mut self.primary,
            ColorToken::OnPrimary => &mut self.on_primary,
            ColorToken::PrimaryContainer => &mut self.primary_container,
            ColorToken::OnPrimaryContainer => &mut self.on_primary_container,
            ColorToken::Secondary => &mut self.secondary,
            ColorToken::OnSecondary => &mut self.on_secondary,
            ColorToken::SecondaryContainer => &mut self.secondary_container,
            ColorToken::OnSecondaryContainer => &mut self.on_secondary_container,
            ColorToken::Tertiary => &mut self.tertiary,
            ColorToken::OnTertiary => &mut self.on_tertiary,
            ColorToken::TertiaryContainer => &mut self.tertiary_container,
            ColorToken::OnTertiaryContainer => &mut self.on_tertiary_container,
            ColorToken::Background => &mut self.background,
            ColorToken::OnBackground => &mut self.on_background,
            ColorToken::Surface => &mut self.surface,
            ColorToken::OnSurface => &mut self.on_surface,
            ColorToken::SurfaceVariant => &mut self.surface_variant,
            ColorToken::OnSurfaceVariant => &mut self.on_surface_variant,
            ColorToken::SurfaceElevated => &mut self.surface_elevated,
            ColorToken::Outline => &mut self.outline,
            ColorToken::Shadow => &mut self.shadow,
            ColorToken::Backdrop => &mut self.backdrop,
        }
    }
}

impl Default for ColorTokens {
    fn default() -> Self {
        Self::light()
    }
}

/// Animation tokens
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationTokens {
    /// Multiplier applied to every duration and delay; 0 disables motion
    pub scale: f32,
}

impl Default for AnimationTokens {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_roundtrip_through_slots() {
        let mut colors = ColorTokens::light();
        for token in ColorToken::ALL {
            colors.set(token, Color::from_hex(0x123456));
            assert_eq!(colors.get(token), Color::from_hex(0x123456), "{token}");
        }
    }

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<_> = ColorToken::ALL.iter().map(|t| t.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), ColorToken::ALL.len());

        assert_eq!(ColorToken::from_key("backdrop"), Some(ColorToken::Backdrop));
        assert_eq!(ColorToken::from_key("Backdrop"), None);
    }

    #[test]
    fn test_palettes_differ() {
        let light = ColorTokens::light();
        let dark = ColorTokens::dark();
        assert_ne!(light.primary_container, dark.primary_container);
        assert_eq!(light.shadow, dark.shadow);
    }
}
