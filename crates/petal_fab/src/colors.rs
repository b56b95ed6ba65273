//! FAB color resolution

use petal_core::Color;
use petal_theme::{ColorToken, Theme};
use serde::{Deserialize, Serialize};

/// Ripple / state-layer opacity over the foreground color
const RIPPLE_ALPHA: f32 = 0.12;
const DISABLED_CONTAINER_ALPHA: f32 = 0.12;
const DISABLED_CONTENT_ALPHA: f32 = 0.38;

/// FAB color variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FabVariant {
    #[default]
    Primary,
    Secondary,
    Tertiary,
    /// Elevated surface with primary-colored content
    Surface,
}

impl FabVariant {
    fn tokens(self) -> (ColorToken, ColorToken) {
        match self {
            FabVariant::Primary => (ColorToken::PrimaryContainer, ColorToken::OnPrimaryContainer),
            FabVariant::Secondary => (
                ColorToken::SecondaryContainer,
                ColorToken::OnSecondaryContainer,
            ),
            FabVariant::Tertiary => (
                ColorToken::TertiaryContainer,
                ColorToken::OnTertiaryContainer,
            ),
            FabVariant::Surface => (ColorToken::SurfaceElevated, ColorToken::Primary),
        }
    }
}

/// Explicit colors that take precedence over the theme
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColorOverrides {
    /// Icon / label color
    pub color: Option<Color>,
    pub background_color: Option<Color>,
}

/// Resolved colors of one FAB surface
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FabColors {
    pub background: Color,
    pub foreground: Color,
    pub ripple: Color,
}

impl FabColors {
    /// Resolve colors for a variant
    ///
    /// A disabled FAB ignores overrides and uses the disabled state colors.
    pub fn resolve(
        theme: &Theme,
        variant: FabVariant,
        disabled: bool,
        overrides: ColorOverrides,
    ) -> Self {
        let (background, foreground) = if disabled {
            let on_surface = theme.color(ColorToken::OnSurface);
            (
                on_surface.with_alpha(DISABLED_CONTAINER_ALPHA),
                on_surface.with_alpha(DISABLED_CONTENT_ALPHA),
            )
        } else {
            let (container, content) = variant.tokens();
            (
                overrides
                    .background_color
                    .unwrap_or_else(|| theme.color(container)),
                overrides.color.unwrap_or_else(|| theme.color(content)),
            )
        };

        Self {
            background,
            foreground,
            ripple: foreground.with_alpha(RIPPLE_ALPHA),
        }
    }
}
