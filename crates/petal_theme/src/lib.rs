//! Petal Theme
//!
//! Design tokens read by Petal components:
//!
//! - **Color Tokens**: Material-style roles (`primary_container`,
//!   `on_surface`, ...) addressed through [`ColorToken`]
//! - **Animation Tokens**: the global animation speed multiplier (`scale`)
//! - **Theme State**: a process-wide current theme for hosts that don't pass
//!   one explicitly
//! - **Configuration**: themes loaded from TOML
//!
//! # Example
//!
//! ```rust
//! use petal_theme::{ColorToken, Theme};
//!
//! let theme = Theme::dark();
//! let fab_background = theme.color(ColorToken::PrimaryContainer);
//! let open_duration = 250.0 * theme.animation_scale();
//! # let _ = (fab_background, open_duration);
//! ```

pub mod config;
pub mod error;
pub mod state;
pub mod theme;
pub mod tokens;

pub use config::{AnimationConfig, ThemeConfig};
pub use error::{Result, ThemeError};
pub use state::ThemeState;
pub use theme::{ColorScheme, Theme};
pub use tokens::{AnimationTokens, ColorToken, ColorTokens};
