//! Process-wide current theme
//!
//! Components normally receive their theme explicitly; `ThemeState` serves
//! hosts that configure one theme at startup and read it everywhere.

use crate::theme::Theme;
use parking_lot::RwLock;
use std::sync::{Arc, OnceLock};

static THEME_STATE: OnceLock<RwLock<Arc<Theme>>> = OnceLock::new();

fn state() -> &'static RwLock<Arc<Theme>> {
    THEME_STATE.get_or_init(|| RwLock::new(Arc::new(Theme::default())))
}

/// Global theme access
pub struct ThemeState;

impl ThemeState {
    /// Current theme (the light theme until one is set)
    pub fn get() -> Arc<Theme> {
        Arc::clone(&state().read())
    }

    /// Replace the current theme
    pub fn set(theme: Theme) {
        tracing::debug!(name = theme.name(), "theme changed");
        *state().write() = Arc::new(theme);
    }

    /// Current animation scale
    pub fn animation_scale() -> f32 {
        state().read().animation_scale()
    }
}
