//! Environment shared by FAB components

use petal_animation::SchedulerHandle;
use petal_core::LayoutDirection;
use petal_theme::{Theme, ThemeState};
use std::sync::Arc;

/// Scheduler, theme and writing direction a component is mounted with
#[derive(Clone)]
pub struct FabContext {
    scheduler: SchedulerHandle,
    theme: Arc<Theme>,
    direction: LayoutDirection,
}

impl FabContext {
    pub fn new(scheduler: SchedulerHandle, theme: Arc<Theme>) -> Self {
        Self {
            scheduler,
            theme,
            direction: LayoutDirection::Ltr,
        }
    }

    /// Context using the global theme from `ThemeState`
    pub fn current(scheduler: SchedulerHandle) -> Self {
        Self::new(scheduler, ThemeState::get())
    }

    pub fn with_theme(mut self, theme: Arc<Theme>) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn scheduler(&self) -> &SchedulerHandle {
        &self.scheduler
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn direction(&self) -> LayoutDirection {
        self.direction
    }

    /// Multiplier for every duration and delay
    pub fn animation_scale(&self) -> f32 {
        self.theme.animation_scale()
    }
}
