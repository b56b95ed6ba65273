//! Show / hide state shared by every FAB surface

use crate::context::FabContext;
use crate::plan::visibility_config;
use petal_animation::AnimatedValue;

/// Animated opacity + uniform scale driven by a `visible` prop
pub(crate) struct Visibility {
    progress: AnimatedValue,
    visible: bool,
}

impl Visibility {
    /// Settled at the initial state; mounting does not animate
    pub(crate) fn new(context: &FabContext, visible: bool) -> Self {
        Self {
            progress: AnimatedValue::new(
                context.scheduler().clone(),
                if visible { 1.0 } else { 0.0 },
            ),
            visible,
        }
    }

    pub(crate) fn set_visible(&mut self, context: &FabContext, visible: bool) {
        if self.visible == visible {
            return;
        }
        self.visible = visible;
        tracing::debug!(visible, "fab visibility changed");

        let config = visibility_config(visible, context.animation_scale());
        context
            .scheduler()
            .start(self.progress.timing(config), None);
    }

    pub(crate) fn is_visible(&self) -> bool {
        self.visible
    }

    /// Current opacity / scale factor
    pub(crate) fn progress(&self) -> f32 {
        self.progress.get()
    }

    pub(crate) fn is_animating(&self) -> bool {
        self.progress.is_animating()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petal_animation::AnimationScheduler;
    use petal_theme::Theme;
    use std::sync::Arc;

    #[test]
    fn test_show_hide_durations() {
        let scheduler = AnimationScheduler::new();
        let context = FabContext::new(scheduler.handle(), Arc::new(Theme::light()));
        let mut visibility = Visibility::new(&context, true);
        assert_eq!(visibility.progress(), 1.0);

        visibility.set_visible(&context, false);
        assert!(visibility.is_animating());
        scheduler.tick_by(100.0);
        assert!(visibility.progress() > 0.0 && visibility.progress() < 1.0);
        scheduler.tick_by(50.0);
        assert_eq!(visibility.progress(), 0.0);

        visibility.set_visible(&context, true);
        scheduler.tick_by(150.0);
        assert!(visibility.progress() < 1.0);
        scheduler.tick_by(50.0);
        assert_eq!(visibility.progress(), 1.0);
    }

    #[test]
    fn test_unchanged_prop_does_not_drive() {
        let scheduler = AnimationScheduler::new();
        let context = FabContext::new(scheduler.handle(), Arc::new(Theme::light()));
        let mut visibility = Visibility::new(&context, false);
        visibility.set_visible(&context, false);
        assert!(!visibility.is_animating());
        assert_eq!(scheduler.drive_count(), 0);
    }
}
