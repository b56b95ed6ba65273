//! Speed-dial FAB group
//!
//! A main FAB that opens a stack of action buttons over a backdrop. The
//! group is controlled: the parent owns `open` and the group only asks for
//! changes through `on_state_change`. Visuals follow the `open` prop the
//! parent passes back, never the request itself.
//!
//! # Example
//!
//! ```ignore
//! use petal_fab::prelude::*;
//!
//! let props = |open| {
//!     FabGroupProps::new("plus")
//!         .open(open)
//!         .open_icon("close")
//!         .action(FabAction::new("star").label("Star").on_press(|_| star()))
//!         .action(FabAction::new("mail").label("Email").on_press(|_| mail()))
//!         .on_state_change(move |change| requests.send(change.open))
//! };
//!
//! let mut group = FabGroup::mount(&context, props(false))?;
//! group.press_primary(&PressEvent::press());
//! // ... parent receives the request and re-renders:
//! group.set_props(props(true))?;
//! ```

use crate::action::FabAction;
use crate::colors::{ColorOverrides, FabColors, FabVariant};
use crate::context::FabContext;
use crate::error::{FabError, Result};
use crate::fab::{Accessibility, FabMode, FabSize, FabVisual};
use crate::plan::{group_plan, GroupTarget};
use crate::progress::ProgressArena;
use crate::visibility::Visibility;
use petal_animation::{AnimatedValue, Interpolation};
use petal_core::{Callback, Color, PressCallback, PressEvent};
use petal_theme::ColorToken;
use serde::Serialize;
use std::sync::Arc;

/// Payload of `on_state_change`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct FabGroupChange {
    pub open: bool,
}

/// Open state derived from the prop and the drives in flight
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupPhase {
    Closed,
    Opening,
    Open,
    Closing,
}

/// Props of a [`FabGroup`]
#[derive(Clone)]
pub struct FabGroupProps {
    open: bool,
    visible: bool,
    icon: String,
    open_icon: Option<String>,
    label: Option<String>,
    actions: Vec<FabAction>,
    on_state_change: Option<Callback<FabGroupChange>>,
    on_press: Option<PressCallback>,
    on_long_press: Option<PressCallback>,
    toggle_stack_on_long_press: bool,
    enable_long_press_when_stack_opened: bool,
    backdrop_color: Option<Color>,
    variant: FabVariant,
    colors: ColorOverrides,
    accessibility_label: Option<String>,
    test_id: Option<String>,
}

impl FabGroupProps {
    pub fn new(icon: impl Into<String>) -> Self {
        Self {
            open: false,
            visible: true,
            icon: icon.into(),
            open_icon: None,
            label: None,
            actions: Vec::new(),
            on_state_change: None,
            on_press: None,
            on_long_press: None,
            toggle_stack_on_long_press: false,
            enable_long_press_when_stack_opened: false,
            backdrop_color: None,
            variant: FabVariant::default(),
            colors: ColorOverrides::default(),
            accessibility_label: None,
            test_id: None,
        }
    }

    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Main icon while the stack is open
    pub fn open_icon(mut self, icon: impl Into<String>) -> Self {
        self.open_icon = Some(icon.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Append an action
    pub fn action(mut self, action: FabAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Replace the action list
    pub fn actions(mut self, actions: impl IntoIterator<Item = FabAction>) -> Self {
        self.actions = actions.into_iter().collect();
        self
    }

    /// Called with the requested state; the parent decides whether to apply it
    pub fn on_state_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(FabGroupChange) + Send + Sync + 'static,
    {
        self.on_state_change = Some(Arc::new(callback));
        self
    }

    /// Main button press, called before the stack toggles
    pub fn on_press<F>(mut self, handler: F) -> Self
    where
        F: Fn(&PressEvent) + Send + Sync + 'static,
    {
        self.on_press = Some(Arc::new(handler));
        self
    }

    pub fn on_long_press<F>(mut self, handler: F) -> Self
    where
        F: Fn(&PressEvent) + Send + Sync + 'static,
    {
        self.on_long_press = Some(Arc::new(handler));
        self
    }

    /// Open the stack with a long press instead of a press
    pub fn toggle_stack_on_long_press(mut self, enabled: bool) -> Self {
        self.toggle_stack_on_long_press = enabled;
        self
    }

    /// Keep delivering long presses while the stack is open
    pub fn enable_long_press_when_stack_opened(mut self, enabled: bool) -> Self {
        self.enable_long_press_when_stack_opened = enabled;
        self
    }

    pub fn backdrop_color(mut self, color: impl Into<Color>) -> Self {
        self.backdrop_color = Some(color.into());
        self
    }

    pub fn variant(mut self, variant: FabVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Main icon color
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.colors.color = Some(color.into());
        self
    }

    /// Main button background
    pub fn background_color(mut self, color: impl Into<Color>) -> Self {
        self.colors.background_color = Some(color.into());
        self
    }

    pub fn accessibility_label(mut self, label: impl Into<String>) -> Self {
        self.accessibility_label = Some(label.into());
        self
    }

    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id = Some(id.into());
        self
    }

    fn validate(&self) -> Result<()> {
        for action in &self.actions {
            action.size.dimension()?;
        }
        Ok(())
    }
}

/// Backdrop behind an open stack
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BackdropVisual {
    pub opacity: f32,
    pub color: Color,
    pub interactive: bool,
}

/// One action of the stack for the current frame
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ActionVisual {
    pub index: usize,
    pub icon: String,
    pub label: Option<String>,
    pub size: f32,
    pub progress: f32,
    pub opacity: f32,
    pub scale: f32,
    pub translate_y: f32,
    pub colors: FabColors,
    pub label_text_color: Color,
    pub interactive: bool,
    pub accessibility: Accessibility,
}

/// Rendered state of a [`FabGroup`] for the current frame
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FabGroupVisual {
    pub open: bool,
    pub phase: GroupPhase,
    pub backdrop: BackdropVisual,
    pub fab: FabVisual,
    pub actions: Vec<ActionVisual>,
}

/// Action scale from progress while open
fn action_scale_curve() -> Interpolation {
    Interpolation::new(&[0.0, 1.0], &[0.8, 1.0])
}

/// Action vertical offset from progress while open
fn action_translate_curve() -> Interpolation {
    Interpolation::new(&[0.0, 1.0], &[24.0, -8.0])
}

const CLOSED_ACTION_TRANSLATE_Y: f32 = -8.0;

/// A mounted speed-dial group
pub struct FabGroup {
    context: FabContext,
    props: FabGroupProps,
    backdrop: AnimatedValue,
    actions: ProgressArena,
    visibility: Visibility,
}

impl FabGroup {
    /// Mount with initial props
    ///
    /// Progress values start settled at the initial `open` state.
    pub fn mount(context: &FabContext, props: FabGroupProps) -> Result<Self> {
        props.validate()?;
        let rest = if props.open { 1.0 } else { 0.0 };
        Ok(Self {
            backdrop: AnimatedValue::new(context.scheduler().clone(), rest),
            actions: ProgressArena::new(context.scheduler().clone(), props.actions.len(), rest),
            visibility: Visibility::new(context, props.visible),
            context: context.clone(),
            props,
        })
    }

    /// Apply new props from the parent
    ///
    /// A changed action count resizes the progress arena first; actions that
    /// stay keep their progress and new ones start at the current state.
    pub fn set_props(&mut self, props: FabGroupProps) -> Result<()> {
        props.validate()?;
        let previous = std::mem::replace(&mut self.props, props);
        self.visibility.set_visible(&self.context, self.props.visible);

        let rest = if self.props.open { 1.0 } else { 0.0 };
        self.actions.resize(self.props.actions.len(), rest);

        if previous.open != self.props.open {
            self.drive(self.props.open);
        }
        Ok(())
    }

    fn drive(&self, open: bool) {
        let plan = group_plan(open, self.actions.len(), self.context.animation_scale());
        let bound = plan.filter_map_targets(&mut |target| match target {
            GroupTarget::Backdrop => self.backdrop.id(),
            GroupTarget::Action(index) => self.actions.value_id(index),
        });

        tracing::debug!(open, actions = self.actions.len(), "fab group transition");
        self.context.scheduler().start(
            bound,
            Some(Box::new(move |outcome| {
                tracing::trace!(open, ?outcome, "fab group drive ended");
            })),
        );
    }

    fn request(&self, open: bool) {
        tracing::debug!(open, "fab group state change requested");
        if let Some(callback) = &self.props.on_state_change {
            callback(FabGroupChange { open });
        }
    }

    fn toggle(&self) {
        self.request(!self.props.open);
    }

    /// Ask the parent to close the stack
    pub fn close(&self) {
        self.request(false);
    }

    /// Press on the main button
    ///
    /// Calls `on_press`, then requests a toggle unless the stack opens by
    /// long press and is currently closed.
    pub fn press_primary(&self, event: &PressEvent) -> bool {
        if !self.visibility.is_visible() {
            tracing::debug!("press ignored on hidden fab group");
            return false;
        }
        if let Some(handler) = &self.props.on_press {
            handler(event);
        }
        if !self.props.toggle_stack_on_long_press || self.props.open {
            self.toggle();
        }
        true
    }

    /// Long press on the main button
    pub fn long_press_primary(&self, event: &PressEvent) -> bool {
        if !self.visibility.is_visible() {
            return false;
        }
        if self.props.open && !self.props.enable_long_press_when_stack_opened {
            return false;
        }
        if let Some(handler) = &self.props.on_long_press {
            handler(event);
        }
        if self.props.toggle_stack_on_long_press {
            self.toggle();
        }
        true
    }

    fn action(&self, index: usize) -> Result<&FabAction> {
        self.props
            .actions
            .get(index)
            .ok_or(FabError::ActionOutOfRange {
                index,
                len: self.props.actions.len(),
            })
    }

    /// Press on an action; fires the action's handler, then requests close
    ///
    /// Returns `Ok(false)` when the stack is closed (actions are inert).
    pub fn press_action(&self, index: usize, event: &PressEvent) -> Result<bool> {
        let action = self.action(index)?;
        if !self.props.open {
            tracing::warn!(index, "press on action of a closed fab group ignored");
            return Ok(false);
        }
        if let Some(handler) = &action.on_press {
            handler(event);
        }
        self.close();
        Ok(true)
    }

    /// Long press on an action; only handled when the action has a handler
    pub fn long_press_action(&self, index: usize, event: &PressEvent) -> Result<bool> {
        let action = self.action(index)?;
        if !self.props.open {
            tracing::warn!(index, "long press on action of a closed fab group ignored");
            return Ok(false);
        }
        match &action.on_long_press {
            Some(handler) => {
                handler(event);
                self.close();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Press on the backdrop; closes an open stack
    pub fn press_backdrop(&self, _event: &PressEvent) -> bool {
        if !self.props.open {
            return false;
        }
        self.close();
        true
    }

    pub fn props(&self) -> &FabGroupProps {
        &self.props
    }

    pub fn is_open(&self) -> bool {
        self.props.open
    }

    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    pub fn phase(&self) -> GroupPhase {
        let animating = self.backdrop.is_animating() || self.actions.is_animating();
        match (self.props.open, animating) {
            (true, true) => GroupPhase::Opening,
            (true, false) => GroupPhase::Open,
            (false, true) => GroupPhase::Closing,
            (false, false) => GroupPhase::Closed,
        }
    }

    pub fn backdrop_progress(&self) -> f32 {
        self.backdrop.get()
    }

    /// Progress of every action, by index
    pub fn action_progress(&self) -> Vec<f32> {
        self.actions.values()
    }

    /// Scale of an action; pinned to exactly 1 while closed
    pub fn action_scale(&self, index: usize) -> Result<f32> {
        self.action(index)?;
        if !self.props.open {
            return Ok(1.0);
        }
        let progress = self.actions.get(index).unwrap_or(0.0);
        Ok(action_scale_curve().map(progress))
    }

    pub fn visual(&self) -> FabGroupVisual {
        let theme = self.context.theme();
        let props = &self.props;
        let open = props.open;

        let backdrop_progress = self.backdrop.get();
        let backdrop_opacity = if open {
            Interpolation::new(&[0.0, 0.5, 1.0], &[0.0, 1.0, 1.0]).map(backdrop_progress)
        } else {
            backdrop_progress
        };

        let scale_curve = action_scale_curve();
        let translate_curve = action_translate_curve();
        let label_text_color = theme.color(ColorToken::OnSurface);

        let actions = props
            .actions
            .iter()
            .enumerate()
            .map(|(index, action)| {
                let progress = self.actions.get(index).unwrap_or(0.0);
                ActionVisual {
                    index,
                    icon: action.icon.clone(),
                    label: action.label.clone(),
                    size: action.size.dimension().unwrap_or(40.0),
                    progress,
                    opacity: progress,
                    scale: if open { scale_curve.map(progress) } else { 1.0 },
                    translate_y: if open {
                        translate_curve.map(progress)
                    } else {
                        CLOSED_ACTION_TRANSLATE_Y
                    },
                    colors: FabColors::resolve(
                        theme,
                        FabVariant::Surface,
                        false,
                        ColorOverrides {
                            color: action.color,
                            background_color: action.background_color,
                        },
                    ),
                    label_text_color: action.label_text_color.unwrap_or(label_text_color),
                    interactive: open,
                    accessibility: Accessibility::button(
                        action
                            .accessibility_label
                            .clone()
                            .or_else(|| action.label.clone()),
                        false,
                        action.test_id.clone(),
                    ),
                }
            })
            .collect();

        let visibility = self.visibility.progress();
        let icon = match (&props.open_icon, open) {
            (Some(open_icon), true) => open_icon.clone(),
            _ => props.icon.clone(),
        };
        let mut accessibility = Accessibility::button(
            props
                .accessibility_label
                .clone()
                .or_else(|| props.label.clone()),
            false,
            props.test_id.clone(),
        );
        accessibility.expanded = Some(open);

        let fab = FabVisual {
            icon,
            label: props.label.clone(),
            size: FabSize::Medium.dimension().unwrap_or(56.0),
            border_radius: FabSize::Medium.border_radius().unwrap_or(16.0),
            colors: FabColors::resolve(theme, props.variant, false, props.colors),
            elevation: FabMode::Elevated.elevation(false),
            opacity: visibility,
            scale: visibility,
            interactive: self.visibility.is_visible(),
            accessibility,
        };

        FabGroupVisual {
            open,
            phase: self.phase(),
            backdrop: BackdropVisual {
                opacity: backdrop_opacity,
                color: props
                    .backdrop_color
                    .unwrap_or_else(|| theme.color(ColorToken::Backdrop)),
                interactive: open,
            },
            fab,
            actions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use petal_animation::AnimationScheduler;
    use petal_theme::Theme;

    fn context(scheduler: &AnimationScheduler) -> FabContext {
        FabContext::new(scheduler.handle(), Arc::new(Theme::light()))
    }

    fn event_log() -> Arc<Mutex<Vec<String>>> {
        Arc::new(Mutex::new(Vec::new()))
    }

    fn group(open: bool, count: usize, log: &Arc<Mutex<Vec<String>>>) -> FabGroupProps {
        let mut props = FabGroupProps::new("plus").open(open).open_icon("close");
        for i in 0..count {
            let sink = Arc::clone(log);
            props = props.action(
                FabAction::new(format!("icon-{i}"))
                    .label(format!("Action {i}"))
                    .on_press(move |_| sink.lock().push(format!("action {i}"))),
            );
        }
        let sink = Arc::clone(log);
        props.on_state_change(move |change| sink.lock().push(format!("open={}", change.open)))
    }

    #[test]
    fn test_open_unfurls_last_action_first() {
        let scheduler = AnimationScheduler::new();
        let log = event_log();
        let mut fab_group = FabGroup::mount(&context(&scheduler), group(false, 3, &log)).unwrap();

        fab_group.set_props(group(true, 3, &log)).unwrap();
        assert_eq!(fab_group.phase(), GroupPhase::Opening);

        scheduler.tick_by(25.0);
        let progress = fab_group.action_progress();
        assert!(progress[2] > 0.0);
        assert_eq!(progress[1], 0.0);
        assert_eq!(progress[0], 0.0);

        scheduler.tick_by(50.0);
        let progress = fab_group.action_progress();
        assert!(progress[1] > 0.0);
        assert_eq!(progress[0], 0.0);

        scheduler.run_until_idle(16.0, 100);
        assert_eq!(fab_group.action_progress(), vec![1.0, 1.0, 1.0]);
        assert_eq!(fab_group.backdrop_progress(), 1.0);
        assert_eq!(fab_group.phase(), GroupPhase::Open);
    }

    #[test]
    fn test_close_retracts_together() {
        let scheduler = AnimationScheduler::new();
        let log = event_log();
        let mut fab_group = FabGroup::mount(&context(&scheduler), group(true, 3, &log)).unwrap();
        assert_eq!(fab_group.phase(), GroupPhase::Open);

        fab_group.set_props(group(false, 3, &log)).unwrap();
        scheduler.tick_by(75.0);
        let progress = fab_group.action_progress();
        assert!(progress[0] < 1.0);
        assert_eq!(progress[0], progress[1]);
        assert_eq!(progress[1], progress[2]);

        scheduler.tick_by(75.0);
        assert_eq!(fab_group.action_progress(), vec![0.0, 0.0, 0.0]);
        assert!(fab_group.backdrop_progress() > 0.0);
        scheduler.tick_by(50.0);
        assert_eq!(fab_group.phase(), GroupPhase::Closed);
    }

    #[test]
    fn test_resize_keeps_open_progress() {
        let scheduler = AnimationScheduler::new();
        let log = event_log();
        let mut fab_group = FabGroup::mount(&context(&scheduler), group(true, 2, &log)).unwrap();
        assert_eq!(fab_group.action_progress(), vec![1.0, 1.0]);

        fab_group.set_props(group(true, 3, &log)).unwrap();
        assert_eq!(fab_group.action_progress(), vec![1.0, 1.0, 1.0]);
        assert_eq!(scheduler.drive_count(), 0);

        fab_group.set_props(group(false, 1, &log)).unwrap();
        assert_eq!(fab_group.action_count(), 1);
        scheduler.run_until_idle(16.0, 100);
        fab_group.set_props(group(false, 2, &log)).unwrap();
        assert_eq!(fab_group.action_progress(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_shrink_while_opening_finishes_survivors() {
        let scheduler = AnimationScheduler::new();
        let log = event_log();
        let mut fab_group = FabGroup::mount(&context(&scheduler), group(false, 3, &log)).unwrap();

        fab_group.set_props(group(true, 3, &log)).unwrap();
        scheduler.tick_by(10.0);
        fab_group.set_props(group(true, 2, &log)).unwrap();
        assert_eq!(fab_group.phase(), GroupPhase::Opening);

        scheduler.run_until_idle(16.0, 100);
        assert_eq!(fab_group.action_progress(), vec![1.0, 1.0]);
        assert_eq!(fab_group.backdrop_progress(), 1.0);
        assert_eq!(fab_group.phase(), GroupPhase::Open);
        assert!(fab_group.visual().actions.iter().all(|a| a.opacity == 1.0));
    }

    #[test]
    fn test_shrink_while_closing_finishes_survivors() {
        let scheduler = AnimationScheduler::new();
        let log = event_log();
        let mut fab_group = FabGroup::mount(&context(&scheduler), group(true, 3, &log)).unwrap();

        fab_group.set_props(group(false, 3, &log)).unwrap();
        scheduler.tick_by(30.0);
        fab_group.set_props(group(false, 2, &log)).unwrap();
        assert_eq!(fab_group.phase(), GroupPhase::Closing);

        scheduler.run_until_idle(16.0, 100);
        assert_eq!(fab_group.action_progress(), vec![0.0, 0.0]);
        assert_eq!(fab_group.backdrop_progress(), 0.0);
        assert_eq!(fab_group.phase(), GroupPhase::Closed);
        assert_eq!(fab_group.visual().backdrop.opacity, 0.0);
    }

    #[test]
    fn test_closed_scale_pinned_to_one() {
        let scheduler = AnimationScheduler::new();
        let log = event_log();
        let mut fab_group = FabGroup::mount(&context(&scheduler), group(true, 2, &log)).unwrap();

        fab_group.set_props(group(false, 2, &log)).unwrap();
        scheduler.tick_by(40.0);
        assert!(fab_group.action_progress()[0] > 0.0);
        assert_eq!(fab_group.action_scale(0), Ok(1.0));
        assert!(fab_group.visual().actions.iter().all(|a| a.scale == 1.0));

        scheduler.run_until_idle(16.0, 100);
        assert_eq!(fab_group.action_scale(1), Ok(1.0));
        assert!(fab_group
            .visual()
            .actions
            .iter()
            .all(|a| a.scale == 1.0 && a.translate_y == -8.0));
    }

    #[test]
    fn test_open_scale_follows_progress() {
        let scheduler = AnimationScheduler::new();
        let log = event_log();
        let mut fab_group = FabGroup::mount(&context(&scheduler), group(false, 1, &log)).unwrap();
        fab_group.set_props(group(true, 1, &log)).unwrap();

        let start = fab_group.visual();
        assert_eq!(start.actions[0].scale, 0.8);
        assert_eq!(start.actions[0].translate_y, 24.0);
        assert_eq!(start.backdrop.opacity, 0.0);

        scheduler.run_until_idle(16.0, 100);
        let end = fab_group.visual();
        assert_eq!(end.actions[0].scale, 1.0);
        assert_eq!(end.actions[0].translate_y, -8.0);
        assert_eq!(end.backdrop.opacity, 1.0);
        assert!(end.backdrop.interactive);
    }

    #[test]
    fn test_primary_press_requests_toggle() {
        let scheduler = AnimationScheduler::new();
        let log = event_log();
        let fab_group = FabGroup::mount(&context(&scheduler), group(false, 2, &log)).unwrap();

        assert!(fab_group.press_primary(&PressEvent::press()));
        assert_eq!(*log.lock(), vec!["open=true".to_string()]);
        assert!(!fab_group.is_open());
        assert_eq!(fab_group.backdrop_progress(), 0.0);
        assert_eq!(scheduler.drive_count(), 0);
    }

    #[test]
    fn test_primary_press_while_open_calls_on_press_then_closes() {
        let scheduler = AnimationScheduler::new();
        let log = event_log();
        let sink = Arc::clone(&log);
        let props = group(true, 1, &log).on_press(move |_| sink.lock().push("primary".into()));
        let fab_group = FabGroup::mount(&context(&scheduler), props).unwrap();

        fab_group.press_primary(&PressEvent::press());
        assert_eq!(*log.lock(), vec!["primary".to_string(), "open=false".to_string()]);
    }

    #[test]
    fn test_long_press_rules() {
        let scheduler = AnimationScheduler::new();
        let log = event_log();
        let sink = Arc::clone(&log);
        let props = |open: bool| {
            let sink = Arc::clone(&sink);
            group(open, 1, &log)
                .toggle_stack_on_long_press(true)
                .on_long_press(move |_| sink.lock().push("long".into()))
        };

        // Closed: press only fires on_press (none set), no toggle
        let closed = FabGroup::mount(&context(&scheduler), props(false)).unwrap();
        assert!(closed.press_primary(&PressEvent::press()));
        assert!(log.lock().is_empty());

        assert!(closed.long_press_primary(&PressEvent::long_press()));
        assert_eq!(*log.lock(), vec!["long".to_string(), "open=true".to_string()]);
        log.lock().clear();

        // Open: long press is ignored unless enabled, press toggles
        let open = FabGroup::mount(&context(&scheduler), props(true)).unwrap();
        assert!(!open.long_press_primary(&PressEvent::long_press()));
        assert!(log.lock().is_empty());
        open.press_primary(&PressEvent::press());
        assert_eq!(*log.lock(), vec!["open=false".to_string()]);
        log.lock().clear();

        let enabled = FabGroup::mount(
            &context(&scheduler),
            props(true).enable_long_press_when_stack_opened(true),
        )
        .unwrap();
        assert!(enabled.long_press_primary(&PressEvent::long_press()));
        assert_eq!(*log.lock(), vec!["long".to_string(), "open=false".to_string()]);
    }

    #[test]
    fn test_action_press_closes() {
        let scheduler = AnimationScheduler::new();
        let log = event_log();
        let fab_group = FabGroup::mount(&context(&scheduler), group(true, 2, &log)).unwrap();

        assert_eq!(fab_group.press_action(0, &PressEvent::press()), Ok(true));
        assert_eq!(*log.lock(), vec!["action 0".to_string(), "open=false".to_string()]);
    }

    #[test]
    fn test_action_out_of_range() {
        let scheduler = AnimationScheduler::new();
        let log = event_log();
        let fab_group = FabGroup::mount(&context(&scheduler), group(true, 2, &log)).unwrap();

        assert_eq!(
            fab_group.press_action(2, &PressEvent::press()),
            Err(FabError::ActionOutOfRange { index: 2, len: 2 })
        );
        assert!(fab_group.long_press_action(5, &PressEvent::long_press()).is_err());
        assert!(fab_group.action_scale(9).is_err());
        assert!(log.lock().is_empty());
    }

    #[test]
    fn test_closed_group_ignores_action_and_backdrop() {
        let scheduler = AnimationScheduler::new();
        let log = event_log();
        let fab_group = FabGroup::mount(&context(&scheduler), group(false, 2, &log)).unwrap();

        assert_eq!(fab_group.press_action(1, &PressEvent::press()), Ok(false));
        assert!(!fab_group.press_backdrop(&PressEvent::press()));
        assert!(log.lock().is_empty());
        assert!(fab_group.visual().actions.iter().all(|a| !a.interactive));
    }

    #[test]
    fn test_backdrop_press_closes() {
        let scheduler = AnimationScheduler::new();
        let log = event_log();
        let fab_group = FabGroup::mount(&context(&scheduler), group(true, 1, &log)).unwrap();
        assert!(fab_group.press_backdrop(&PressEvent::press()));
        assert_eq!(*log.lock(), vec!["open=false".to_string()]);
    }

    #[test]
    fn test_action_long_press() {
        let scheduler = AnimationScheduler::new();
        let log = event_log();
        let sink = Arc::clone(&log);
        let props = group(true, 1, &log).action(
            FabAction::new("share").on_long_press(move |_| sink.lock().push("share long".into())),
        );
        let fab_group = FabGroup::mount(&context(&scheduler), props).unwrap();

        assert_eq!(fab_group.long_press_action(0, &PressEvent::long_press()), Ok(false));
        assert_eq!(fab_group.long_press_action(1, &PressEvent::long_press()), Ok(true));
        assert_eq!(
            *log.lock(),
            vec!["share long".to_string(), "open=false".to_string()]
        );
    }

    #[test]
    fn test_main_icon_and_accessibility() {
        let scheduler = AnimationScheduler::new();
        let log = event_log();
        let mut fab_group = FabGroup::mount(&context(&scheduler), group(false, 1, &log)).unwrap();

        let closed = fab_group.visual().fab;
        assert_eq!(closed.icon, "plus");
        assert_eq!(closed.accessibility.expanded, Some(false));

        fab_group.set_props(group(true, 1, &log)).unwrap();
        let open = fab_group.visual().fab;
        assert_eq!(open.icon, "close");
        assert_eq!(open.accessibility.expanded, Some(true));
    }

    #[test]
    fn test_invalid_action_size() {
        let scheduler = AnimationScheduler::new();
        let props = FabGroupProps::new("plus").action(FabAction::new("x").size(FabSize::Custom(0.0)));
        assert!(matches!(
            FabGroup::mount(&context(&scheduler), props),
            Err(FabError::InvalidSize(_))
        ));
    }

    #[test]
    fn test_unmount_discards_callbacks() {
        let scheduler = AnimationScheduler::new();
        let log = event_log();
        let mut fab_group = FabGroup::mount(&context(&scheduler), group(false, 3, &log)).unwrap();
        fab_group.set_props(group(true, 3, &log)).unwrap();
        assert!(scheduler.has_active_animations());

        drop(fab_group);
        assert_eq!(scheduler.value_count(), 0);
        assert_eq!(scheduler.group_count(), 0);
        assert!(!scheduler.tick_by(16.0));
    }
}
