//! Extending floating action button
//!
//! A medium FAB whose background pill grows to reveal a text label while
//! the `extended` prop is true. The pill travel comes from
//! [`resolve`](crate::geometry::resolve); the label fades in only after the
//! pill has started growing and fades out at once when collapsing.
//!
//! The label size is reported asynchronously by the host's text layout
//! through [`AnimatedFab::on_label_layout`]. Until then the label is treated
//! as zero-width.

use crate::colors::{ColorOverrides, FabColors, FabVariant};
use crate::context::FabContext;
use crate::error::{FabError, Result};
use crate::fab::{Accessibility, FabMode};
use crate::geometry::{resolve, AnimateFrom, ExtendGeometry, ExtendInput, ExtendOrigin, IconMode};
use crate::plan::{extend_plan, extend_rest_value, ExtendTarget};
use crate::visibility::Visibility;
use petal_animation::{AnimatedValue, TimingConfig};
use petal_core::{Color, PressCallback, PressEvent};
use serde::Serialize;
use std::sync::Arc;

/// Collapsed diameter of an extending FAB
pub const ANCHOR_SIZE: f32 = 56.0;

/// Extend state derived from the prop and the drives in flight
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtendPhase {
    Collapsed,
    Extending,
    Extended,
    Collapsing,
}

/// Props of an [`AnimatedFab`]
#[derive(Clone)]
pub struct AnimatedFabProps {
    icon: String,
    label: String,
    extended: bool,
    visible: bool,
    animate_from: AnimateFrom,
    icon_mode: IconMode,
    variant: FabVariant,
    mode: FabMode,
    disabled: bool,
    colors: ColorOverrides,
    on_press: Option<PressCallback>,
    on_long_press: Option<PressCallback>,
    accessibility_label: Option<String>,
    test_id: Option<String>,
}

impl AnimatedFabProps {
    pub fn new(icon: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            label: label.into(),
            extended: false,
            visible: true,
            animate_from: AnimateFrom::default(),
            icon_mode: IconMode::default(),
            variant: FabVariant::default(),
            mode: FabMode::default(),
            disabled: false,
            colors: ColorOverrides::default(),
            on_press: None,
            on_long_press: None,
            accessibility_label: None,
            test_id: None,
        }
    }

    pub fn extended(mut self, extended: bool) -> Self {
        self.extended = extended;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Side the FAB is attached to; the pill grows away from it
    pub fn animate_from(mut self, animate_from: AnimateFrom) -> Self {
        self.animate_from = animate_from;
        self
    }

    pub fn icon_mode(mut self, icon_mode: IconMode) -> Self {
        self.icon_mode = icon_mode;
        self
    }

    pub fn variant(mut self, variant: FabVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn mode(mut self, mode: FabMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.colors.color = Some(color.into());
        self
    }

    pub fn background_color(mut self, color: impl Into<Color>) -> Self {
        self.colors.background_color = Some(color.into());
        self
    }

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

    pub fn accessibility_label(mut self, label: impl Into<String>) -> Self {
        self.accessibility_label = Some(label.into());
        self
    }

    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id = Some(id.into());
        self
    }
}

/// Rendered state of an [`AnimatedFab`] for the current frame
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnimatedFabVisual {
    pub icon: String,
    pub label: String,
    pub phase: ExtendPhase,
    pub height: f32,
    /// Visible pill width
    pub width: f32,
    pub pill_translate_x: f32,
    pub pill_scale_y: f32,
    pub icon_translate_x: f32,
    pub label_opacity: f32,
    pub label_offset_x: f32,
    pub border_radius: f32,
    pub origin: ExtendOrigin,
    pub colors: FabColors,
    pub elevation: u8,
    pub opacity: f32,
    pub scale: f32,
    pub interactive: bool,
    pub accessibility: Accessibility,
}

/// A mounted extending FAB
pub struct AnimatedFab {
    context: FabContext,
    props: AnimatedFabProps,
    pill_scale: AnimatedValue,
    pill_translate: AnimatedValue,
    icon_translate: AnimatedValue,
    label_opacity: AnimatedValue,
    visibility: Visibility,
    /// Last measured label size, rounded up
    label_size: (f32, f32),
    geometry: ExtendGeometry,
}

impl AnimatedFab {
    /// Mount with initial props
    ///
    /// Values start settled at the initial `extended` / `visible` state.
    pub fn mount(context: &FabContext, props: AnimatedFabProps) -> Self {
        let label_size = (0.0, 0.0);
        let geometry = resolve(&extend_input(context, &props, label_size));
        let rest = |target| {
            AnimatedValue::new(
                context.scheduler().clone(),
                extend_rest_value(target, props.extended, &geometry, props.icon_mode),
            )
        };

        Self {
            pill_scale: rest(ExtendTarget::PillScale),
            pill_translate: rest(ExtendTarget::PillTranslate),
            icon_translate: rest(ExtendTarget::IconTranslate),
            label_opacity: rest(ExtendTarget::LabelOpacity),
            visibility: Visibility::new(context, props.visible),
            context: context.clone(),
            props,
            label_size,
            geometry,
        }
    }

    /// Apply new props from the parent
    pub fn set_props(&mut self, props: AnimatedFabProps) {
        let previous = std::mem::replace(&mut self.props, props);
        self.visibility.set_visible(&self.context, self.props.visible);

        let geometry = resolve(&extend_input(&self.context, &self.props, self.label_size));
        let geometry_changed = geometry != self.geometry;
        self.geometry = geometry;

        if previous.icon_mode != self.props.icon_mode && self.props.icon_mode == IconMode::Static {
            // Static icons never move; drop any leftover travel
            self.icon_translate.set_immediate(0.0);
        }

        if previous.extended != self.props.extended {
            self.drive(self.props.extended);
        } else if self.props.extended
            && (geometry_changed || previous.icon_mode != self.props.icon_mode)
        {
            self.drive(true);
        }
    }

    /// Text layout callback with the label's rendered size
    ///
    /// Returns whether the stored measurement changed. Sizes are rounded up
    /// to whole pixels; repeated reports of the same size are ignored.
    pub fn on_label_layout(&mut self, width: f32, height: f32) -> Result<bool> {
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            tracing::warn!(width, height, "rejected label measurement");
            return Err(FabError::InvalidMeasurement { width, height });
        }

        let measured = (width.ceil(), height.ceil());
        if measured == self.label_size {
            return Ok(false);
        }

        let width_changed = measured.0 != self.label_size.0;
        self.label_size = measured;
        self.geometry = resolve(&extend_input(&self.context, &self.props, measured));
        tracing::debug!(width = measured.0, height = measured.1, "label measured");

        if width_changed && self.props.extended {
            self.drive(true);
        }
        Ok(true)
    }

    fn drive(&self, extended: bool) {
        let plan = extend_plan(
            extended,
            &self.geometry,
            self.props.icon_mode,
            self.context.animation_scale(),
        );
        let bound = plan.filter_map_targets(&mut |target| self.cell(target).id());

        tracing::debug!(
            extended,
            pill_translate_x = self.geometry.pill_translate_x,
            "extend transition"
        );
        self.context.scheduler().start(
            bound,
            Some(Box::new(move |outcome| {
                tracing::trace!(extended, ?outcome, "extend drive ended");
            })),
        );
    }

    fn cell(&self, target: ExtendTarget) -> &AnimatedValue {
        match target {
            ExtendTarget::PillScale => &self.pill_scale,
            ExtendTarget::PillTranslate => &self.pill_translate,
            ExtendTarget::IconTranslate => &self.icon_translate,
            ExtendTarget::LabelOpacity => &self.label_opacity,
        }
    }

    pub fn props(&self) -> &AnimatedFabProps {
        &self.props
    }

    pub fn is_extended(&self) -> bool {
        self.props.extended
    }

    pub fn phase(&self) -> ExtendPhase {
        let animating = ExtendTarget::ALL
            .iter()
            .any(|&target| self.cell(target).is_animating());
        match (self.props.extended, animating) {
            (true, true) => ExtendPhase::Extending,
            (true, false) => ExtendPhase::Extended,
            (false, true) => ExtendPhase::Collapsing,
            (false, false) => ExtendPhase::Collapsed,
        }
    }

    /// Geometry for the current label measurement
    pub fn geometry(&self) -> &ExtendGeometry {
        &self.geometry
    }

    /// Stored label measurement
    pub fn label_size(&self) -> (f32, f32) {
        self.label_size
    }

    /// Current value of an extend target
    pub fn value(&self, target: ExtendTarget) -> f32 {
        self.cell(target).get()
    }

    /// Config of the drive moving a target, if one is in flight
    pub fn active_drive(&self, target: ExtendTarget) -> Option<TimingConfig> {
        self.cell(target).active_config()
    }

    fn is_interactive(&self) -> bool {
        !self.props.disabled && self.visibility.is_visible()
    }

    pub fn press(&self, event: &PressEvent) -> bool {
        if !self.is_interactive() {
            tracing::debug!("press ignored on inactive animated fab");
            return false;
        }
        match &self.props.on_press {
            Some(handler) => {
                handler(event);
                true
            }
            None => false,
        }
    }

    pub fn long_press(&self, event: &PressEvent) -> bool {
        if !self.is_interactive() {
            return false;
        }
        match &self.props.on_long_press {
            Some(handler) => {
                handler(event);
                true
            }
            None => false,
        }
    }

    pub fn visual(&self) -> AnimatedFabVisual {
        let props = &self.props;
        let frame = self.geometry.frame(
            self.pill_translate.get(),
            self.icon_translate.get(),
        );
        let visibility = self.visibility.progress();
        let label = props
            .accessibility_label
            .clone()
            .unwrap_or_else(|| props.label.clone());

        AnimatedFabVisual {
            icon: props.icon.clone(),
            label: props.label.clone(),
            phase: self.phase(),
            height: ANCHOR_SIZE,
            width: frame.pill_width,
            pill_translate_x: frame.pill_translate_x,
            pill_scale_y: self.pill_scale.get(),
            icon_translate_x: frame.icon_translate_x,
            label_opacity: self.label_opacity.get(),
            label_offset_x: self.geometry.label_offset_x,
            border_radius: self.geometry.border_radius,
            origin: self.geometry.origin,
            colors: FabColors::resolve(
                self.context.theme(),
                props.variant,
                props.disabled,
                props.colors,
            ),
            elevation: props.mode.elevation(props.disabled),
            opacity: visibility,
            scale: visibility,
            interactive: self.is_interactive(),
            accessibility: Accessibility::button(
                Some(label),
                props.disabled,
                props.test_id.clone(),
            ),
        }
    }
}

fn extend_input(
    context: &FabContext,
    props: &AnimatedFabProps,
    (label_width, label_height): (f32, f32),
) -> ExtendInput {
    ExtendInput::new(ANCHOR_SIZE, label_width)
        .label_height(label_height)
        .direction(context.direction())
        .animate_from(props.animate_from)
        .icon_mode(props.icon_mode)
}
