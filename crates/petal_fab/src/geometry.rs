//! Extend geometry
//!
//! Computes how far the background pill and the icon of an extending FAB
//! travel between the collapsed (icon-only, `anchor_size` wide) and the
//! extended (icon + label) layout.
//!
//! The pill keeps one physical edge pinned and grows toward the other. Which
//! edge stays put depends on the configured side (`AnimateFrom`) mirrored by
//! the writing direction:
//!
//! | animate from | direction | pinned edge | pill grows toward |
//! |--------------|-----------|-------------|-------------------|
//! | right        | LTR       | right       | left (negative)   |
//! | right        | RTL       | left        | right (positive)  |
//! | left         | LTR       | left        | right (positive)  |
//! | left         | RTL       | right       | left (negative)   |

use petal_core::LayoutDirection;
use serde::{Deserialize, Serialize};

/// Side the extending FAB is attached to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimateFrom {
    Left,
    #[default]
    Right,
}

/// How the icon behaves while the pill grows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconMode {
    /// Icon stays where it is; the pill grows around it
    #[default]
    Static,
    /// Icon travels with the pill's moving edge
    Dynamic,
}

/// Physical edge of the FAB surface
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Left,
    Right,
}

/// Resolved combination of attachment side and writing direction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtendOrigin {
    RightLtr,
    RightRtl,
    LeftLtr,
    LeftRtl,
}

impl ExtendOrigin {
    pub fn new(animate_from: AnimateFrom, direction: LayoutDirection) -> Self {
        match (animate_from, direction) {
            (AnimateFrom::Right, LayoutDirection::Ltr) => ExtendOrigin::RightLtr,
            (AnimateFrom::Right, LayoutDirection::Rtl) => ExtendOrigin::RightRtl,
            (AnimateFrom::Left, LayoutDirection::Ltr) => ExtendOrigin::LeftLtr,
            (AnimateFrom::Left, LayoutDirection::Rtl) => ExtendOrigin::LeftRtl,
        }
    }

    /// Edge that does not move while extending
    pub fn pinned_edge(self) -> Edge {
        match self {
            ExtendOrigin::RightLtr | ExtendOrigin::LeftRtl => Edge::Right,
            ExtendOrigin::RightRtl | ExtendOrigin::LeftLtr => Edge::Left,
        }
    }

    /// `-1.0` when the pill grows toward the physical left, `1.0` otherwise
    pub fn sign(self) -> f32 {
        match self.pinned_edge() {
            Edge::Right => -1.0,
            Edge::Left => 1.0,
        }
    }
}

/// Inputs to [`resolve`]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExtendInput {
    /// Collapsed diameter of the FAB
    pub anchor_size: f32,
    /// Measured label width (0 until the label has been laid out)
    pub label_width: f32,
    pub label_height: f32,
    pub direction: LayoutDirection,
    pub animate_from: AnimateFrom,
    pub icon_mode: IconMode,
}

impl ExtendInput {
    pub fn new(anchor_size: f32, label_width: f32) -> Self {
        Self {
            anchor_size,
            label_width,
            label_height: 0.0,
            direction: LayoutDirection::Ltr,
            animate_from: AnimateFrom::Right,
            icon_mode: IconMode::Static,
        }
    }

    pub fn label_height(mut self, height: f32) -> Self {
        self.label_height = height;
        self
    }

    pub fn direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn animate_from(mut self, animate_from: AnimateFrom) -> Self {
        self.animate_from = animate_from;
        self
    }

    pub fn icon_mode(mut self, icon_mode: IconMode) -> Self {
        self.icon_mode = icon_mode;
        self
    }
}

/// Extended-state targets for one FAB layout
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExtendGeometry {
    /// Signed pill travel from collapsed to extended
    pub pill_translate_x: f32,
    /// Signed icon travel (0 in static icon mode)
    pub icon_translate_x: f32,
    /// Signed offset of the label's near edge from the pinned edge
    pub label_offset_x: f32,
    /// Full extended width
    pub pill_width: f32,
    pub border_radius: f32,
    pub origin: ExtendOrigin,
    /// Collapsed width the travel is measured from
    pub anchor_size: f32,
}

/// Pill and icon placement for the current animated values
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExtendFrame {
    /// Currently visible pill width
    pub pill_width: f32,
    pub pill_translate_x: f32,
    pub icon_translate_x: f32,
    /// 0 = collapsed, 1 = extended
    pub progress: f32,
}

/// Resolve the extended-state geometry
pub fn resolve(input: &ExtendInput) -> ExtendGeometry {
    let ExtendInput {
        anchor_size,
        label_width,
        icon_mode,
        ..
    } = *input;

    let origin = ExtendOrigin::new(input.animate_from, input.direction);
    let sign = origin.sign();

    let travel = label_width + anchor_size / 2.0;
    let pill_translate_x = sign * travel;

    let (icon_translate_x, label_offset_x) = match icon_mode {
        IconMode::Static => (0.0, sign * anchor_size),
        IconMode::Dynamic => (pill_translate_x, sign * anchor_size / 4.0),
    };

    ExtendGeometry {
        pill_translate_x,
        icon_translate_x,
        label_offset_x,
        pill_width: label_width + 1.5 * anchor_size,
        border_radius: anchor_size / 2.0,
        origin,
        anchor_size,
    }
}

impl ExtendGeometry {
    /// Distance the moving edge travels
    pub fn travel(&self) -> f32 {
        self.pill_translate_x.abs()
    }

    /// Placement for the current pill / icon translate values
    pub fn frame(&self, pill_value: f32, icon_value: f32) -> ExtendFrame {
        let travel = self.travel();
        let progress = if travel > 0.0 {
            (pill_value.abs() / travel).clamp(0.0, 1.0)
        } else {
            0.0
        };
        ExtendFrame {
            pill_width: self.anchor_size + progress * (self.pill_width - self.anchor_size),
            pill_translate_x: pill_value,
            icon_translate_x: icon_value,
            progress,
        }
    }
}
