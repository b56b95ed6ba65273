//! Floating action button primitive
//!
//! A single circular (or pill, with a label) pressable surface with a
//! show / hide animation.
//!
//! # Example
//!
//! ```ignore
//! use petal_fab::prelude::*;
//!
//! let mut fab = Fab::mount(
//!     &context,
//!     FabProps::new("plus")
//!         .label("Create")
//!         .variant(FabVariant::Secondary)
//!         .on_press(|_| println!("create")),
//! )?;
//!
//! // Parent re-renders with new props
//! fab.set_props(FabProps::new("plus").visible(false))?;
//! ```

use crate::colors::{ColorOverrides, FabColors, FabVariant};
use crate::context::FabContext;
use crate::error::{FabError, Result};
use crate::visibility::Visibility;
use petal_core::{Color, PressCallback, PressEvent};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// FAB size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FabSize {
    /// 40 x 40
    Small,
    /// 56 x 56
    #[default]
    Medium,
    /// 96 x 96
    Large,
    /// Any positive diameter
    Custom(f32),
}

impl FabSize {
    /// Diameter in logical pixels
    pub fn dimension(self) -> Result<f32> {
        match self {
            FabSize::Small => Ok(40.0),
            FabSize::Medium => Ok(56.0),
            FabSize::Large => Ok(96.0),
            FabSize::Custom(size) if size.is_finite() && size > 0.0 => Ok(size),
            FabSize::Custom(size) => Err(FabError::InvalidSize(size)),
        }
    }

    /// Corner radius for the collapsed surface
    pub fn border_radius(self) -> Result<f32> {
        match self {
            FabSize::Small => Ok(12.0),
            FabSize::Medium => Ok(16.0),
            FabSize::Large => Ok(28.0),
            FabSize::Custom(_) => Ok(self.dimension()? / 3.5),
        }
    }
}

/// Surface elevation mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FabMode {
    Flat,
    #[default]
    Elevated,
}

impl FabMode {
    /// Elevation level (0 when disabled)
    pub fn elevation(self, disabled: bool) -> u8 {
        match (self, disabled) {
            (FabMode::Elevated, false) => 3,
            _ => 0,
        }
    }
}

/// Accessibility description of a pressable surface
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Accessibility {
    pub label: Option<String>,
    pub role: &'static str,
    pub disabled: bool,
    /// Set for surfaces that expand other content (a group's main button)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expanded: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
}

impl Accessibility {
    pub(crate) fn button(label: Option<String>, disabled: bool, test_id: Option<String>) -> Self {
        Self {
            label,
            role: "button",
            disabled,
            expanded: None,
            test_id,
        }
    }
}

/// Props of a [`Fab`]
#[derive(Clone)]
pub struct FabProps {
    icon: String,
    label: Option<String>,
    variant: FabVariant,
    mode: FabMode,
    size: FabSize,
    disabled: bool,
    visible: bool,
    colors: ColorOverrides,
    on_press: Option<PressCallback>,
    on_long_press: Option<PressCallback>,
    accessibility_label: Option<String>,
    test_id: Option<String>,
}

impl FabProps {
    pub fn new(icon: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            label: None,
            variant: FabVariant::default(),
            mode: FabMode::default(),
            size: FabSize::default(),
            disabled: false,
            visible: true,
            colors: ColorOverrides::default(),
            on_press: None,
            on_long_press: None,
            accessibility_label: None,
            test_id: None,
        }
    }

    /// Text shown next to the icon
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
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

    pub fn size(mut self, size: FabSize) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Icon and label color, replacing the variant's
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

    /// Screen-reader label (defaults to the text label)
    pub fn accessibility_label(mut self, label: impl Into<String>) -> Self {
        self.accessibility_label = Some(label.into());
        self
    }

    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id = Some(id.into());
        self
    }
}

/// Rendered state of a [`Fab`] for the current frame
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FabVisual {
    pub icon: String,
    pub label: Option<String>,
    /// Height; also the width when there is no label
    pub size: f32,
    pub border_radius: f32,
    pub colors: FabColors,
    pub elevation: u8,
    pub opacity: f32,
    pub scale: f32,
    /// Whether the surface accepts presses
    pub interactive: bool,
    pub accessibility: Accessibility,
}

/// A mounted floating action button
pub struct Fab {
    context: FabContext,
    props: FabProps,
    visibility: Visibility,
}

impl Fab {
    /// Mount with initial props; the initial visibility is not animated
    pub fn mount(context: &FabContext, props: FabProps) -> Result<Self> {
        props.size.dimension()?;
        Ok(Self {
            context: context.clone(),
            visibility: Visibility::new(context, props.visible),
            props,
        })
    }

    /// Apply new props from the parent
    pub fn set_props(&mut self, props: FabProps) -> Result<()> {
        props.size.dimension()?;
        self.visibility.set_visible(&self.context, props.visible);
        self.props = props;
        Ok(())
    }

    pub fn props(&self) -> &FabProps {
        &self.props
    }

    fn is_interactive(&self) -> bool {
        !self.props.disabled && self.visibility.is_visible()
    }

    /// Deliver a press; returns whether it was handled
    pub fn press(&self, event: &PressEvent) -> bool {
        if !self.is_interactive() {
            tracing::debug!("press ignored on inactive fab");
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

    /// Deliver a long press; returns whether it was handled
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

    /// Snapshot for drawing the current frame
    pub fn visual(&self) -> FabVisual {
        let props = &self.props;
        let progress = self.visibility.progress();
        let accessibility_label = props
            .accessibility_label
            .clone()
            .or_else(|| props.label.clone());

        FabVisual {
            icon: props.icon.clone(),
            label: props.label.clone(),
            // Validated on mount / set_props
            size: props.size.dimension().unwrap_or(56.0),
            border_radius: props.size.border_radius().unwrap_or(16.0),
            colors: FabColors::resolve(
                self.context.theme(),
                props.variant,
                props.disabled,
                props.colors,
            ),
            elevation: props.mode.elevation(props.disabled),
            opacity: progress,
            scale: progress,
            interactive: self.is_interactive(),
            accessibility: Accessibility::button(
                accessibility_label,
                props.disabled,
                props.test_id.clone(),
            ),
        }
    }
}
