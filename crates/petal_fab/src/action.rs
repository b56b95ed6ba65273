//! Speed-dial action items

use crate::fab::FabSize;
use petal_core::{Color, PressCallback, PressEvent};
use std::sync::Arc;

/// One action of a [`FabGroup`](crate::FabGroup)
///
/// Actions are identified by their position in the list, not by content.
#[derive(Clone)]
pub struct FabAction {
    pub(crate) icon: String,
    pub(crate) label: Option<String>,
    pub(crate) color: Option<Color>,
    pub(crate) background_color: Option<Color>,
    pub(crate) label_text_color: Option<Color>,
    pub(crate) size: FabSize,
    pub(crate) on_press: Option<PressCallback>,
    pub(crate) on_long_press: Option<PressCallback>,
    pub(crate) accessibility_label: Option<String>,
    pub(crate) test_id: Option<String>,
}

impl FabAction {
    pub fn new(icon: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            label: None,
            color: None,
            background_color: None,
            label_text_color: None,
            size: FabSize::Small,
            on_press: None,
            on_long_press: None,
            accessibility_label: None,
            test_id: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Icon color
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn background_color(mut self, color: impl Into<Color>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn label_text_color(mut self, color: impl Into<Color>) -> Self {
        self.label_text_color = Some(color.into());
        self
    }

    /// Button size (small by default)
    pub fn size(mut self, size: FabSize) -> Self {
        self.size = size;
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

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn label_text(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl std::fmt::Debug for FabAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FabAction")
            .field("icon", &self.icon)
            .field("label", &self.label)
            .field("size", &self.size)
            .field("has_on_press", &self.on_press.is_some())
            .finish_non_exhaustive()
    }
}
