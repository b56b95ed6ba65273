//! Petal FAB
//!
//! The floating action button family:
//!
//! - **Fab**: a single pressable surface with a show / hide animation
//! - **AnimatedFab**: a FAB that extends into a pill to reveal its label
//! - **FabGroup**: a speed dial that unfurls a stack of actions over a backdrop
//!
//! Components are controlled. The parent owns `open`, `extended` and
//! `visible`; components animate toward whatever the parent passes in and
//! report user intent through callbacks. Rendering is left to the host:
//! every component exposes a `visual()` snapshot of the current frame.
//!
//! # Example
//!
//! ```rust
//! use petal_animation::AnimationScheduler;
//! use petal_fab::prelude::*;
//! use petal_theme::Theme;
//! use std::sync::Arc;
//!
//! let scheduler = AnimationScheduler::new();
//! let context = FabContext::new(scheduler.handle(), Arc::new(Theme::light()));
//!
//! let mut fab = AnimatedFab::mount(&context, AnimatedFabProps::new("plus", "Create"));
//! fab.on_label_layout(80.0, 20.0).unwrap();
//! fab.set_props(AnimatedFabProps::new("plus", "Create").extended(true));
//!
//! scheduler.run_until_idle(16.0, 100);
//! assert_eq!(fab.visual().pill_translate_x, -108.0);
//! ```

pub mod action;
pub mod animated_fab;
pub mod colors;
pub mod context;
pub mod error;
pub mod fab;
pub mod fab_group;
pub mod geometry;
pub mod plan;
pub mod progress;
mod visibility;

pub use action::FabAction;
pub use animated_fab::{AnimatedFab, AnimatedFabProps, AnimatedFabVisual, ExtendPhase, ANCHOR_SIZE};
pub use colors::{ColorOverrides, FabColors, FabVariant};
pub use context::FabContext;
pub use error::{FabError, Result};
pub use fab::{Accessibility, Fab, FabMode, FabProps, FabSize, FabVisual};
pub use fab_group::{
    ActionVisual, BackdropVisual, FabGroup, FabGroupChange, FabGroupProps, FabGroupVisual,
    GroupPhase,
};
pub use geometry::{
    resolve, AnimateFrom, Edge, ExtendFrame, ExtendGeometry, ExtendInput, ExtendOrigin, IconMode,
};
pub use plan::{ExtendTarget, GroupTarget};
pub use progress::ProgressArena;

/// Common imports
pub mod prelude {
    pub use crate::{
        AnimateFrom, AnimatedFab, AnimatedFabProps, ExtendPhase, ExtendTarget, Fab, FabAction,
        FabContext, FabError, FabGroup, FabGroupChange, FabGroupProps, FabMode, FabProps, FabSize,
        FabVariant, GroupPhase, IconMode,
    };
    pub use petal_core::{LayoutDirection, PressEvent};
}
