//! Petal Core
//!
//! Foundational types shared by the Petal crates:
//!
//! - **Color**: linear RGBA colors with hex constructors and interpolation
//! - **Layout Direction**: left-to-right / right-to-left writing direction
//! - **Events**: press and long-press events delivered by the host
//!
//! The host rendering framework owns layout, drawing and gesture recognition.
//! Petal components only consume the events defined here and produce plain
//! numeric snapshots for the host to draw.

pub mod color;
pub mod direction;
pub mod events;

pub use color::Color;
pub use direction::LayoutDirection;
pub use events::{Callback, PressCallback, PressEvent, PressKind};
