//! Press events delivered by the host gesture layer

use std::sync::Arc;

/// Kind of press recognized by the host
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressKind {
    Press,
    LongPress,
}

/// A press on a component surface
///
/// Coordinates are relative to the pressed surface, in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PressEvent {
    pub kind: PressKind,
    pub x: f32,
    pub y: f32,
}

impl PressEvent {
    pub fn press() -> Self {
        Self {
            kind: PressKind::Press,
            x: 0.0,
            y: 0.0,
        }
    }

    pub fn long_press() -> Self {
        Self {
            kind: PressKind::LongPress,
            x: 0.0,
            y: 0.0,
        }
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }
}

/// Shared press handler
pub type PressCallback = Arc<dyn Fn(&PressEvent) + Send + Sync>;

/// Shared handler receiving a value
pub type Callback<T> = Arc<dyn Fn(T) + Send + Sync>;
