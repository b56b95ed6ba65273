//! Writing direction supplied by the host environment

use serde::{Deserialize, Serialize};

/// Horizontal writing direction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutDirection {
    /// Left-to-right (default)
    #[default]
    Ltr,
    /// Right-to-left; "start" and "end" edges are mirrored
    Rtl,
}

impl LayoutDirection {
    pub fn is_rtl(self) -> bool {
        matches!(self, LayoutDirection::Rtl)
    }
}
