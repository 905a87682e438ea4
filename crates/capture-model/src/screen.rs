//! Capturable screen regions.

use serde::{Deserialize, Serialize};

/// A connected display, as reported by the platform enumerator.
///
/// Immutable once parsed; exactly one screen is resolved per session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screen {
    /// Output name (e.g., "eDP-1"). Unique among candidates.
    pub name: String,

    /// Resolution in pixels.
    pub width: u32,
    pub height: u32,

    /// Position in the virtual desktop (pixels).
    pub offset_x: i32,
    pub offset_y: i32,

    /// Whether this is the primary display.
    pub primary: bool,
}

impl Screen {
    /// Geometry in the conventional `WxH+X+Y` form.
    pub fn geometry(&self) -> String {
        format!(
            "{}x{}+{}+{}",
            self.width, self.height, self.offset_x, self.offset_y
        )
    }

    /// Menu label for the interactive chooser.
    pub fn label(&self) -> String {
        if self.primary {
            format!("{} {} (primary)", self.name, self.geometry())
        } else {
            format!("{} {}", self.name, self.geometry())
        }
    }
}
