use crate::models::Geometry;
use serde::{Deserialize, Serialize};

/// The dimensions of the managed screen.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default)]
pub struct Screen {
    pub width: u32,
    pub height: u32,
}

impl Screen {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The area left for clients once `bar_height` pixels are reserved.
    #[must_use]
    pub fn drawable(&self, bar_height: u32, bar_bottom: bool) -> Geometry {
        Geometry {
            x: 0,
            y: if bar_bottom { 0 } else { bar_height as i32 },
            w: self.width,
            h: self.height.saturating_sub(bar_height),
        }
    }
}
