use crate::constants::{ANCHOR_X_FRACTION, ANCHOR_Y_FRACTION};
use glam::Vec2;

/// Element bounding box in viewport (client) pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }
}

/// Inner size of the browser window in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Fixed point every connector line ends at.
    #[inline]
    pub fn anchor(&self) -> Vec2 {
        Vec2::new(
            self.width * ANCHOR_X_FRACTION,
            self.height * ANCHOR_Y_FRACTION,
        )
    }
}
