//! Axis-aligned boxes for platforms and the player
//!
//! World coordinates are y-up: `bottom` is the lower edge, `top` the upper.

use glam::Vec2;

/// An axis-aligned rectangle anchored at its lower-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub bottom: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, bottom: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            bottom,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.bottom + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.bottom + self.height / 2.0)
    }

    pub fn set_right(&mut self, right: f32) {
        self.left = right - self.width;
    }

    pub fn set_top(&mut self, top: f32) {
        self.bottom = top - self.height;
    }

    /// Strict overlap test: boxes that only share an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left < other.right()
            && self.right() > other.left
            && self.bottom < other.top()
            && self.top() > other.bottom
    }

    /// Same box moved by `offset`
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            left: self.left + offset.x,
            bottom: self.bottom + offset.y,
            ..*self
        }
    }
}
