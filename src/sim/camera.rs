//! World-space viewport

use super::rect::Rect;
use crate::consts::*;

/// Visible world rectangle as (left, right, bottom, top)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Viewport {
    pub const fn new(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
        }
    }

    /// Fixed viewport used by non-scrolling screens
    pub const fn screen() -> Self {
        Self::new(0.0, SCREEN_WIDTH - 1.0, 0.0, SCREEN_HEIGHT - 1.0)
    }

    /// Viewport that keeps the player at its spawn offset from the left edge
    pub fn following(player_left: f32) -> Self {
        let left = player_left - PLAYER_START_X;
        Self::new(left, left + SCREEN_WIDTH, 0.0, SCREEN_HEIGHT)
    }

    /// Whether any part of `rect` is inside the viewport
    pub fn intersects(&self, rect: &Rect) -> bool {
        rect.right() > self.left
            && rect.left < self.right
            && rect.top() > self.bottom
            && rect.bottom < self.top
    }

    /// Whether something ending at `right` has scrolled fully out on the left
    pub fn is_behind(&self, right: f32) -> bool {
        right < self.left
    }
}
