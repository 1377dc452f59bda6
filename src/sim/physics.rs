//! Platformer stepping for the player box
//!
//! Motion is resolved one axis at a time: vertical first (gravity, landing,
//! head bumps), then horizontal (running into a platform's side). Platforms
//! are kept sorted by left edge, so only a contiguous slice is ever tested.

use glam::Vec2;

use super::level::Platform;
use super::rect::Rect;

/// What happened during one physics step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepEvents {
    /// Resting on (or came down onto) a platform this step
    pub landed: bool,
    /// Hit the underside of a platform
    pub bonked: bool,
    /// Horizontal motion was stopped by a platform side
    pub blocked: bool,
}

/// Platforms whose horizontal extent can touch `[left, right)`
pub fn candidates(platforms: &[Platform], left: f32, right: f32) -> &[Platform] {
    let start = platforms.partition_point(|p| p.rect.right() <= left);
    let end = platforms.partition_point(|p| p.rect.left < right);
    &platforms[start..end.max(start)]
}

fn overlapping<'a>(body: &'a Rect, platforms: &'a [Platform]) -> impl Iterator<Item = &'a Rect> + 'a {
    candidates(platforms, body.left, body.right())
        .iter()
        .map(|p| &p.rect)
        .filter(move |r| body.overlaps(r))
}

/// Advance `body` by `vel` under `gravity`, resolving collisions
pub fn step(body: &mut Rect, vel: &mut Vec2, platforms: &[Platform], gravity: f32) -> StepEvents {
    let mut events = StepEvents::default();

    vel.y -= gravity;

    // --- Vertical ---
    body.bottom += vel.y;
    if vel.y < 0.0 {
        let floor = overlapping(body, platforms).map(|r| r.top()).reduce(f32::max);
        if let Some(top) = floor {
            body.bottom = top;
            vel.y = 0.0;
            events.landed = true;
        }
    } else if vel.y > 0.0 {
        let ceiling = overlapping(body, platforms).map(|r| r.bottom).reduce(f32::min);
        if let Some(bottom) = ceiling {
            body.set_top(bottom);
            vel.y = 0.0;
            events.bonked = true;
        }
    }

    // --- Horizontal ---
    body.left += vel.x;
    if vel.x > 0.0 {
        let wall = overlapping(body, platforms).map(|r| r.left).reduce(f32::min);
        if let Some(left) = wall {
            body.set_right(left);
            events.blocked = true;
        }
    } else if vel.x < 0.0 {
        let wall = overlapping(body, platforms).map(|r| r.right()).reduce(f32::max);
        if let Some(right) = wall {
            body.left = right;
            events.blocked = true;
        }
    }

    events
}

/// Whether `body` is standing on a platform
pub fn can_jump(body: &Rect, platforms: &[Platform]) -> bool {
    let probe = body.translated(Vec2::new(0.0, -1.0));
    overlapping(&probe, platforms).next().is_some()
}
