//! Session state
//!
//! Everything a single run owns. A session is built once when play starts,
//! mutated by `tick`, and dropped wholesale when the run ends.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::camera::Viewport;
use super::level::{LevelCursor, Platform, Tile, TileCursor, draw_tiles, generate_level, runway};
use super::physics;
use super::rect::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// The auto-running player
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub body: Rect,
    pub vel: Vec2,
    /// Spin in degrees (counter-clockwise positive)
    pub angle: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            body: Rect::new(
                PLAYER_START_X,
                PLATFORM_BASE_Y + UNIT,
                PLAYER_SIZE,
                PLAYER_SIZE,
            ),
            vel: Vec2::ZERO,
            angle: 0.0,
        }
    }
}

impl Player {
    /// Spin while airborne, settle flat on landing
    pub fn update_spin(&mut self, grounded: bool) {
        if grounded {
            self.angle -= self.angle.rem_euclid(90.0);
        } else {
            self.angle -= PLAYER_SPIN;
        }
    }
}

/// All state for one run
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub paused: bool,

    pub player: Player,
    /// Player left edge after the previous tick
    pub previous_left: f32,

    pub tiles: Vec<Tile>,
    /// Sorted by left edge, contiguous
    pub platforms: Vec<Platform>,

    pub tile_cursor: TileCursor,
    pub level_cursor: LevelCursor,

    /// Forward movement since the last tile batch
    pub tile_advance: f32,
    /// Forward movement since the last platform batch
    pub level_advance: f32,

    pub viewport: Viewport,
}

impl SessionState {
    /// Build a fresh session with the given seed
    pub fn new(seed: u64, tuning: &Tuning) -> Self {
        let player = Player::default();
        let previous_left = player.body.left;
        let viewport = Viewport::following(player.body.left);

        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            paused: false,
            player,
            previous_left,
            tiles: Vec::new(),
            platforms: Vec::new(),
            tile_cursor: TileCursor::default(),
            level_cursor: LevelCursor::default(),
            tile_advance: 0.0,
            level_advance: 0.0,
            viewport,
        };

        state.spawn_tiles(viewport.left, tuning);
        state.level_cursor = runway(&mut state.platforms);
        state.extend_level(tuning);

        state
    }

    /// Append one batch of platforms at the level cursor
    pub fn extend_level(&mut self, tuning: &Tuning) {
        let before = self.platforms.len();
        self.level_cursor = generate_level(
            &mut self.platforms,
            self.level_cursor,
            tuning.level_batch,
            tuning.level_band,
            &mut self.rng,
        );
        log::debug!(
            "Generated {} platforms, cursor at x={} level={}",
            self.platforms.len() - before,
            self.level_cursor.next_x,
            self.level_cursor.level
        );
    }

    /// Append one batch of tiles starting at `start`
    pub fn spawn_tiles(&mut self, start: f32, tuning: &Tuning) {
        self.tile_cursor = draw_tiles(&mut self.tiles, start, tuning);
        log::debug!(
            "Drew tiles from x={} to x={} ({} live)",
            start,
            self.tile_cursor.next_x,
            self.tiles.len()
        );
    }

    /// Drop segments that have scrolled out on the left
    pub fn cull_behind_viewport(&mut self) {
        let view = self.viewport;
        self.tiles.retain(|t| !view.is_behind(t.right()));
        self.platforms.retain(|p| !view.is_behind(p.rect.right()));
    }

    /// Whether the player is standing on a platform
    pub fn grounded(&self) -> bool {
        physics::can_jump(&self.player.body, &self.platforms)
    }

    /// Horizontal distance covered since spawn
    pub fn distance(&self) -> f32 {
        self.player.body.left - PLAYER_START_X
    }
}
