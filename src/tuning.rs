//! Data-driven gameplay tuning
//!
//! Everything that shapes how a run plays lives here so it can be tweaked
//! from a JSON file without rebuilding.

use serde::{Deserialize, Serialize};

use crate::consts::{MIN_PLATFORM_UNITS, UNIT};

/// Inclusive range of platform height levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelBand {
    pub min: i32,
    pub max: i32,
}

impl LevelBand {
    pub fn clamp(&self, level: i32) -> i32 {
        level.clamp(self.min, self.max)
    }
}

/// Gameplay constants for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Horizontal run speed (units per tick)
    pub run_speed: f32,
    /// Downward acceleration (units per tick²)
    pub gravity: f32,
    /// Upward velocity applied on jump
    pub jump_speed: f32,
    /// Player bottom at or below this ends the run
    pub fall_floor: f32,

    /// Distance between consecutive background tiles
    pub tile_pitch: f32,
    /// Length of one tile batch; also the tile counter threshold
    pub tile_span: f32,
    /// Visual scale of tiles
    pub tile_scale: f32,

    /// Platforms per generated batch
    pub level_batch: u32,
    /// Level counter threshold
    pub level_span: f32,
    /// Allowed height levels; `None` lets the walk drift freely
    pub level_band: Option<LevelBand>,

    /// Autopilot jumps when a higher platform is this close
    pub autopilot_lookahead: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            run_speed: 5.0,
            gravity: 1.0,
            jump_speed: 25.0,
            fall_floor: 100.0,

            tile_pitch: UNIT,
            tile_span: UNIT * 1000.0,
            tile_scale: 2.0,

            level_batch: 128,
            level_span: UNIT * 128.0,
            level_band: Some(LevelBand { min: -1, max: 4 }),

            autopilot_lookahead: 24.0,
        }
    }
}

impl Tuning {
    /// Environment variable naming a JSON tuning file (native only)
    pub const ENV_VAR: &'static str = "HEX_RUNNER_TUNING";

    /// Upper bound on tiles emitted by one batch
    pub const MAX_TILES_PER_BATCH: usize = 4096;

    /// Parse tuning from JSON; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    /// Repair values that would stall the generators or the physics
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !positive(self.run_speed) {
            log::warn!("run_speed {} must be positive, using {}", self.run_speed, defaults.run_speed);
            self.run_speed = defaults.run_speed;
        }
        if !positive(self.gravity) {
            log::warn!("gravity {} must be positive, using {}", self.gravity, defaults.gravity);
            self.gravity = defaults.gravity;
        }
        if !positive(self.jump_speed) {
            log::warn!("jump_speed {} must be positive, using {}", self.jump_speed, defaults.jump_speed);
            self.jump_speed = defaults.jump_speed;
        }
        if !self.fall_floor.is_finite() {
            log::warn!("fall_floor {} must be finite, using {}", self.fall_floor, defaults.fall_floor);
            self.fall_floor = defaults.fall_floor;
        }

        if !positive(self.tile_pitch) {
            log::warn!("tile_pitch {} must be positive, using {}", self.tile_pitch, defaults.tile_pitch);
            self.tile_pitch = defaults.tile_pitch;
        }
        if self.tile_span.is_nan() || self.tile_span < self.tile_pitch {
            log::warn!("tile_span {} shorter than one tile, using {}", self.tile_span, self.tile_pitch);
            self.tile_span = self.tile_pitch;
        }
        let longest_tile_span = self.tile_pitch * Self::MAX_TILES_PER_BATCH as f32;
        if self.tile_span > longest_tile_span {
            log::warn!(
                "tile_span {} exceeds {} tiles, using {}",
                self.tile_span,
                Self::MAX_TILES_PER_BATCH,
                longest_tile_span
            );
            self.tile_span = longest_tile_span;
        }

        if self.level_batch == 0 {
            log::warn!("level_batch must be at least 1, using {}", defaults.level_batch);
            self.level_batch = defaults.level_batch;
        }
        // A batch always covers at least this much ground
        let shortest_batch = self.level_batch as f32 * MIN_PLATFORM_UNITS as f32 * UNIT;
        if !positive(self.level_span) {
            let span = defaults.level_span.min(shortest_batch);
            log::warn!("level_span {} must be positive, using {}", self.level_span, span);
            self.level_span = span;
        } else if self.level_span > shortest_batch {
            log::warn!(
                "level_span {} outruns a {}-platform batch, using {}",
                self.level_span,
                self.level_batch,
                shortest_batch
            );
            self.level_span = shortest_batch;
        }
        if let Some(band) = self.level_band {
            if band.min > 0 || band.max < 0 {
                // The runway sits at level 0, so the band has to contain it
                log::warn!("level_band {:?} excludes level 0, using {:?}", band, defaults.level_band);
                self.level_band = defaults.level_band;
            }
        }
        self
    }

    /// Number of tiles in one batch
    pub fn tiles_per_batch(&self) -> usize {
        (self.tile_span / self.tile_pitch).ceil() as usize
    }

    /// Load tuning from the file named by `HEX_RUNNER_TUNING` (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_VAR) else {
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path);
                    tuning
                }
                Err(e) => {
                    log::warn!("Invalid tuning file {}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read tuning file {}: {}", path, e);
                Self::default()
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        Self::default()
    }
}

/// Finite and greater than zero
fn positive(x: f32) -> bool {
    x.is_finite() && x > 0.0
}
