//! Hex Runner - an auto-running side-scroller
//!
//! Core modules:
//! - `sim`: Deterministic simulation (level streaming, physics, session state)
//! - `renderer`: WebGPU rendering pipeline
//! - `tuning`: Data-driven gameplay constants
//! - `settings`: Display preferences

pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Visible world area
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Base grid unit for platforms and tiles
    pub const UNIT: f32 = 64.0;

    /// Bottom edge of a level-0 platform
    pub const PLATFORM_BASE_Y: f32 = 194.0;
    /// Platform widths are drawn from this range of units (inclusive)
    pub const MIN_PLATFORM_UNITS: u32 = 2;
    pub const MAX_PLATFORM_UNITS: u32 = 6;

    /// Flat start area before the first generated batch
    pub const RUNWAY_SEGMENTS: u32 = 10;

    /// Player box edge length
    pub const PLAYER_SIZE: f32 = 48.0;
    /// Player spawn left edge (also the camera's lead-in offset)
    pub const PLAYER_START_X: f32 = 64.0;
    /// Spin while airborne (degrees per tick)
    pub const PLAYER_SPIN: f32 = 2.2;

    /// Hex tile visual size before scaling
    pub const TILE_BASE_SIZE: f32 = 32.0;
}
