//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, fixed step sizes
//! - Seeded RNG only
//! - Platforms kept in ascending left-edge order
//! - No rendering or platform dependencies

pub mod camera;
pub mod level;
pub mod physics;
pub mod rect;
pub mod screen;
pub mod state;
pub mod tick;

pub use camera::Viewport;
pub use level::{LevelCursor, Platform, PlatformDraws, Tile, TileCursor, draw_tiles, generate_level, runway};
pub use physics::{StepEvents, can_jump};
pub use rect::Rect;
pub use screen::{EndReport, Game, Key, Screen};
pub use state::{Player, SessionState};
pub use tick::{EndReason, TickInput, tick};
