//! Per-frame scene assembly
//!
//! Turns the current game screen into a clear color, a world-space viewport
//! and a triangle list. Pure CPU work so it can be tested without a GPU.

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{Game, Rect, Screen, SessionState, Viewport};

/// Height of the highlight strip along platform tops
const PLATFORM_TOP_STRIP: f32 = 8.0;

/// Everything the GPU needs for one frame
#[derive(Debug, Clone)]
pub struct Scene {
    pub clear_color: [f32; 4],
    pub viewport: Viewport,
    pub vertices: Vec<Vertex>,
}

/// Build the scene for whatever screen is active
pub fn build_scene(game: &Game, settings: &Settings) -> Scene {
    match &game.screen {
        Screen::Ended(_) => Scene {
            clear_color: colors::RED_DEVIL,
            viewport: Viewport::screen(),
            vertices: Vec::new(),
        },
        Screen::Playing(state) => Scene {
            clear_color: colors::SKY_BLUE,
            viewport: state.viewport,
            vertices: session_vertices(state, game.tuning.tile_pitch, settings),
        },
    }
}

fn session_vertices(state: &SessionState, tile_pitch: f32, settings: &Settings) -> Vec<Vertex> {
    let view = state.viewport;
    let mut vertices = Vec::new();

    if settings.background_tiles {
        for tile in &state.tiles {
            let half = tile.half_extent();
            let bounds = Rect::new(
                tile.center.x - half,
                tile.center.y - half,
                half * 2.0,
                half * 2.0,
            );
            if !view.intersects(&bounds) {
                continue;
            }
            let column = (tile.center.x / tile_pitch).round() as i64;
            let color = if column.rem_euclid(2) == 0 {
                colors::TILE
            } else {
                colors::TILE_ALT
            };
            vertices.extend(shapes::hexagon(tile.center, half, color));
        }
    }

    for platform in state.platforms.iter().filter(|p| view.intersects(&p.rect)) {
        let r = platform.rect;
        vertices.extend(shapes::rect(&r, colors::PLATFORM));
        let strip = Rect::new(r.left, r.top() - PLATFORM_TOP_STRIP, r.width, PLATFORM_TOP_STRIP);
        vertices.extend(shapes::rect(&strip, colors::PLATFORM_TOP));
    }

    let body = state.player.body;
    let angle = settings.effective_spin(state.player.angle);
    let half = PLAYER_SIZE / 2.0;
    vertices.extend(shapes::rotated_square(body.center(), half, angle, colors::PLAYER));
    vertices.extend(shapes::rotated_square(
        body.center(),
        half / 2.0,
        angle,
        colors::PLAYER_CORE,
    ));

    vertices
}
