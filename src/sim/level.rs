//! Procedural level streaming
//!
//! Two generators keep the world ahead of the player:
//! - background tiles, emitted in evenly spaced fixed-length runs
//! - solid platforms, emitted as a bounded random walk of heights
//!
//! Both return a cursor so the next batch continues where the last ended.

use glam::Vec2;
use rand::Rng;

use super::rect::Rect;
use crate::consts::*;
use crate::tuning::{LevelBand, Tuning};

/// A decorative background tile (never collided with)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub center: Vec2,
    pub scale: f32,
}

impl Tile {
    /// Half of the drawn tile width
    pub fn half_extent(&self) -> f32 {
        TILE_BASE_SIZE * self.scale / 2.0
    }

    pub fn right(&self) -> f32 {
        self.center.x + self.half_extent()
    }
}

/// A solid platform segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    pub rect: Rect,
    /// Height level the segment was placed at
    pub level: i32,
}

impl Platform {
    /// Place a segment of `units` base units at `left` on height `level`
    pub fn at(left: f32, level: i32, units: u32) -> Self {
        Self {
            rect: Rect::new(
                left,
                PLATFORM_BASE_Y + level as f32 * UNIT,
                units as f32 * UNIT,
                UNIT,
            ),
            level,
        }
    }
}

/// Where the next tile batch would begin
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TileCursor {
    pub next_x: f32,
}

/// Where the next platform segment must begin to stay contiguous
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LevelCursor {
    pub next_x: f32,
    pub level: i32,
}

/// Random draws consumed by the level generator
///
/// Every `rand::Rng` provides these; tests substitute scripted sequences.
pub trait PlatformDraws {
    /// Platform width in base units, within [2, 6]
    fn width_units(&mut self) -> u32;
    /// Height change, one of -1, 0, +1
    fn level_delta(&mut self) -> i32;
}

impl<R: Rng + ?Sized> PlatformDraws for R {
    fn width_units(&mut self) -> u32 {
        self.random_range(MIN_PLATFORM_UNITS..=MAX_PLATFORM_UNITS)
    }

    fn level_delta(&mut self) -> i32 {
        self.random_range(-1..=1)
    }
}

/// Append one batch of background tiles starting at `start`
pub fn draw_tiles(tiles: &mut Vec<Tile>, start: f32, tuning: &Tuning) -> TileCursor {
    let count = tuning.tiles_per_batch();
    let y = SCREEN_HEIGHT / 2.0;

    tiles.reserve(count);
    for i in 0..count {
        tiles.push(Tile {
            center: Vec2::new(start + i as f32 * tuning.tile_pitch, y),
            scale: tuning.tile_scale,
        });
    }

    TileCursor {
        next_x: start + count as f32 * tuning.tile_pitch,
    }
}

/// Append `iterations` platforms as a bounded random walk from `cursor`
///
/// Each segment starts exactly where the previous one ended and sits at most
/// one level above or below it. With a band, levels are clamped into it.
pub fn generate_level<D: PlatformDraws + ?Sized>(
    platforms: &mut Vec<Platform>,
    cursor: LevelCursor,
    iterations: u32,
    band: Option<LevelBand>,
    draws: &mut D,
) -> LevelCursor {
    let mut next_x = cursor.next_x;
    let mut level = cursor.level;

    platforms.reserve(iterations as usize);
    for _ in 0..iterations {
        let units = draws.width_units();
        let delta = draws.level_delta();

        level += delta;
        if let Some(band) = band {
            level = band.clamp(level);
        }

        let platform = Platform::at(next_x, level, units);
        next_x = platform.rect.right();
        platforms.push(platform);
    }

    LevelCursor { next_x, level }
}

/// Lay the flat single-unit start area at level 0
pub fn runway(platforms: &mut Vec<Platform>) -> LevelCursor {
    for i in 0..RUNWAY_SEGMENTS {
        platforms.push(Platform::at(i as f32 * UNIT, 0, 1));
    }
    LevelCursor {
        next_x: RUNWAY_SEGMENTS as f32 * UNIT,
        level: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    /// Replays fixed draws, cycling when exhausted
    struct Scripted {
        widths: Vec<u32>,
        deltas: Vec<i32>,
        index: usize,
    }

    impl Scripted {
        fn new(widths: Vec<u32>, deltas: Vec<i32>) -> Self {
            Self {
                widths,
                deltas,
                index: 0,
            }
        }
    }

    impl PlatformDraws for Scripted {
        fn width_units(&mut self) -> u32 {
            self.widths[self.index % self.widths.len()]
        }

        fn level_delta(&mut self) -> i32 {
            let delta = self.deltas[self.index % self.deltas.len()];
            self.index += 1;
            delta
        }
    }

    #[test]
    fn test_scripted_flat_walk() {
        let mut platforms = Vec::new();
        let mut draws = Scripted::new(vec![2], vec![0]);

        let end = generate_level(&mut platforms, LevelCursor::default(), 3, None, &mut draws);

        let lefts: Vec<f32> = platforms.iter().map(|p| p.rect.left).collect();
        assert_eq!(lefts, vec![0.0, 128.0, 256.0]);
        for p in &platforms {
            assert_eq!(p.rect.bottom, PLATFORM_BASE_Y);
            assert_eq!(p.rect.width, 128.0);
            assert_eq!(p.rect.height, UNIT);
        }
        assert_eq!(end, LevelCursor { next_x: 384.0, level: 0 });
    }

    #[test]
    fn test_single_unit_segments_step_by_unit() {
        let mut platforms = Vec::new();
        let mut draws = Scripted::new(vec![1], vec![0]);

        let end = generate_level(&mut platforms, LevelCursor::default(), 3, None, &mut draws);

        let lefts: Vec<f32> = platforms.iter().map(|p| p.rect.left).collect();
        assert_eq!(lefts, vec![0.0, 64.0, 128.0]);
        assert!(platforms.iter().all(|p| p.rect.bottom == PLATFORM_BASE_Y));
        assert_eq!(end, LevelCursor { next_x: 192.0, level: 0 });
    }

    #[test]
    fn test_band_clamps_drift() {
        let mut platforms = Vec::new();
        let mut draws = Scripted::new(vec![3], vec![1]);
        let band = LevelBand { min: -1, max: 2 };

        let end = generate_level(&mut platforms, LevelCursor::default(), 6, Some(band), &mut draws);

        let levels: Vec<i32> = platforms.iter().map(|p| p.level).collect();
        assert_eq!(levels, vec![1, 2, 2, 2, 2, 2]);
        assert_eq!(end.level, 2);
    }

    #[test]
    fn test_unbounded_walk_drifts() {
        let mut platforms = Vec::new();
        let mut draws = Scripted::new(vec![2], vec![-1]);

        let end = generate_level(&mut platforms, LevelCursor::default(), 5, None, &mut draws);

        assert_eq!(end.level, -5);
        assert_eq!(platforms[4].rect.bottom, PLATFORM_BASE_Y - 5.0 * UNIT);
    }

    #[test]
    fn test_chained_batches_stay_contiguous() {
        let mut platforms = Vec::new();
        let mut rng = Pcg32::seed_from_u64(7);

        let cursor = runway(&mut platforms);
        let cursor = generate_level(&mut platforms, cursor, 16, None, &mut rng);
        let end = generate_level(&mut platforms, cursor, 16, None, &mut rng);

        for pair in platforms.windows(2) {
            assert_eq!(pair[0].rect.right(), pair[1].rect.left);
        }
        assert_eq!(platforms.last().unwrap().rect.right(), end.next_x);
    }

    #[test]
    fn test_runway_meets_first_batch() {
        let mut platforms = Vec::new();
        let cursor = runway(&mut platforms);

        assert_eq!(platforms.len(), RUNWAY_SEGMENTS as usize);
        assert_eq!(platforms[0].rect.left, 0.0);
        assert_eq!(cursor, LevelCursor { next_x: 640.0, level: 0 });
        assert!(platforms.iter().all(|p| p.level == 0));
    }

    #[test]
    fn test_draw_tiles_batch() {
        let tuning = Tuning::default();
        let mut tiles = Vec::new();

        let cursor = draw_tiles(&mut tiles, 320.0, &tuning);

        assert_eq!(tiles.len(), 1000);
        assert_eq!(tiles[0].center, Vec2::new(320.0, SCREEN_HEIGHT / 2.0));
        assert_eq!(tiles[1].center.x - tiles[0].center.x, tuning.tile_pitch);
        assert_eq!(tiles[999].center.x, 320.0 + 999.0 * 64.0);
        assert_eq!(cursor.next_x, 320.0 + 64_000.0);
        assert!(tiles.iter().all(|t| t.scale == tuning.tile_scale));
    }

    #[test]
    fn test_draw_tiles_is_additive() {
        let tuning = Tuning {
            tile_span: 256.0,
            ..Default::default()
        };
        let mut tiles = Vec::new();

        draw_tiles(&mut tiles, 0.0, &tuning);
        draw_tiles(&mut tiles, 256.0, &tuning);

        assert_eq!(tiles.len(), 8);
        assert_eq!(tiles[4].center.x, 256.0);
    }

    #[test]
    fn test_rng_draws_in_range() {
        let mut rng = Pcg32::seed_from_u64(99);
        for _ in 0..1000 {
            let units = rng.width_units();
            assert!((MIN_PLATFORM_UNITS..=MAX_PLATFORM_UNITS).contains(&units));
            assert!((-1..=1).contains(&rng.level_delta()));
        }
    }

    proptest! {
        #[test]
        fn prop_end_cursor_is_start_plus_widths(
            seed in any::<u64>(),
            start in -10_000i32..10_000,
            level in -20i32..20,
            iterations in 0u32..200,
        ) {
            let mut platforms = Vec::new();
            let mut rng = Pcg32::seed_from_u64(seed);
            let cursor = LevelCursor { next_x: start as f32, level };

            let end = generate_level(&mut platforms, cursor, iterations, None, &mut rng);

            let widths: f32 = platforms.iter().map(|p| p.rect.width).sum();
            prop_assert_eq!(platforms.len(), iterations as usize);
            prop_assert_eq!(end.next_x, start as f32 + widths);
            if let Some(first) = platforms.first() {
                prop_assert_eq!(first.rect.left, start as f32);
            }
            for pair in platforms.windows(2) {
                prop_assert_eq!(pair[0].rect.right(), pair[1].rect.left);
            }
        }

        #[test]
        fn prop_levels_walk_by_at_most_one(
            seed in any::<u64>(),
            iterations in 1u32..200,
            banded in any::<bool>(),
        ) {
            let mut platforms = Vec::new();
            let mut rng = Pcg32::seed_from_u64(seed);
            let band = banded.then_some(LevelBand { min: -1, max: 4 });

            let end = generate_level(&mut platforms, LevelCursor::default(), iterations, band, &mut rng);

            prop_assert!(platforms[0].level.abs() <= 1);
            for pair in platforms.windows(2) {
                prop_assert!((pair[1].level - pair[0].level).abs() <= 1);
            }
            for p in &platforms {
                let units = p.rect.width / UNIT;
                prop_assert!((2.0..=6.0).contains(&units));
                if let Some(band) = band {
                    prop_assert!(p.level >= band.min && p.level <= band.max);
                }
            }
            prop_assert_eq!(end.level, platforms.last().unwrap().level);
        }
    }
}
