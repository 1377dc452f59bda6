//! Fixed timestep simulation tick
//!
//! One call advances a session by exactly one frame.

use super::camera::Viewport;
use super::physics;
use super::state::SessionState;
use crate::tuning::Tuning;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump if standing on a platform
    pub jump: bool,
    /// Pause toggle
    pub pause: bool,
    /// Jump automatically in front of higher platforms
    pub autopilot: bool,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Horizontal position did not change over a tick
    Stalled,
    /// Dropped to or below the fall floor
    Fell,
}

impl EndReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndReason::Stalled => "stalled",
            EndReason::Fell => "fell",
        }
    }
}

/// Advance the session by one tick
///
/// Returns the end reason once the run is over; the session must not be
/// ticked again after that.
pub fn tick(state: &mut SessionState, input: &TickInput, tuning: &Tuning) -> Option<EndReason> {
    if input.pause {
        state.paused = !state.paused;
        log::info!("{}", if state.paused { "Paused" } else { "Resumed" });
    }
    if state.paused {
        return None;
    }

    state.time_ticks += 1;

    let wants_jump = input.jump || (input.autopilot && autopilot_wants_jump(state, tuning));
    if wants_jump && state.grounded() {
        state.player.vel.y = tuning.jump_speed;
    }

    state.player.vel.x = tuning.run_speed;
    let events = physics::step(
        &mut state.player.body,
        &mut state.player.vel,
        &state.platforms,
        tuning.gravity,
    );

    let left = state.player.body.left;
    if left == state.previous_left {
        return Some(EndReason::Stalled);
    }
    let advance = left - state.previous_left;
    state.previous_left = left;

    state.player.update_spin(events.landed);

    if state.player.body.bottom <= tuning.fall_floor {
        return Some(EndReason::Fell);
    }

    state.viewport = Viewport::following(left);

    state.tile_advance += advance;
    state.level_advance += advance;
    if state.tile_advance > tuning.tile_span {
        state.tile_advance = 0.0;
        state.spawn_tiles(state.viewport.left, tuning);
    }
    if state.level_advance > tuning.level_span {
        state.level_advance = 0.0;
        state.extend_level(tuning);
    }

    state.cull_behind_viewport();

    None
}

/// A platform rising above the player's feet is within look-ahead range
fn autopilot_wants_jump(state: &SessionState, tuning: &Tuning) -> bool {
    let body = &state.player.body;
    let reach = body.right() + tuning.autopilot_lookahead;
    physics::candidates(&state.platforms, body.right(), reach)
        .iter()
        .any(|p| p.rect.top() > body.bottom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::level::Platform;

    fn session() -> SessionState {
        SessionState::new(12345, &Tuning::default())
    }

    /// Runway followed by a one-level step up at x=640
    fn step_course(state: &mut SessionState) {
        state.platforms.truncate(RUNWAY_SEGMENTS as usize);
        for i in 0..20 {
            state
                .platforms
                .push(Platform::at(640.0 + i as f32 * UNIT, 1, 1));
        }
    }

    #[test]
    fn test_runs_right_on_flat_ground() {
        let mut state = session();
        let tuning = Tuning::default();

        for _ in 0..10 {
            assert_eq!(tick(&mut state, &TickInput::default(), &tuning), None);
        }

        assert_eq!(state.player.body.left, PLAYER_START_X + 50.0);
        assert_eq!(state.player.body.bottom, PLATFORM_BASE_Y + UNIT);
        assert_eq!(state.time_ticks, 10);
        assert_eq!(state.viewport.left, 50.0);
    }

    #[test]
    fn test_unchanged_left_ends_stalled() {
        let mut state = session();
        let tuning = Tuning::default();
        state.platforms.truncate(2);
        state.platforms.push(Platform::at(128.0, 1, 2));
        state.player.body.set_right(128.0);
        state.previous_left = state.player.body.left;

        let outcome = tick(&mut state, &TickInput::default(), &tuning);

        assert_eq!(outcome, Some(EndReason::Stalled));
    }

    #[test]
    fn test_wall_contact_stalls_on_following_tick() {
        let mut state = session();
        let tuning = Tuning::default();
        state.platforms.truncate(3);
        state.platforms.push(Platform::at(192.0, 1, 2));
        // Two units short of the wall
        state.player.body.set_right(190.0);
        state.previous_left = state.player.body.left;

        assert_eq!(tick(&mut state, &TickInput::default(), &tuning), None);
        assert_eq!(state.player.body.right(), 192.0);
        assert_eq!(
            tick(&mut state, &TickInput::default(), &tuning),
            Some(EndReason::Stalled)
        );
    }

    #[test]
    fn test_low_bottom_ends_fell() {
        let mut state = session();
        let tuning = Tuning::default();
        state.platforms.clear();
        state.player.body.bottom = tuning.fall_floor + 1.0;

        let outcome = tick(&mut state, &TickInput::default(), &tuning);

        assert_eq!(outcome, Some(EndReason::Fell));
        // Horizontal progress does not save the run
        assert!(state.player.body.left > PLAYER_START_X);
    }

    #[test]
    fn test_bottom_above_floor_keeps_running() {
        let mut state = session();
        let tuning = Tuning::default();
        state.platforms.clear();
        state.player.body.bottom = tuning.fall_floor + 2.0;

        assert_eq!(tick(&mut state, &TickInput::default(), &tuning), None);
    }

    #[test]
    fn test_tile_generator_fires_once_per_span() {
        let tuning = Tuning {
            tile_span: 22.0,
            ..Default::default()
        };
        let mut state = SessionState::new(1, &tuning);

        let mut fired_at = Vec::new();
        for t in 1..=50u64 {
            let cursor = state.tile_cursor;
            assert_eq!(tick(&mut state, &TickInput::default(), &tuning), None);
            if state.tile_cursor != cursor {
                fired_at.push(t);
                assert_eq!(state.tile_advance, 0.0);
                assert_eq!(state.tile_cursor.next_x, state.viewport.left + tuning.tile_pitch);
            }
        }

        // 5 units per tick: the counter first exceeds 22 on the fifth tick
        assert_eq!(fired_at, vec![5, 10, 15, 20, 25, 30, 35, 40, 45, 50]);
    }

    #[test]
    fn test_level_generator_extends_ahead() {
        let tuning = Tuning {
            level_span: 100.0,
            ..Default::default()
        };
        let mut state = SessionState::new(2, &tuning);
        let cursor = state.level_cursor;

        for _ in 0..20 {
            tick(&mut state, &TickInput::default(), &tuning);
        }
        assert_eq!(state.level_cursor, cursor);
        assert_eq!(state.level_advance, 100.0);

        tick(&mut state, &TickInput::default(), &tuning);
        assert_eq!(state.level_advance, 0.0);
        assert!(state.level_cursor.next_x > cursor.next_x);
        for pair in state.platforms.windows(2) {
            assert_eq!(pair[0].rect.right(), pair[1].rect.left);
        }
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let mut state = session();
        let tuning = Tuning::default();
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };

        tick(&mut state, &jump, &tuning);
        assert_eq!(state.player.vel.y, tuning.jump_speed - tuning.gravity);
        let height = state.player.body.bottom;

        // Mid-air jump requests are ignored
        tick(&mut state, &jump, &tuning);
        assert_eq!(state.player.vel.y, tuning.jump_speed - 2.0 * tuning.gravity);
        assert!(state.player.body.bottom > height);
        assert!(state.player.angle < 0.0);
    }

    #[test]
    fn test_pause_freezes_session() {
        let mut state = session();
        let tuning = Tuning::default();
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };

        tick(&mut state, &pause, &tuning);
        assert!(state.paused);
        let left = state.player.body.left;

        for _ in 0..5 {
            assert_eq!(tick(&mut state, &TickInput::default(), &tuning), None);
        }
        assert_eq!(state.player.body.left, left);

        tick(&mut state, &pause, &tuning);
        assert!(!state.paused);
        assert!(state.player.body.left > left);
    }

    #[test]
    fn test_step_up_stalls_without_jump() {
        let mut state = session();
        let tuning = Tuning::default();
        step_course(&mut state);

        let outcome = (0..200).find_map(|_| tick(&mut state, &TickInput::default(), &tuning));

        assert_eq!(outcome, Some(EndReason::Stalled));
        assert_eq!(state.player.body.right(), 640.0);
    }

    #[test]
    fn test_autopilot_clears_step() {
        let mut state = session();
        let tuning = Tuning::default();
        step_course(&mut state);
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };

        for _ in 0..200 {
            assert_eq!(tick(&mut state, &input, &tuning), None);
        }

        assert!(state.player.body.left > 640.0);
        assert_eq!(state.player.body.bottom, PLATFORM_BASE_Y + 2.0 * UNIT);
        assert!(state.grounded());
    }

    #[test]
    fn test_determinism() {
        let tuning = Tuning::default();
        let mut state1 = SessionState::new(99999, &tuning);
        let mut state2 = SessionState::new(99999, &tuning);

        let inputs = [
            TickInput::default(),
            TickInput {
                jump: true,
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                autopilot: true,
                ..Default::default()
            },
        ];

        for _ in 0..100 {
            for input in &inputs {
                let a = tick(&mut state1, input, &tuning);
                let b = tick(&mut state2, input, &tuning);
                assert_eq!(a, b);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.player, state2.player);
        assert_eq!(state1.platforms, state2.platforms);
    }
}
