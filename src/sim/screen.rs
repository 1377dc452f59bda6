//! Play / end screen state machine
//!
//! `Playing` owns the live session. When a run ends the session is dropped
//! and only a small report survives on the `Ended` screen; any key press
//! builds a brand new session.

use super::state::SessionState;
use super::tick::{EndReason, TickInput, tick};
use crate::tuning::Tuning;

/// Key presses the game distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Pause,
    ToggleAutopilot,
    /// Anything else (jumps while playing)
    Any,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Escape" | "p" | "P" => Key::Pause,
            "a" | "A" => Key::ToggleAutopilot,
            _ => Key::Any,
        }
    }
}

/// Summary of a finished run
#[derive(Debug, Clone, PartialEq)]
pub struct EndReport {
    pub reason: EndReason,
    pub seed: u64,
    pub distance: f32,
    pub ticks: u64,
}

/// The active screen
#[derive(Debug)]
pub enum Screen {
    Playing(Box<SessionState>),
    Ended(EndReport),
}

/// Top-level game: tuning, the current screen, and pending input
#[derive(Debug)]
pub struct Game {
    pub tuning: Tuning,
    pub screen: Screen,
    input: TickInput,
    runs: u32,
}

impl Game {
    /// Start playing immediately with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        log::info!("Run 1 started with seed: {}", seed);
        Self {
            screen: Screen::Playing(Box::new(SessionState::new(seed, &tuning))),
            tuning,
            input: TickInput::default(),
            runs: 1,
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.screen, Screen::Playing(_))
    }

    /// The live session, if playing
    pub fn session(&self) -> Option<&SessionState> {
        match &self.screen {
            Screen::Playing(state) => Some(state.as_ref()),
            Screen::Ended(_) => None,
        }
    }

    /// The last report, if on the end screen
    pub fn end_report(&self) -> Option<&EndReport> {
        match &self.screen {
            Screen::Playing(_) => None,
            Screen::Ended(report) => Some(report),
        }
    }

    /// Number of runs started so far
    pub fn runs(&self) -> u32 {
        self.runs
    }

    pub fn autopilot(&self) -> bool {
        self.input.autopilot
    }

    pub fn set_autopilot(&mut self, on: bool) {
        self.input.autopilot = on;
    }

    /// Handle a key press; on the end screen any key restarts with `restart_seed`
    pub fn key_down(&mut self, key: Key, restart_seed: u64) {
        if !self.is_playing() {
            self.restart(restart_seed);
            return;
        }

        match key {
            Key::Pause => self.input.pause = true,
            Key::ToggleAutopilot => {
                self.input.autopilot = !self.input.autopilot;
                log::info!("Autopilot: {}", self.input.autopilot);
            }
            Key::Any => self.input.jump = true,
        }
    }

    /// Throw away whatever is on screen and start a fresh run
    pub fn restart(&mut self, seed: u64) {
        self.screen = Screen::Playing(Box::new(SessionState::new(seed, &self.tuning)));
        self.input = TickInput {
            autopilot: self.input.autopilot,
            ..Default::default()
        };
        self.runs += 1;
        log::info!("Run {} started with seed: {}", self.runs, seed);
    }

    /// Advance one fixed tick; returns the report when the run just ended
    pub fn step(&mut self) -> Option<EndReport> {
        let Screen::Playing(state) = &mut self.screen else {
            return None;
        };

        let outcome = tick(state, &self.input, &self.tuning);

        // Clear one-shot inputs after processing
        self.input.jump = false;
        self.input.pause = false;

        let reason = outcome?;
        let report = EndReport {
            reason,
            seed: state.seed,
            distance: state.distance(),
            ticks: state.time_ticks,
        };
        log::info!(
            "Run {} ended ({}) after {} ticks, distance {:.0}",
            self.runs,
            reason.as_str(),
            report.ticks,
            report.distance
        );

        self.screen = Screen::Ended(report.clone());
        Some(report)
    }
}
