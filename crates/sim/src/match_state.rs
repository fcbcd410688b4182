use glam::Vec2;
use stickfight_shared::*;

use crate::combat::{check_attack, separate_overlap};
use crate::fighter;
use crate::input::InputState;

/// Full simulation state for one bout.
///
/// Owns both fighters and the input map; nothing lives in globals, so
/// independent matches can run side by side.
#[derive(Debug, Clone)]
pub struct MatchState {
    pub fighters: [FighterState; 2],
    pub input: InputState,
    pub bounds: Bounds,
    pub tick: u32,
    pub stats: MatchStats,
}

impl MatchState {
    pub fn new() -> Self {
        Self::with_bounds(Bounds::default())
    }

    pub fn with_bounds(bounds: Bounds) -> Self {
        let [p0, p1] = SPAWN_POSITIONS;
        Self {
            fighters: [
                FighterState::spawn(Vec2::new(p0.0, p0.1)),
                FighterState::spawn(Vec2::new(p1.0, p1.1)),
            ],
            input: InputState::new(),
            bounds,
            tick: 0,
            stats: MatchStats {
                p0_health: MAX_HEALTH,
                p1_health: MAX_HEALTH,
                p0_hits: 0,
                p1_hits: 0,
                p0_swings: 0,
                p1_swings: 0,
            },
        }
    }

    /// Host resize hook. The next tick's clamp pulls fighters into the
    /// new extent.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    /// Advance one simulation tick: move both fighters from the held
    /// controls, resolve attacks in both directions, then push apart any
    /// body overlap.
    pub fn step(&mut self) {
        let held = self.input.snapshot();

        if fighter::step(&mut self.fighters[0], held[0], self.bounds) {
            self.stats.p0_swings += 1;
        }
        if fighter::step(&mut self.fighters[1], held[1], self.bounds) {
            self.stats.p1_swings += 1;
        }

        let [f0, f1] = &mut self.fighters;
        if check_attack(f0, f1) {
            self.stats.p0_hits += 1;
        }
        if check_attack(f1, f0) {
            self.stats.p1_hits += 1;
        }
        separate_overlap(f0, f1);

        self.stats.p0_health = self.fighters[0].health;
        self.stats.p1_health = self.fighters[1].health;

        self.tick += 1;
    }

    /// Either fighter is out of health. The core keeps stepping past this;
    /// drivers decide whether it ends the bout.
    pub fn is_knockout(&self) -> bool {
        self.fighters[0].health == 0 || self.fighters[1].health == 0
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            tick: self.tick,
            fighters: [
                FighterSnapshot::from(&self.fighters[0]),
                FighterSnapshot::from(&self.fighters[1]),
            ],
        }
    }

    /// Knockout beats timeout; a timeout goes to the higher health.
    pub fn outcome(&self) -> (MatchOutcome, MatchEndReason) {
        let p0_down = self.fighters[0].health == 0;
        let p1_down = self.fighters[1].health == 0;

        if p0_down && p1_down {
            (MatchOutcome::Draw, MatchEndReason::Knockout)
        } else if p1_down {
            (MatchOutcome::Player0Win, MatchEndReason::Knockout)
        } else if p0_down {
            (MatchOutcome::Player1Win, MatchEndReason::Knockout)
        } else {
            let p0 = self.fighters[0].health;
            let p1 = self.fighters[1].health;
            if p0 > p1 {
                (MatchOutcome::Player0Win, MatchEndReason::Timeout)
            } else if p1 > p0 {
                (MatchOutcome::Player1Win, MatchEndReason::Timeout)
            } else {
                (MatchOutcome::Draw, MatchEndReason::Timeout)
            }
        }
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}
