use stickfight_shared::*;

use crate::feed::ControlFeed;
use crate::match_state::MatchState;

/// Run a deterministic headless bout between two control feeds.
///
/// Records every tick as a frame. Ends on knockout or at `max_ticks`,
/// whichever comes first.
pub fn run_match(
    config: &MatchConfig,
    p0: &mut dyn ControlFeed,
    p1: &mut dyn ControlFeed,
) -> Replay {
    let mut state = MatchState::with_bounds(Bounds::new(config.width, config.height));
    let mut frames = Vec::new();

    // Capture initial frame
    frames.push(state.snapshot());

    for tick in 0..config.max_ticks {
        state.input.set_held(0, p0.controls(tick));
        state.input.set_held(1, p1.controls(tick));
        state.step();

        frames.push(state.snapshot());

        if state.is_knockout() {
            break;
        }
    }

    let (outcome, reason) = state.outcome();

    Replay {
        config: config.clone(),
        frames,
        result: MatchResult {
            outcome,
            reason,
            final_tick: state.tick,
            stats: state.stats,
        },
    }
}
