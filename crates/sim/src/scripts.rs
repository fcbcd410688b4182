use stickfight_shared::*;

use crate::feed::ControlFeed;

/// Walks straight at the far side of the arena while punching nonstop.
/// Closes on a stationary opponent and wins by knockout.
pub struct RusherFeed {
    dir: Facing,
}

impl RusherFeed {
    /// Feed for the given player slot: slot 0 rushes right, slot 1 left.
    pub fn for_slot(slot: usize) -> Self {
        let dir = if slot == 0 { Facing::Right } else { Facing::Left };
        Self { dir }
    }
}

impl ControlFeed for RusherFeed {
    fn name(&self) -> &str {
        "rusher"
    }

    fn controls(&mut self, _tick: u32) -> Controls {
        Controls {
            left: self.dir == Facing::Left,
            right: self.dir == Facing::Right,
            attack: true,
            ..Controls::none()
        }
    }
}

/// Paces up and down in place, jabbing on a fixed cycle. A moving target
/// that never closes distance.
pub struct DancerFeed;

impl ControlFeed for DancerFeed {
    fn name(&self) -> &str {
        "dancer"
    }

    fn controls(&mut self, tick: u32) -> Controls {
        let phase = tick % 120;
        Controls {
            up: phase < 60,
            down: phase >= 60,
            attack: tick % 45 == 0,
            ..Controls::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rusher_direction_per_slot() {
        let mut p0 = RusherFeed::for_slot(0);
        let c = p0.controls(0);
        assert!(c.right);
        assert!(!c.left);
        assert!(c.attack);

        let mut p1 = RusherFeed::for_slot(1);
        let c = p1.controls(0);
        assert!(c.left);
        assert!(!c.right);
        assert!(c.attack);
    }

    #[test]
    fn test_dancer_alternates_vertical_direction() {
        let mut dancer = DancerFeed;

        assert!(dancer.controls(0).up);
        assert!(!dancer.controls(0).down);
        assert!(dancer.controls(60).down);
        assert!(!dancer.controls(60).up);
        assert!(dancer.controls(120).up);
    }

    #[test]
    fn test_dancer_jabs_on_cycle() {
        let mut dancer = DancerFeed;

        assert!(dancer.controls(0).attack);
        assert!(!dancer.controls(1).attack);
        assert!(dancer.controls(45).attack);
        assert!(dancer.controls(90).attack);
    }

    #[test]
    fn test_feeds_never_move_horizontally_except_rusher() {
        let mut dancer = DancerFeed;
        for tick in 0..240 {
            let c = dancer.controls(tick);
            assert!(!c.left);
            assert!(!c.right);
        }
    }
}
