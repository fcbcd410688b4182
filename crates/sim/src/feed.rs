use stickfight_shared::Controls;

/// Source of held controls for one fighter when no keyboard drives it.
///
/// Feeds are pure key timelines: they read the tick, never the opponent.
pub trait ControlFeed: Send {
    fn name(&self) -> &str;
    fn controls(&mut self, tick: u32) -> Controls;
}

/// Holds nothing, forever. Useful as a stationary target in tests.
pub struct IdleFeed;

impl ControlFeed for IdleFeed {
    fn name(&self) -> &str {
        "idle"
    }

    fn controls(&mut self, _tick: u32) -> Controls {
        Controls::none()
    }
}
