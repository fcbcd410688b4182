use stickfight_shared::*;

/// Currently-held controls for both fighters.
///
/// The host feeds raw key events in between ticks; the simulation reads
/// one snapshot per tick. Owned by the match state, so concurrent
/// sessions never share a key map.
#[derive(Debug, Clone)]
pub struct InputState {
    schemes: [ControlScheme; 2],
    held: [Controls; 2],
}

impl InputState {
    pub fn new() -> Self {
        Self::with_schemes(ControlScheme::default_pair())
    }

    pub fn with_schemes(schemes: [ControlScheme; 2]) -> Self {
        Self {
            schemes,
            held: [Controls::none(); 2],
        }
    }

    pub fn schemes(&self) -> &[ControlScheme; 2] {
        &self.schemes
    }

    /// Route a key-down event through both schemes. Codes outside every
    /// scheme are ignored.
    pub fn press(&mut self, code: &str) {
        self.route(code, true);
    }

    /// Route a key-up event through both schemes.
    pub fn release(&mut self, code: &str) {
        self.route(code, false);
    }

    fn route(&mut self, code: &str, down: bool) {
        for (scheme, held) in self.schemes.iter().zip(self.held.iter_mut()) {
            if code == scheme.up {
                held.up = down;
            } else if code == scheme.down {
                held.down = down;
            } else if code == scheme.left {
                held.left = down;
            } else if code == scheme.right {
                held.right = down;
            } else if code == scheme.attack {
                held.attack = down;
            }
        }
    }

    /// Overwrite one fighter's held controls (control feeds, tests).
    pub fn set_held(&mut self, fighter: usize, controls: Controls) {
        self.held[fighter] = controls;
    }

    pub fn held(&self, fighter: usize) -> Controls {
        self.held[fighter]
    }

    /// One consistent per-tick read of both fighters' controls.
    pub fn snapshot(&self) -> [Controls; 2] {
        self.held
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
