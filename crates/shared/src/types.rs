use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Current canvas extent. The interactive host reports the real size;
/// headless runs use the arena defaults.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: crate::DEFAULT_ARENA_WIDTH,
            height: crate::DEFAULT_ARENA_HEIGHT,
        }
    }
}

/// Last horizontal movement direction. Determines which side a punch
/// strikes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    pub fn sign(&self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

impl Default for Facing {
    fn default() -> Self {
        Facing::Right
    }
}

/// One tick's held controls for one fighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub attack: bool,
}

impl Controls {
    pub fn none() -> Self {
        Self {
            up: false,
            down: false,
            left: false,
            right: false,
            attack: false,
        }
    }

    pub fn any_movement(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self::none()
    }
}

/// Maps logical controls to physical key codes (browser `event.code`
/// tokens). Fixed per fighter at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlScheme {
    pub up: String,
    pub down: String,
    pub left: String,
    pub right: String,
    pub attack: String,
}

impl ControlScheme {
    pub fn wasd() -> Self {
        Self {
            up: "KeyW".into(),
            down: "KeyS".into(),
            left: "KeyA".into(),
            right: "KeyD".into(),
            attack: "KeyF".into(),
        }
    }

    pub fn arrows() -> Self {
        Self {
            up: "ArrowUp".into(),
            down: "ArrowDown".into(),
            left: "ArrowLeft".into(),
            right: "ArrowRight".into(),
            attack: "Enter".into(),
        }
    }

    /// The fixed player pair: WASD+F on the left, arrows+Enter on the right.
    pub fn default_pair() -> [ControlScheme; 2] {
        [ControlScheme::wasd(), ControlScheme::arrows()]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FighterState {
    /// Head center. Every other body point derives from it.
    pub position: Vec2,
    pub facing: Facing,
    pub health: u8,
    /// Swing countdown. Nonzero means mid-swing.
    pub attack_ticks: u32,
    /// Set on the swing's first landed hit, cleared when the swing ends.
    pub hit_registered: bool,
    pub walk_phase: f32,
}

impl FighterState {
    pub fn spawn(position: Vec2) -> Self {
        Self {
            position,
            facing: Facing::Right,
            health: crate::MAX_HEALTH,
            attack_ticks: 0,
            hit_registered: false,
            walk_phase: 0.0,
        }
    }

    pub fn is_attacking(&self) -> bool {
        self.attack_ticks > 0
    }

    /// Point the current swing strikes at: fist height, in front of the
    /// facing side.
    pub fn attack_point(&self) -> Vec2 {
        Vec2::new(
            self.position.x + self.facing.sign() * crate::PUNCH_REACH,
            self.position.y + crate::PUNCH_HEIGHT,
        )
    }

    /// Whole-body hit box (head through legs).
    pub fn body_box(&self) -> BodyBox {
        BodyBox {
            left: self.position.x - crate::HEAD_RADIUS,
            right: self.position.x + crate::HEAD_RADIUS,
            top: self.position.y - crate::HEAD_RADIUS,
            bottom: self.position.y + crate::BODY_DEPTH,
        }
    }
}

/// Axis-aligned hit box, inclusive on all edges.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BodyBox {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl BodyBox {
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }
}

/// Renderable skeleton, a pure function of position and walk phase.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pose {
    pub head: Vec2,
    pub neck: Vec2,
    pub hip: Vec2,
    pub hands: [Vec2; 2],
    pub knees: [Vec2; 2],
    pub feet: [Vec2; 2],
}

/// Primitive draw operations executed verbatim by the canvas client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    Clear,
    StrokeCircle {
        x: f32,
        y: f32,
        r: f32,
        color: String,
        width: f32,
    },
    FillCircle {
        x: f32,
        y: f32,
        r: f32,
        color: String,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: String,
        width: f32,
    },
    FillRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: String,
    },
    StrokeRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: String,
        width: f32,
    },
    Text {
        x: f32,
        y: f32,
        text: String,
        color: String,
        font: String,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FighterSnapshot {
    pub x: f32,
    pub y: f32,
    pub facing: Facing,
    pub health: u8,
    pub attacking: bool,
    pub walk_phase: f32,
}

impl From<&FighterState> for FighterSnapshot {
    fn from(s: &FighterState) -> Self {
        Self {
            x: s.position.x,
            y: s.position.y,
            facing: s.facing,
            health: s.health,
            attacking: s.is_attacking(),
            walk_phase: s.walk_phase,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub tick: u32,
    pub fighters: [FighterSnapshot; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Replay {
    pub config: MatchConfig,
    pub frames: Vec<FrameSnapshot>,
    pub result: MatchResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    pub p0_name: String,
    pub p1_name: String,
    pub width: f32,
    pub height: f32,
    pub max_ticks: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            p0_name: "p0".into(),
            p1_name: "p1".into(),
            width: crate::DEFAULT_ARENA_WIDTH,
            height: crate::DEFAULT_ARENA_HEIGHT,
            max_ticks: crate::MAX_TICKS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub reason: MatchEndReason,
    pub final_tick: u32,
    pub stats: MatchStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    Player0Win,
    Player1Win,
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEndReason {
    Knockout,
    Timeout,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatchStats {
    pub p0_health: u8,
    pub p1_health: u8,
    pub p0_hits: u32,
    pub p1_hits: u32,
    pub p0_swings: u32,
    pub p1_swings: u32,
}
