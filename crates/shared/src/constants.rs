// Tick rate
pub const TICK_RATE: u32 = 60;
pub const TICK_DURATION_US: u64 = 16667;

// Match
pub const MATCH_DURATION_SECS: u32 = 60;
pub const MAX_TICKS: u32 = TICK_RATE * MATCH_DURATION_SECS; // 3600

// Arena (canvas coordinates: X grows right, Y grows down)
pub const DEFAULT_ARENA_WIDTH: f32 = 800.0;
pub const DEFAULT_ARENA_HEIGHT: f32 = 600.0;

// Fighter
pub const HEAD_RADIUS: f32 = 20.0;
pub const BODY_DEPTH: f32 = HEAD_RADIUS * 3.0; // head center to bottom of hit box
pub const MOVE_SPEED: f32 = 3.0; // px per tick
pub const MAX_HEALTH: u8 = 100;

// Attack
pub const ATTACK_SWING_TICKS: u32 = 15; // 0.25s at 60Hz
pub const ATTACK_DAMAGE: u8 = 10;
pub const PUNCH_REACH: f32 = HEAD_RADIUS * 1.5;
pub const PUNCH_HEIGHT: f32 = HEAD_RADIUS * 1.2; // below head center

// Walk animation
pub const WALK_PHASE_STEP: f32 = 0.2; // rad per tick while moving
pub const SWING_AMPLITUDE: f32 = 0.5;
pub const ARM_LENGTH: f32 = HEAD_RADIUS * 1.5;
pub const LEG_LENGTH: f32 = HEAD_RADIUS * 2.0;
pub const THIGH_FRAC: f32 = 0.6;
pub const SHIN_FRAC: f32 = 0.4;
pub const LEG_SEPARATION: f32 = std::f32::consts::PI / 6.0; // 30 degrees between legs at rest

// Spawns
pub const SPAWN_POSITIONS: [(f32, f32); 2] = [(150.0, 300.0), (650.0, 300.0)];
pub const FIGHTER_COLORS: [&str; 2] = ["blue", "red"];

// HUD
pub const HUD_BAR_WIDTH_FRAC: f32 = 0.3;
pub const HUD_BAR_HEIGHT: f32 = 20.0;
pub const HUD_BAR_Y: f32 = 20.0;
pub const HUD_BAR_X_FRACS: [f32; 2] = [0.1, 0.6];
pub const HUD_BG_COLOR: &str = "gray";
pub const HUD_BORDER_COLOR: &str = "black";
pub const HUD_TEXT_COLOR: &str = "white";
pub const HUD_FONT: &str = "16px Arial";
pub const HUD_LABEL_DX: f32 = -15.0; // from bar center
pub const HUD_LABEL_DY: f32 = 16.0; // from bar top

// Rendering
pub const LINE_WIDTH: f32 = 2.0;
pub const JOINT_RADIUS: f32 = 3.0;
