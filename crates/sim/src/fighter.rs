use glam::Vec2;
use stickfight_shared::*;

/// Advance one fighter by one tick from its held controls.
///
/// Returns true when this step started a new swing.
pub fn step(f: &mut FighterState, held: Controls, bounds: Bounds) -> bool {
    // Movement. The right branch runs after left, so right wins the facing
    // write when both are held.
    if held.left {
        f.position.x -= MOVE_SPEED;
        f.facing = Facing::Left;
    }
    if held.right {
        f.position.x += MOVE_SPEED;
        f.facing = Facing::Right;
    }
    if held.up {
        f.position.y -= MOVE_SPEED;
    }
    if held.down {
        f.position.y += MOVE_SPEED;
    }

    if held.any_movement() {
        f.walk_phase += WALK_PHASE_STEP;
    } else {
        f.walk_phase = 0.0;
    }

    // Trigger, then count down in the same tick. A held attack key
    // re-triggers the tick after a swing ends.
    let mut swing_started = false;
    if held.attack && !f.is_attacking() {
        f.attack_ticks = ATTACK_SWING_TICKS;
        swing_started = true;
    }
    if f.attack_ticks > 0 {
        f.attack_ticks -= 1;
        if f.attack_ticks == 0 {
            f.hit_registered = false;
        }
    }

    apply_bounds(f, bounds);

    swing_started
}

/// Clamp the fighter into the canvas: full head above, full body height
/// below.
fn apply_bounds(f: &mut FighterState, bounds: Bounds) {
    f.position.x = f.position.x.min(bounds.width - HEAD_RADIUS).max(HEAD_RADIUS);
    f.position.y = f.position.y.min(bounds.height - BODY_DEPTH).max(HEAD_RADIUS);
}

/// Build the renderable skeleton from position and walk phase.
pub fn pose(f: &FighterState) -> Pose {
    use std::f32::consts::{FRAC_PI_2, PI};

    let head = f.position;
    let neck = head + Vec2::new(0.0, HEAD_RADIUS);
    let hip = head + Vec2::new(0.0, HEAD_RADIUS * 2.0);

    // Arms swing in opposition around the neck.
    let arm = |angle: f32, side: f32| {
        neck + Vec2::new(side * ARM_LENGTH * angle.cos(), ARM_LENGTH * angle.sin())
    };
    let hands = [
        arm(f.walk_phase.sin() * SWING_AMPLITUDE, -1.0),
        arm((f.walk_phase + PI).sin() * SWING_AMPLITUDE, 1.0),
    ];

    // Legs hang from the hip, split around straight down, thigh and shin
    // collinear.
    let swing = f.walk_phase.sin() * SWING_AMPLITUDE;
    let leg = |angle: f32| {
        let dir = Vec2::new(angle.cos(), angle.sin());
        let knee = hip + dir * (LEG_LENGTH * THIGH_FRAC);
        let foot = knee + dir * (LEG_LENGTH * SHIN_FRAC);
        (knee, foot)
    };
    let (left_knee, left_foot) = leg(FRAC_PI_2 + LEG_SEPARATION / 2.0 + swing);
    let (right_knee, right_foot) = leg(FRAC_PI_2 - LEG_SEPARATION / 2.0 - swing);

    Pose {
        head,
        neck,
        hip,
        hands,
        knees: [left_knee, right_knee],
        feet: [left_foot, right_foot],
    }
}
