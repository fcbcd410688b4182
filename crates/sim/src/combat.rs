use stickfight_shared::*;

/// Resolve one attacker-versus-defender check for the current tick.
///
/// A swing lands at most once: the first contact sets `hit_registered`
/// and the rest of the swing is skipped. Returns true when a hit landed.
pub fn check_attack(attacker: &mut FighterState, defender: &mut FighterState) -> bool {
    if !attacker.is_attacking() || attacker.hit_registered {
        return false;
    }

    if defender.body_box().contains(attacker.attack_point()) {
        defender.health = defender.health.saturating_sub(ATTACK_DAMAGE);
        attacker.hit_registered = true;
        return true;
    }

    false
}

/// Push overlapping fighters apart along the axis of smaller overlap,
/// half the overlap each. Equal overlaps resolve vertically.
pub fn separate_overlap(a: &mut FighterState, b: &mut FighterState) {
    let box_a = a.body_box();
    let box_b = b.body_box();

    let overlap_x = box_a.right.min(box_b.right) - box_a.left.max(box_b.left);
    let overlap_y = box_a.bottom.min(box_b.bottom) - box_a.top.max(box_b.top);

    if overlap_x <= 0.0 || overlap_y <= 0.0 {
        return;
    }

    if overlap_x < overlap_y {
        let push = overlap_x / 2.0;
        if a.position.x < b.position.x {
            a.position.x -= push;
            b.position.x += push;
        } else {
            a.position.x += push;
            b.position.x -= push;
        }
    } else {
        let push = overlap_y / 2.0;
        if a.position.y < b.position.y {
            a.position.y -= push;
            b.position.y += push;
        } else {
            a.position.y += push;
            b.position.y -= push;
        }
    }
}
