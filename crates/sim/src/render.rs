use stickfight_shared::*;

use crate::fighter::pose;
use crate::hud::draw_hud;
use crate::match_state::MatchState;

/// External 2D drawing surface. The simulation emits primitives through
/// this seam; the pixels belong to the host.
pub trait Surface {
    fn clear(&mut self);
    fn stroke_circle(&mut self, x: f32, y: f32, r: f32, color: &str, width: f32);
    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: &str);
    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: &str, width: f32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str);
    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str, width: f32);
    fn text(&mut self, x: f32, y: f32, text: &str, color: &str, font: &str);
}

/// Surface that records draw operations, the wire form streamed to the
/// browser canvas client.
#[derive(Debug, Default)]
pub struct DrawList {
    pub ops: Vec<DrawOp>,
}

impl DrawList {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }
}

impl Surface for DrawList {
    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn stroke_circle(&mut self, x: f32, y: f32, r: f32, color: &str, width: f32) {
        self.ops.push(DrawOp::StrokeCircle {
            x,
            y,
            r,
            color: color.to_string(),
            width,
        });
    }

    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: &str) {
        self.ops.push(DrawOp::FillCircle {
            x,
            y,
            r,
            color: color.to_string(),
        });
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: &str, width: f32) {
        self.ops.push(DrawOp::Line {
            x1,
            y1,
            x2,
            y2,
            color: color.to_string(),
            width,
        });
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.ops.push(DrawOp::FillRect {
            x,
            y,
            w,
            h,
            color: color.to_string(),
        });
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str, width: f32) {
        self.ops.push(DrawOp::StrokeRect {
            x,
            y,
            w,
            h,
            color: color.to_string(),
            width,
        });
    }

    fn text(&mut self, x: f32, y: f32, text: &str, color: &str, font: &str) {
        self.ops.push(DrawOp::Text {
            x,
            y,
            text: text.to_string(),
            color: color.to_string(),
            font: font.to_string(),
        });
    }
}

/// Draw one fighter: head, torso, swinging arms with joint dots, and
/// two-segment legs with knee dots.
pub fn draw_fighter(surface: &mut dyn Surface, pose: &Pose, color: &str) {
    surface.stroke_circle(pose.head.x, pose.head.y, HEAD_RADIUS, color, LINE_WIDTH);
    surface.line(pose.neck.x, pose.neck.y, pose.hip.x, pose.hip.y, color, LINE_WIDTH);

    for hand in &pose.hands {
        surface.line(pose.neck.x, pose.neck.y, hand.x, hand.y, color, LINE_WIDTH);
    }
    surface.fill_circle(pose.neck.x, pose.neck.y, JOINT_RADIUS, color);
    for hand in &pose.hands {
        surface.fill_circle(hand.x, hand.y, JOINT_RADIUS, color);
    }

    for (knee, foot) in pose.knees.iter().zip(pose.feet.iter()) {
        surface.line(pose.hip.x, pose.hip.y, knee.x, knee.y, color, LINE_WIDTH);
        surface.line(knee.x, knee.y, foot.x, foot.y, color, LINE_WIDTH);
    }
    for knee in &pose.knees {
        surface.fill_circle(knee.x, knee.y, JOINT_RADIUS, color);
    }
}

/// Render one full frame: clear, both fighters, HUD.
pub fn render_frame(surface: &mut dyn Surface, state: &MatchState) {
    surface.clear();
    for (f, color) in state.fighters.iter().zip(FIGHTER_COLORS) {
        draw_fighter(surface, &pose(f), color);
    }
    draw_hud(
        surface,
        [state.fighters[0].health, state.fighters[1].health],
        state.bounds.width,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_draw_fighter_op_sequence() {
        let f = FighterState::spawn(Vec2::new(400.0, 300.0));
        let mut list = DrawList::new();
        draw_fighter(&mut list, &pose(&f), "blue");

        // Head, 7 limb/torso lines, 5 joint dots.
        assert_eq!(list.ops.len(), 13);
        match &list.ops[0] {
            DrawOp::StrokeCircle { x, y, r, color, .. } => {
                assert_eq!((*x, *y), (400.0, 300.0));
                assert_eq!(*r, HEAD_RADIUS);
                assert_eq!(color, "blue");
            }
            other => panic!("expected head StrokeCircle, got {:?}", other),
        }

        let lines = list.ops.iter().filter(|op| matches!(op, DrawOp::Line { .. })).count();
        let dots = list
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::FillCircle { .. }))
            .count();
        assert_eq!(lines, 7);
        assert_eq!(dots, 5);
    }

    #[test]
    fn test_torso_line_spans_neck_to_hip() {
        let f = FighterState::spawn(Vec2::new(400.0, 300.0));
        let mut list = DrawList::new();
        draw_fighter(&mut list, &pose(&f), "red");

        match &list.ops[1] {
            DrawOp::Line { x1, y1, x2, y2, .. } => {
                assert_eq!((*x1, *y1), (400.0, 320.0));
                assert_eq!((*x2, *y2), (400.0, 340.0));
            }
            other => panic!("expected torso Line, got {:?}", other),
        }
    }

    #[test]
    fn test_render_frame_clears_then_draws_everything() {
        let state = MatchState::new();
        let mut list = DrawList::new();
        render_frame(&mut list, &state);

        assert_eq!(list.ops[0], DrawOp::Clear);
        // Clear, two 13-op fighters, two 4-op health bars.
        assert_eq!(list.ops.len(), 1 + 2 * 13 + 2 * 4);

        // One fighter per color.
        let blue_heads = list
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::StrokeCircle { color, .. } if color == "blue"))
            .count();
        let red_heads = list
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::StrokeCircle { color, .. } if color == "red"))
            .count();
        assert_eq!(blue_heads, 1);
        assert_eq!(red_heads, 1);
    }

    #[test]
    fn test_draw_ops_serialize_with_op_tag() {
        let mut list = DrawList::new();
        list.clear();
        list.line(0.0, 0.0, 1.0, 1.0, "blue", 2.0);

        let json = serde_json::to_string(&list.ops).expect("ops should serialize");
        assert!(json.contains(r#""op":"clear""#));
        assert!(json.contains(r#""op":"line""#));

        let back: Vec<DrawOp> = serde_json::from_str(&json).expect("ops should deserialize");
        assert_eq!(back, list.ops);
    }
}
