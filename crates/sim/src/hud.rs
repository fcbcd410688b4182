use stickfight_shared::*;

use crate::render::Surface;

/// Placed geometry for one health bar.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthBar {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub fill_width: f32,
    pub color: &'static str,
    pub label: String,
}

/// Lay out both health bars for the current canvas width. Pure geometry,
/// no drawing.
pub fn layout(healths: [u8; 2], canvas_width: f32) -> [HealthBar; 2] {
    let bar = |i: usize| {
        let width = canvas_width * HUD_BAR_WIDTH_FRAC;
        HealthBar {
            x: canvas_width * HUD_BAR_X_FRACS[i],
            y: HUD_BAR_Y,
            width,
            height: HUD_BAR_HEIGHT,
            fill_width: healths[i] as f32 / MAX_HEALTH as f32 * width,
            color: FIGHTER_COLORS[i],
            label: format!("{}%", healths[i]),
        }
    };
    [bar(0), bar(1)]
}

/// Emit both health bars: background, proportional fill in the fighter's
/// color, border, percentage label.
pub fn draw_hud(surface: &mut dyn Surface, healths: [u8; 2], canvas_width: f32) {
    for bar in layout(healths, canvas_width) {
        surface.fill_rect(bar.x, bar.y, bar.width, bar.height, HUD_BG_COLOR);
        surface.fill_rect(bar.x, bar.y, bar.fill_width, bar.height, bar.color);
        surface.stroke_rect(bar.x, bar.y, bar.width, bar.height, HUD_BORDER_COLOR, LINE_WIDTH);
        surface.text(
            bar.x + bar.width / 2.0 + HUD_LABEL_DX,
            bar.y + HUD_LABEL_DY,
            &bar.label,
            HUD_TEXT_COLOR,
            HUD_FONT,
        );
    }
}
