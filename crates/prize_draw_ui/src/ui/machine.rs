use std::f32::consts::TAU;

use eframe::egui::{self, Color32, Pos2, Sense, Stroke, Vec2};
use prize_draw_core::DrawPhase;

use crate::ui::constants::{
    BALL_COLORS, BALL_LAYOUT, BASE_FILL, DOME_FILL, DOME_STROKE, MACHINE_SIZE,
};

/// Horizontal jitter while shaking, in points.
const SHAKE_AMPLITUDE: f32 = 6.0;
const SHAKE_HZ: f32 = 12.0;

pub fn shake_offset(phase: DrawPhase, time_secs: f64) -> Vec2 {
    match phase {
        DrawPhase::Shaking | DrawPhase::Drawing => {
            let angle = (time_secs as f32) * SHAKE_HZ * TAU;
            Vec2::new(angle.sin() * SHAKE_AMPLITUDE, (angle * 0.5).cos() * 2.0)
        }
        DrawPhase::Idle | DrawPhase::Done => Vec2::ZERO,
    }
}

/// Paints the capsule machine: a glass dome of balls on a base.
pub fn render_machine(ui: &mut egui::Ui, phase: DrawPhase) {
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(MACHINE_SIZE), Sense::hover());
    let painter = ui.painter_at(rect);
    let time = ui.input(|i| i.time);

    let offset = shake_offset(phase, time);
    let radius = MACHINE_SIZE * 0.36;
    let center = Pos2::new(rect.center().x, rect.top() + radius + 8.0) + offset;

    let base = egui::Rect::from_center_size(
        Pos2::new(rect.center().x, center.y + radius + 22.0),
        Vec2::new(radius * 1.6, 44.0),
    );
    painter.rect_filled(base, 8.0, BASE_FILL);
    painter.circle_filled(base.center(), 9.0, Color32::from_gray(40));

    painter.circle_filled(center, radius, DOME_FILL);
    let ball_radius = radius * 0.17;
    for (index, (dx, dy)) in BALL_LAYOUT.iter().enumerate() {
        let mut ball = center + Vec2::new(dx * radius, dy * radius);
        if phase != DrawPhase::Idle && phase != DrawPhase::Done {
            let wobble = (time as f32 * 9.0 + index as f32).sin() * ball_radius * 0.6;
            ball += Vec2::new(0.0, wobble);
        }
        painter.circle_filled(ball, ball_radius, BALL_COLORS[index % BALL_COLORS.len()]);
    }
    painter.circle_stroke(center, radius, Stroke::new(3.0, DOME_STROKE));
}
