use eframe::egui::{self, Color32, RichText};
use prize_draw_core::presentation::{
    button_face, machine_caption, prize_badges, shows_promo_note, ResultTone, PROMO_NOTE,
};
use prize_draw_core::{DrawPhase, Route};

use crate::app::{DrawScreen, PrizeDrawApp};
use crate::ui::constants::{ACCENT, ACCENT_SOFT, BRONZE, MUTED_TEXT, REVEAL_DURATION, SILVER};
use crate::ui::machine::render_machine;

pub fn render_draw_screen(ui: &mut egui::Ui, app: &mut PrizeDrawApp) {
    let Some(screen) = app.draw.as_ref() else {
        return;
    };
    let controller = &screen.controller;
    let phase = controller.phase();
    let can_draw = controller.can_draw();

    ui.add_space(16.0);
    ui.heading("Prize draw");
    ui.add_space(12.0);
    render_badges(ui, screen);
    ui.add_space(16.0);

    render_machine(ui, phase);
    ui.label(RichText::new(machine_caption(phase)).color(MUTED_TEXT));
    if !controller.is_ready() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(RichText::new("Checking your entry…").color(MUTED_TEXT));
        });
    }
    ui.add_space(12.0);

    let face = button_face(phase);
    let button = egui::Button::new(
        RichText::new(format!("{} {}", face.icon, face.label))
            .strong()
            .size(18.0)
            .color(Color32::WHITE),
    )
    .fill(ACCENT)
    .min_size(egui::vec2(ui.available_width(), 48.0));
    let draw_clicked = ui.add_enabled(can_draw, button).clicked();

    let mut back_clicked = false;
    if phase == DrawPhase::Done {
        ui.add_space(16.0);
        render_result(ui, screen);
        ui.add_space(16.0);
        back_clicked = ui.button("Back to start").clicked();
    }

    if draw_clicked {
        app.trigger_draw();
    }
    if back_clicked {
        app.navigate(Route::Entry);
    }
}

fn render_badges(ui: &mut egui::Ui, screen: &DrawScreen) {
    let badges = prize_badges(screen.controller.inventory());
    ui.columns(badges.len(), |columns| {
        for (column, badge) in columns.iter_mut().zip(badges.iter()) {
            let fill = if badge.highlighted {
                ACCENT_SOFT
            } else {
                Color32::TRANSPARENT
            };
            egui::Frame::group(column.style())
                .fill(fill)
                .show(column, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(badge.emoji).size(24.0));
                        ui.label(RichText::new(badge.label).strong());
                        ui.label(format!("{} left", badge.count));
                    });
                });
        }
    });
}

fn render_result(ui: &mut egui::Ui, screen: &DrawScreen) {
    let controller = &screen.controller;
    let Some(descriptor) = controller.descriptor() else {
        return;
    };

    let progress = screen.revealed_at.map_or(1.0, |at| {
        (at.elapsed().as_secs_f32() / REVEAL_DURATION.as_secs_f32()).min(1.0)
    });
    let accent = match descriptor.tone {
        ResultTone::Silver => SILVER,
        ResultTone::Bronze => BRONZE,
        ResultTone::Muted => MUTED_TEXT,
    };

    egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(2.0, accent))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(descriptor.emoji).size(24.0 + 24.0 * progress));
                ui.label(RichText::new(descriptor.title).size(22.0).strong());
                ui.label(descriptor.subtitle);
                if controller.result().is_some_and(shows_promo_note) {
                    ui.add_space(8.0);
                    ui.label(RichText::new(PROMO_NOTE).color(MUTED_TEXT));
                }
            });
        });
}
