use eframe::egui::{self, RichText};

use crate::app::PrizeDrawApp;
use crate::ui::constants::{ACCENT, ERROR_TEXT, MUTED_TEXT};

pub fn render_entry_screen(ui: &mut egui::Ui, app: &mut PrizeDrawApp) {
    ui.add_space(32.0);
    ui.label(RichText::new("🎁").size(48.0));
    ui.heading("Enter the prize draw");
    ui.label(
        RichText::new("Leave your contact so we can reach you if you win.").color(MUTED_TEXT),
    );
    ui.add_space(24.0);

    let submitting = app.entry_form.is_submitting();
    let response = ui.add_enabled(
        !submitting,
        egui::TextEdit::singleline(&mut app.entry_form.contact)
            .hint_text("Email or phone number")
            .desired_width(f32::INFINITY),
    );
    let pressed_enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

    ui.add_space(8.0);
    ui.add_enabled(
        !submitting,
        egui::Checkbox::new(
            &mut app.entry_form.agreed,
            "I agree to receive egobook launch news",
        ),
    );

    if let Some(error) = app.entry_form.error() {
        ui.add_space(8.0);
        ui.label(RichText::new(error.to_string()).color(ERROR_TEXT));
    }

    ui.add_space(16.0);
    let label = if submitting { "Saving…" } else { "Go to the draw" };
    let button = egui::Button::new(RichText::new(label).strong().color(egui::Color32::WHITE))
        .fill(ACCENT)
        .min_size(egui::vec2(ui.available_width(), 40.0));
    let clicked = ui.add_enabled(!submitting, button).clicked();

    if clicked || pressed_enter {
        app.submit_entry();
    }
}
