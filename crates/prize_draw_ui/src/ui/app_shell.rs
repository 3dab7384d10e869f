use std::time::Duration;

use eframe::egui;

use crate::app::PrizeDrawApp;
use crate::ui::constants::{CONTENT_WIDTH, REPAINT_INTERVAL_MS, REVEAL_DURATION};
use crate::ui::draw_screen::render_draw_screen;
use crate::ui::entry_screen::render_entry_screen;

pub fn run(app: PrizeDrawApp) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 720.0])
            .with_title("Prize Draw"),
        ..Default::default()
    };
    eframe::run_native("Prize Draw", options, Box::new(|_cc| Ok(Box::new(app))))
}

impl eframe::App for PrizeDrawApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.pump();

        let animating = self
            .draw
            .as_ref()
            .and_then(|screen| screen.revealed_at)
            .is_some_and(|at| at.elapsed() < REVEAL_DURATION);
        if self.is_waiting() || animating {
            ctx.request_repaint_after(Duration::from_millis(REPAINT_INTERVAL_MS));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(CONTENT_WIDTH);
                    if self.draw.is_some() {
                        render_draw_screen(ui, self);
                    } else {
                        render_entry_screen(ui, self);
                    }
                });
            });
        });
    }
}
