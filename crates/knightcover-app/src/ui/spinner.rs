use eframe::egui::{Context, Id, Modal, Spinner};

use crate::action::SpinnerKind;

pub(crate) fn show(ctx: &Context, spinner: SpinnerKind) {
    ctx.request_repaint();
    match spinner {
        SpinnerKind::Minimize => {
            Modal::new(Id::new("minimizing_cover")).show(ctx, |ui| {
                ui.heading("Generating...");
                ui.add(Spinner::new());
                ui.label("Minimizing the knight cover...");
            });
        }
    }
}
