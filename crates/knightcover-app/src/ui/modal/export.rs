use eframe::egui::{Context, FontId, Id, ScrollArea, TextEdit, Ui};

use super::dialogs::{DialogResult, primary_button, show_dialog};
use crate::{
    action::{ActionRequestQueue, ExportAction, ExportDialog, UiAction},
    ui::icon,
};

const REPORT_MAX_HEIGHT: f32 = 360.0;
const REPORT_MIN_WIDTH: f32 = 420.0;

/// Shows the report and the destination path.
///
/// Saving replaces this dialog with an alert, so *Save* does not close it.
pub(super) fn show(ctx: &Context, action_queue: &mut ActionRequestQueue, dialog: &mut ExportDialog) {
    let ExportDialog { report, path } = dialog;
    let DialogResult { should_close } = show_dialog(
        ctx,
        Id::new("export_report"),
        "Export Report",
        |ui: &mut Ui| {
            ScrollArea::both()
                .max_height(REPORT_MAX_HEIGHT)
                .show(ui, |ui| {
                    let mut text = report.as_str();
                    ui.add(
                        TextEdit::multiline(&mut text)
                            .font(FontId::monospace(12.0))
                            .min_size([REPORT_MIN_WIDTH, 0.0].into()),
                    );
                });
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label("File:");
                ui.add(TextEdit::singleline(path).desired_width(REPORT_MIN_WIDTH - 40.0));
            });
        },
        |ui: &mut Ui| {
            let save = primary_button(ui, format!("{} Save", icon::SAVE), true);
            if save.clicked() {
                action_queue.request(ExportAction::Save.into());
            }
            if ui.button(format!("{} Close", icon::CANCEL)).clicked() {
                ui.close();
            }
        },
    );

    if should_close {
        action_queue.request(UiAction::CloseModal.into());
    }
}
