use std::borrow::Cow;

use eframe::egui::{Context, Id, Modal, Response, RichText, Sides, Ui};

use crate::{
    action::{ActionRequestQueue, AlertKind, AlertResponder, AlertResult, Responder, UiAction},
    ui::icon,
};

pub(super) struct DialogResult {
    pub(super) should_close: bool,
}

pub(super) fn show_dialog<Heading, Body, Buttons>(
    ctx: &Context,
    id: Id,
    heading: Heading,
    body: Body,
    buttons: Buttons,
) -> DialogResult
where
    Heading: Into<RichText>,
    Body: FnOnce(&mut Ui),
    Buttons: FnOnce(&mut Ui),
{
    let modal = Modal::new(id).show(ctx, |ui| {
        ui.heading(heading);
        ui.add_space(4.0);

        body(ui);
        ui.add_space(8.0);

        Sides::new().show(ui, |_ui| {}, buttons);
    });

    DialogResult {
        should_close: modal.should_close(),
    }
}

fn request_focus_if_none(ui: &Ui, response: &Response) {
    if ui.memory(|memory| memory.focused().is_none()) {
        response.request_focus();
    }
}

pub(super) fn primary_button(ui: &mut Ui, label: String, request_focus: bool) -> Response {
    let response = ui.button(label);
    if request_focus {
        request_focus_if_none(ui, &response);
    }
    response
}

fn send_response<T>(responder: &mut Option<Responder<T>>, response: T) {
    if let Some(responder) = responder.take() {
        let _ = responder.send(response);
    }
}

struct AlertDialogSpec {
    id: Id,
    heading: &'static str,
    body: Cow<'static, str>,
    ok_label: &'static str,
}

impl AlertKind {
    fn spec(&self) -> AlertDialogSpec {
        match self {
            AlertKind::InvalidSize(err) => AlertDialogSpec {
                id: Id::new("invalid_size"),
                heading: "Invalid Board Size",
                body: Cow::Owned(format!("The board size was not accepted: {err}.")),
                ok_label: "OK",
            },
            AlertKind::DemoAlreadyRunning => AlertDialogSpec {
                id: Id::new("demo_already_running"),
                heading: "Demo Running",
                body: Cow::Borrowed("A demo is already running. Stop it before starting another."),
                ok_label: "OK",
            },
            AlertKind::DemoComplete { knights, passes } => AlertDialogSpec {
                id: Id::new("demo_complete"),
                heading: "Demo Complete",
                body: Cow::Owned(format!(
                    "The reduction finished after {passes} pass(es), leaving {knights} knights."
                )),
                ok_label: "OK",
            },
            AlertKind::ReportSaved { path } => AlertDialogSpec {
                id: Id::new("report_saved"),
                heading: "Report Saved",
                body: Cow::Owned(format!("The report was saved to {}.", path.display())),
                ok_label: "OK",
            },
            AlertKind::ReportSaveFailed { message } => AlertDialogSpec {
                id: Id::new("report_save_failed"),
                heading: "Save Failed",
                body: Cow::Owned(format!("The report could not be saved: {message}")),
                ok_label: "OK",
            },
            AlertKind::GenerateFailed { message } => AlertDialogSpec {
                id: Id::new("generate_failed"),
                heading: "Generation Failed",
                body: Cow::Owned(format!("The cover could not be computed: {message}")),
                ok_label: "OK",
            },
        }
    }
}

pub(super) fn show_alert(
    ctx: &Context,
    action_queue: &mut ActionRequestQueue,
    kind: &AlertKind,
    responder: &mut Option<AlertResponder>,
) {
    let spec = kind.spec();
    let DialogResult { should_close } = show_dialog(
        ctx,
        spec.id,
        spec.heading,
        |ui: &mut Ui| {
            ui.label(spec.body);
        },
        |ui: &mut Ui| {
            let ok = primary_button(ui, format!("{} {}", icon::CHECK, spec.ok_label), true);
            if ok.clicked() {
                send_response(responder, AlertResult::Ok);
                ui.close();
            }
        },
    );

    if should_close {
        send_response(responder, AlertResult::Ok);
        action_queue.request(UiAction::CloseModal.into());
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use knightcover_core::{SizeField, SizeInputError};

    use super::*;

    #[test]
    fn alert_bodies_carry_details() {
        let invalid = AlertKind::InvalidSize(SizeInputError::NotPositive {
            field: SizeField::Cols,
            value: -2,
        })
        .spec();
        assert!(invalid.body.contains("columns must be at least 1, got -2"));

        let too_large = AlertKind::InvalidSize(SizeInputError::TooLarge {
            rows: 5000,
            cols: 5000,
        })
        .spec();
        assert!(too_large.body.contains("5000×5000 board has more than"));

        let failed = AlertKind::GenerateFailed {
            message: "worker disconnected".to_owned(),
        }
        .spec();
        assert!(failed.body.contains("worker disconnected"));

        let saved = AlertKind::ReportSaved {
            path: PathBuf::from("/tmp/cover.txt"),
        }
        .spec();
        assert!(saved.body.contains("/tmp/cover.txt"));

        let done = AlertKind::DemoComplete {
            knights: 12,
            passes: 2,
        }
        .spec();
        assert!(done.body.contains("2 pass(es)"));
        assert!(done.body.contains("12 knights"));
    }

    #[test]
    fn send_response_is_one_shot() {
        let (sender, mut receiver) = futures_channel::oneshot::channel();
        let mut responder = Some(sender);
        send_response(&mut responder, AlertResult::Ok);
        assert!(responder.is_none());
        send_response(&mut responder, AlertResult::Ok);
        assert_eq!(receiver.try_recv(), Ok(Some(AlertResult::Ok)));
    }
}
