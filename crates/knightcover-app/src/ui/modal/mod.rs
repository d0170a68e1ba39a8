use eframe::egui::Context;

use crate::action::{ActionRequestQueue, ModalRequest};

mod dialogs;
mod export;

pub(crate) fn show(
    ctx: &Context,
    action_queue: &mut ActionRequestQueue,
    modal_request: &mut ModalRequest,
) {
    match modal_request {
        ModalRequest::Alert { kind, responder } => {
            dialogs::show_alert(ctx, action_queue, kind, responder);
        }
        ModalRequest::Export(dialog) => {
            export::show(ctx, action_queue, dialog);
        }
    }
}
