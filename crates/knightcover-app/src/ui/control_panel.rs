use eframe::egui::{Button, TextEdit, Ui};

use crate::{
    action::{ActionRequestQueue, DemoAction, ExportAction, FlowAction, SizeInputAction},
    ui::icon,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ControlPanelViewModel<'a> {
    rows: &'a str,
    cols: &'a str,
    knights: usize,
    demo_running: bool,
    demo_stopping: bool,
}

impl<'a> ControlPanelViewModel<'a> {
    #[must_use]
    pub(crate) fn new(
        rows: &'a str,
        cols: &'a str,
        knights: usize,
        demo_running: bool,
        demo_stopping: bool,
    ) -> Self {
        Self {
            rows,
            cols,
            knights,
            demo_running,
            demo_stopping,
        }
    }

    #[must_use]
    pub(crate) fn can_generate(&self) -> bool {
        !self.demo_running
    }

    #[must_use]
    pub(crate) fn can_start_demo(&self) -> bool {
        !self.demo_running
    }

    #[must_use]
    pub(crate) fn can_stop_demo(&self) -> bool {
        self.demo_running && !self.demo_stopping
    }
}

const SIZE_FIELD_WIDTH: f32 = 48.0;

pub(crate) fn show(ui: &mut Ui, vm: &ControlPanelViewModel, action_queue: &mut ActionRequestQueue) {
    ui.horizontal(|ui| {
        let mut rows = vm.rows.to_owned();
        let mut cols = vm.cols.to_owned();
        let mut changed = false;

        ui.label("Rows:");
        changed |= ui
            .add_enabled(
                vm.can_generate(),
                TextEdit::singleline(&mut rows).desired_width(SIZE_FIELD_WIDTH),
            )
            .changed();
        ui.label("Columns:");
        changed |= ui
            .add_enabled(
                vm.can_generate(),
                TextEdit::singleline(&mut cols).desired_width(SIZE_FIELD_WIDTH),
            )
            .changed();
        if changed {
            action_queue.request(SizeInputAction::Update { rows, cols }.into());
        }

        ui.separator();

        let generate = Button::new(format!("{} Generate", icon::REFRESH));
        if ui.add_enabled(vm.can_generate(), generate).clicked() {
            action_queue.request(FlowAction::Generate.into());
        }
        let demo = Button::new(format!("{} Demo", icon::PLAY));
        if ui.add_enabled(vm.can_start_demo(), demo).clicked() {
            action_queue.request(FlowAction::StartDemo.into());
        }
        let stop = Button::new(format!("{} Stop demo", icon::STOP));
        if ui.add_enabled(vm.can_stop_demo(), stop).clicked() {
            action_queue.request(DemoAction::Stop.into());
        }
        if ui.button(format!("{} Export", icon::SAVE)).clicked() {
            action_queue.request(ExportAction::Open.into());
        }

        ui.separator();
        ui.label(format!("{} Knights: {}", icon::KNIGHT, vm.knights));
    });
}
