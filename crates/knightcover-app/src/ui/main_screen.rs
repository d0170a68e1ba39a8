use eframe::egui::Ui;
use egui_extras::{Size, StripBuilder};

use crate::ui::{
    board::{self, BoardViewModel},
    layout::LayoutScale,
    status_line::{self, StatusLineViewModel},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MainScreenViewModel {
    board_vm: BoardViewModel,
    status_line_vm: StatusLineViewModel,
}

impl MainScreenViewModel {
    #[must_use]
    pub(crate) fn new(board_vm: BoardViewModel, status_line_vm: StatusLineViewModel) -> Self {
        Self {
            board_vm,
            status_line_vm,
        }
    }
}

/// Lays out the board centred above the status line, scaled to fit.
pub(crate) fn show(ui: &mut Ui, vm: &MainScreenViewModel) {
    let units = board::required_units(vm.board_vm.size()).stack(status_line::required_units());
    let scale = LayoutScale::fit(ui.available_size() - ui.spacing().item_spacing * 2.0, units);

    let board_units = board::required_units(vm.board_vm.size());
    let board_width = board_units.width * scale.cell_size;
    let board_height = board_units.height * scale.cell_size;
    let status_height = status_line::required_units().height * scale.cell_size;

    StripBuilder::new(ui)
        .size(Size::remainder())
        .size(Size::exact(board_width))
        .size(Size::remainder())
        .horizontal(|mut strip| {
            strip.empty();
            strip.cell(|ui| {
                StripBuilder::new(ui)
                    .size(Size::remainder())
                    .size(Size::exact(board_height))
                    .size(Size::exact(scale.padding.y))
                    .size(Size::exact(status_height))
                    .size(Size::remainder())
                    .vertical(|mut strip| {
                        strip.empty();
                        strip.cell(|ui| {
                            board::show(ui, &vm.board_vm, &scale);
                        });
                        strip.empty();
                        strip.cell(|ui| {
                            status_line::show(ui, &vm.status_line_vm, &scale);
                        });
                        strip.empty();
                    });
            });
            strip.empty();
        });
}
