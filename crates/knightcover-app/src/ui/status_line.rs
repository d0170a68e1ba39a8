use eframe::egui::{Align, Label, RichText, Ui, Vec2, Widget as _};

use crate::{
    demo::DemoPhase,
    ui::{
        icon,
        layout::{ComponentUnits, LayoutScale},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BoardStatus {
    Minimized,
    DemoCompleted,
    DemoStopped,
    DemoRunning { phase: DemoPhase, stopping: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StatusLineViewModel {
    status: BoardStatus,
    knights: usize,
}

impl StatusLineViewModel {
    #[must_use]
    pub(crate) fn new(status: BoardStatus, knights: usize) -> Self {
        Self { status, knights }
    }

    /// Returns the status text and whether it should stand out.
    #[must_use]
    pub(crate) fn text(&self) -> (String, bool) {
        let knights = self.knights;
        match self.status {
            BoardStatus::Minimized => (
                format!("{} Minimal cover: {knights} knights", icon::KNIGHT),
                false,
            ),
            BoardStatus::DemoCompleted => (
                format!("{} Demo complete: {knights} knights", icon::TROPHY),
                true,
            ),
            BoardStatus::DemoStopped => (
                format!(
                    "{} Demo stopped with {knights} knights; the cover may be reducible further",
                    icon::WARNING
                ),
                true,
            ),
            BoardStatus::DemoRunning { stopping: true, .. } => {
                (format!("{} Stopping demo...", icon::HOURGLASS), false)
            }
            BoardStatus::DemoRunning { phase, .. } => {
                let phase = match phase {
                    DemoPhase::Clearing => "clearing the board".to_owned(),
                    DemoPhase::Filling => "placing knights".to_owned(),
                    DemoPhase::Reducing { pass } => format!("reduction pass {pass}"),
                };
                (
                    format!("{} Demo: {phase} ({knights} knights)", icon::HOURGLASS),
                    false,
                )
            }
        }
    }
}

#[must_use]
pub(crate) fn required_units() -> ComponentUnits {
    ComponentUnits::new(0.0, 0.6)
}

pub(crate) fn show(ui: &mut Ui, vm: &StatusLineViewModel, scale: &LayoutScale) {
    ui.spacing_mut().item_spacing = Vec2::new(scale.spacing.x, 0.0);
    let (text, emphasized) = vm.text();
    let color = if emphasized {
        ui.visuals().warn_fg_color
    } else {
        ui.visuals().text_color()
    };
    ui.horizontal(|ui| {
        Label::new(
            RichText::new(text)
                .color(color)
                .size((scale.cell_size * 0.4).clamp(12.0, 20.0)),
        )
        .halign(Align::Min)
        .ui(ui);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopped_demo_warns_about_reducibility() {
        let vm = StatusLineViewModel::new(BoardStatus::DemoStopped, 11);
        let (text, emphasized) = vm.text();
        assert!(text.contains("11 knights"));
        assert!(text.contains("may be reducible further"));
        assert!(emphasized);
    }

    #[test]
    fn running_demo_names_the_pass() {
        let vm = StatusLineViewModel::new(
            BoardStatus::DemoRunning {
                phase: DemoPhase::Reducing { pass: 2 },
                stopping: false,
            },
            20,
        );
        assert!(vm.text().0.contains("reduction pass 2"));

        let stopping = StatusLineViewModel::new(
            BoardStatus::DemoRunning {
                phase: DemoPhase::Filling,
                stopping: true,
            },
            20,
        );
        assert!(stopping.text().0.contains("Stopping"));
    }
}
