use eframe::egui::{CollapsingHeader, ComboBox, ScrollArea, Slider, Ui, widgets};

use crate::{
    action::{ActionRequestQueue, SettingsAction},
    state::{DemoMode, DemoSettings, Settings},
    ui::icon,
};

#[derive(Debug, Clone)]
pub(crate) struct SidebarViewModel<'a> {
    settings: &'a Settings,
}

impl<'a> SidebarViewModel<'a> {
    #[must_use]
    pub(crate) fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &SidebarViewModel, action_queue: &mut ActionRequestQueue) {
    let mut changed = false;
    let mut settings = vm.settings.clone();
    let Settings { demo } = &mut settings;

    ScrollArea::vertical().show(ui, |ui| {
        ui.heading(format!("{} Settings", icon::GEAR));
        ui.indent("sidebar_settings", |ui| {
            CollapsingHeader::new(format!("{} Demo", icon::PLAY))
                .default_open(true)
                .show(ui, |ui| {
                    let DemoSettings {
                        mode,
                        clear_delay_ms,
                        fill_delay_ms,
                        probe_delay_ms,
                    } = demo;

                    ComboBox::from_label("Passes")
                        .selected_text(mode.label())
                        .show_ui(ui, |ui| {
                            for candidate in DemoMode::ALL {
                                changed |= ui
                                    .selectable_value(mode, candidate, candidate.label())
                                    .changed();
                            }
                        });

                    let max = DemoSettings::MAX_DELAY_MS;
                    changed |= ui
                        .add(Slider::new(clear_delay_ms, 0..=max).text("Clear pause (ms)"))
                        .changed();
                    changed |= ui
                        .add(Slider::new(fill_delay_ms, 0..=max).text("Fill delay (ms)"))
                        .changed();
                    changed |= ui
                        .add(Slider::new(probe_delay_ms, 0..=max).text("Probe delay (ms)"))
                        .changed();
                    ui.small("Changes apply to the next demo.");
                });

            CollapsingHeader::new(format!("{} Appearance", icon::PALETTE))
                .default_open(true)
                .show(ui, |ui| {
                    widgets::global_theme_preference_buttons(ui);
                });
        });
    });

    if changed {
        action_queue.request(SettingsAction::UpdateSettings(settings).into());
    }
}
