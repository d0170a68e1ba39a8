//! Minimal knight cover desktop application using egui/eframe.

use knightcover_app::KnightcoverApp;

fn main() -> eframe::Result<()> {
    const APP_ID: &str = "io.github.gifnksm.knightcover";

    better_panic::install();
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_title("Minimal Knight Cover")
            .with_resizable(true)
            .with_inner_size((800.0, 700.0))
            .with_min_inner_size((480.0, 360.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Minimal Knight Cover",
        options,
        Box::new(|cc| Ok(Box::new(KnightcoverApp::new(cc)))),
    )
}
