#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1060.0, 700.0])
            .with_title("Mosaic Paint"),
        ..Default::default()
    };
    eframe::run_native(
        "mosaic_paint",
        native_options,
        Box::new(|cc| Ok(Box::new(mosaic_paint::MosaicApp::new(cc)))),
    )
}
