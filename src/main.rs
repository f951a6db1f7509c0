mod app;
mod color;
mod state;
mod ui;

use app::SambatChartApp;
use eframe::egui;

const WINDOW_TITLE: &str = "Sambat Chart – Yearly Values";
const WINDOW_SIZE: [f32; 2] = [900.0, 600.0];
const MIN_WINDOW_SIZE: [f32; 2] = [500.0, 350.0];

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(MIN_WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(SambatChartApp::default()))),
    )
}
