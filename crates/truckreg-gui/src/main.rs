//! GUI entry point for truckreg

mod app;
mod login_panel;
mod signup_panel;
mod trucks_panel;

use app::TruckregApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Truck Registration",
        options,
        Box::new(|cc| Ok(Box::new(TruckregApp::new(cc)))),
    )
}
