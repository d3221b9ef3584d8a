// main.rs - Desktop front end for the Game of Life engine

use eframe::egui;

mod ui;

use ui::GridApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0]),
        ..Default::default()
    };

    log::info!("opening {}x{} grid", conway::ROWS, conway::COLS);
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(GridApp::default())),
    )
}
