use eframe::{CreationContext, NativeOptions, egui};
use passgen::app::PassGenApp;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Starting PassGen");

    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 560.0])
            .with_min_inner_size([320.0, 400.0]),
        ..Default::default()
    };
    eframe::run_native(
        "PassGen",
        native_options,
        Box::new(|_cc: &CreationContext| Ok(Box::new(PassGenApp::default()))),
    )
}
