use eframe::egui;
use env_logger;
use log::{info, error};

mod app;
mod ui;

use app::MoneyInputApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting money input demo application");

    // Create window options sized for a single input field
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 260.0])
            .with_min_inner_size([320.0, 200.0])
            .with_title("Money Input")
            .with_resizable(true),
        ..Default::default()
    };

    // Run the application
    info!("Launching egui window");
    eframe::run_native(
        "Money Input",
        options,
        Box::new(|cc| {
            // Initialize the app
            match MoneyInputApp::new(cc) {
                Ok(app) => {
                    info!("Successfully initialized money input demo");
                    Ok(Box::new(app))
                }
                Err(e) => {
                    error!("Failed to initialize app: {}", e);
                    // Convert anyhow::Error to eframe::Error
                    Err(format!("Failed to initialize app: {}", e).into())
                }
            }
        }),
    )
}
