mod app;
mod ui;
mod viewport;

// Re-export library modules so that `crate::state` etc. resolve to the lib
// crate types everywhere in the binary.
pub use rubiks_gui_lib::state;

use app::CubeApp;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rubiks_gui=info".into()),
        )
        .init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Rubik's Cube")
            .with_inner_size([900.0, 900.0])
            .with_min_inner_size([500.0, 500.0]),
        depth_buffer: 24,
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "rubiks-gui",
        native_options,
        Box::new(|cc| Ok(Box::new(CubeApp::new(cc)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}
