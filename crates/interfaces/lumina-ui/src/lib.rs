mod app;
mod components;
mod screens;
mod theme;
mod utils;

use lumina_app_core::{LiveAssistant, StoreApp};
use lumina_core::Catalog;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

pub fn run() -> eframe::Result<()> {
    setup_logging();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([860.0, 600.0])
            .with_title("Lumina"),
        ..Default::default()
    };

    eframe::run_native(
        "Lumina",
        options,
        Box::new(|cc| {
            theme::setup(&cc.egui_ctx);

            let catalog = match Catalog::builtin() {
                Ok(c) => c,
                Err(e) => {
                    tracing::error!("Failed to load catalog: {e:#}");
                    return Err(Box::new(std::io::Error::other(e.to_string())));
                }
            };

            let assistant = match LiveAssistant::from_env(&catalog) {
                Ok(a) => a,
                Err(e) => {
                    tracing::error!("Failed to build assistant client: {e:#}");
                    return Err(Box::new(std::io::Error::other(e.to_string())));
                }
            };

            let core = StoreApp::new(catalog, assistant, &lumina_config::start_path());
            Ok(Box::new(app::LuminaApp::new(&cc.egui_ctx, core)))
        }),
    )
}
