use eframe::egui;
use isobrush::app::SandboxApp;
use isobrush::{assets, logging, settings::Settings};

fn main() -> anyhow::Result<()> {
    let settings = Settings::load("isobrush.json")?;
    logging::init(settings.debug_logging);

    let tile_images = assets::load_tile_images(&settings.texture_paths)?;
    tracing::info!(
        grid_width = settings.grid_width,
        grid_height = settings.grid_height,
        textures = tile_images.len(),
        "starting sandbox"
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([
                settings.screen_width as f32,
                settings.screen_height as f32,
            ])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "Isobrush",
        native_options,
        Box::new(move |_cc| Box::new(SandboxApp::new(&settings, tile_images))),
    )
    .map_err(|err| anyhow::anyhow!("failed to run the window backend: {err}"))?;

    Ok(())
}
