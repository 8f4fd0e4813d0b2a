use anyhow::{Context, Result};
use eframe::egui;

/// Load every configured palette texture. Any failure is fatal: the palette
/// cannot be built without its assets, so the error names the offending file
/// and the process exits non-zero.
pub fn load_tile_images(paths: &[String]) -> Result<Vec<egui::ColorImage>> {
    paths.iter().map(|path| load_tile_image(path)).collect()
}

fn load_tile_image(path: &str) -> Result<egui::ColorImage> {
    let image = image::open(path)
        .with_context(|| format!("failed to load palette texture '{path}'"))?
        .to_rgba8();
    let size = [image.width() as usize, image.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(
        size,
        image.as_raw(),
    ))
}
