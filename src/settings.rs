use serde::{Deserialize, Serialize};

/// Startup configuration. Defaults reproduce the classic setup: an 800x600
/// window, a 10x10 grid of 64x32 tiles and the seven-color palette. A
/// settings file may override any field; missing fields fall back to these
/// defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default = "default_screen_width")]
    pub screen_width: i32,
    #[serde(default = "default_screen_height")]
    pub screen_height: i32,
    #[serde(default = "default_grid_width")]
    pub grid_width: i32,
    #[serde(default = "default_grid_height")]
    pub grid_height: i32,
    #[serde(default = "default_tile_width")]
    pub tile_width: i32,
    #[serde(default = "default_tile_height")]
    pub tile_height: i32,
    /// Image files to load as the palette. When empty, the fixed color
    /// palette is used instead.
    #[serde(default)]
    pub texture_paths: Vec<String>,
    /// Enable wheel zoom.
    #[serde(default = "default_enabled")]
    pub zoom_enabled: bool,
    /// Allow dragging the palette panel. When disabled the panel stays at
    /// its default position; minimize and selection still work.
    #[serde(default = "default_enabled")]
    pub movable_widget: bool,
    /// Vertically center the grid diamond in the viewport. When disabled
    /// the vertical origin is 0.
    #[serde(default = "default_enabled")]
    pub center_grid: bool,
    #[serde(default = "default_zoom_floor")]
    pub zoom_floor: f32,
    #[serde(default = "default_zoom_step")]
    pub zoom_step: f32,
    /// When enabled the application initialises the logger at debug level.
    #[serde(default)]
    pub debug_logging: bool,
}

fn default_screen_width() -> i32 {
    800
}

fn default_screen_height() -> i32 {
    600
}

fn default_grid_width() -> i32 {
    10
}

fn default_grid_height() -> i32 {
    10
}

fn default_tile_width() -> i32 {
    64
}

fn default_tile_height() -> i32 {
    32
}

fn default_enabled() -> bool {
    true
}

fn default_zoom_floor() -> f32 {
    0.2
}

fn default_zoom_step() -> f32 {
    0.1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: default_screen_width(),
            screen_height: default_screen_height(),
            grid_width: default_grid_width(),
            grid_height: default_grid_height(),
            tile_width: default_tile_width(),
            tile_height: default_tile_height(),
            texture_paths: Vec::new(),
            zoom_enabled: default_enabled(),
            movable_widget: default_enabled(),
            center_grid: default_enabled(),
            zoom_floor: default_zoom_floor(),
            zoom_step: default_zoom_step(),
            debug_logging: false,
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
