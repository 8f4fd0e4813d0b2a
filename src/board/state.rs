use crate::board::iso::Projection;
use crate::board::palette::Palette;
use crate::board::widget::PaletteWidget;
use crate::board::world::WorldGrid;
use crate::board::zoom::ZoomState;
use crate::settings::Settings;

/// All mutable sandbox state, passed by reference to the dispatcher and the
/// render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub world: WorldGrid,
    pub palette: Palette,
    pub widget: PaletteWidget,
    pub zoom: ZoomState,
    pub projection: Projection,
    screen: (i32, i32),
    base_tile: (i32, i32),
    zoom_enabled: bool,
    center_grid: bool,
}

impl AppState {
    pub fn new(settings: &Settings, palette: Palette) -> Self {
        let screen = (settings.screen_width, settings.screen_height);
        let base_tile = (settings.tile_width, settings.tile_height);
        let zoom = ZoomState::new(settings.zoom_floor, settings.zoom_step);
        let mut state = Self {
            world: WorldGrid::new(settings.grid_width, settings.grid_height),
            palette,
            widget: PaletteWidget::new(screen, settings.movable_widget),
            zoom,
            // Placeholder, rebuilt below from the zoomed tile size.
            projection: Projection::new(base_tile.0, base_tile.1, (0, 0)),
            screen,
            base_tile,
            zoom_enabled: settings.zoom_enabled,
            center_grid: settings.center_grid,
        };
        state.rebuild_projection();
        state
    }

    pub fn screen(&self) -> (i32, i32) {
        self.screen
    }

    pub fn zoom_enabled(&self) -> bool {
        self.zoom_enabled
    }

    /// Recompute the effective tile size and grid origin. Called at startup
    /// and after every zoom change.
    pub fn rebuild_projection(&mut self) {
        let (tile_w, tile_h) = self.zoom.scaled_tile(self.base_tile.0, self.base_tile.1);
        self.projection = Projection::centered(
            self.screen,
            (self.world.width(), self.world.height()),
            tile_w,
            tile_h,
            self.center_grid,
        );
    }
}
