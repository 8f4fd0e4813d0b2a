/// Minimum tile size in pixels, applied after scaling.
pub const MIN_TILE_W: i32 = 8;
pub const MIN_TILE_H: i32 = 4;

/// Wheel-driven zoom factor, stepped by a fixed increment and clamped at a
/// configured floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    factor: f32,
    floor: f32,
    step: f32,
}

impl ZoomState {
    pub fn new(floor: f32, step: f32) -> Self {
        debug_assert!(
            floor > 0.0 && step > 0.0,
            "zoom floor and step must be positive"
        );
        Self {
            factor: 1.0,
            floor,
            step,
        }
    }

    pub fn factor(&self) -> f32 {
        self.factor
    }

    /// Apply `ticks` wheel steps (positive = zoom in).
    pub fn step_by(&mut self, ticks: i32) {
        self.factor = (self.factor + ticks as f32 * self.step).max(self.floor);
    }

    /// Effective tile dimensions at the current factor, floored at
    /// [`MIN_TILE_W`] x [`MIN_TILE_H`].
    pub fn scaled_tile(&self, base_w: i32, base_h: i32) -> (i32, i32) {
        (
            ((base_w as f32 * self.factor).round() as i32).max(MIN_TILE_W),
            ((base_h as f32 * self.factor).round() as i32).max(MIN_TILE_H),
        )
    }
}
