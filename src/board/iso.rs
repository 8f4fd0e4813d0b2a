/// Mapping between grid cells and screen pixels under isometric projection.
///
/// The forward transform places cell `(x, y)` at
/// `(ox + (x - y) * tw2, oy + (x + y) * th2)`. The inverse is its algebraic
/// inversion over the rationals followed by round-half-away-from-zero, so
/// `screen_to_grid(grid_to_screen(c)) == c` for every cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
    tile_half_w: i32,
    tile_half_h: i32,
    origin: (i32, i32),
}

impl Projection {
    pub fn new(tile_w: i32, tile_h: i32, origin: (i32, i32)) -> Self {
        Self {
            tile_half_w: tile_w / 2,
            tile_half_h: tile_h / 2,
            origin,
        }
    }

    /// Projection with the grid diamond horizontally centered and, when
    /// `center_grid` is set, vertically centered in the viewport. With
    /// `center_grid` off the vertical origin is 0.
    pub fn centered(
        screen: (i32, i32),
        grid: (i32, i32),
        tile_w: i32,
        tile_h: i32,
        center_grid: bool,
    ) -> Self {
        let th2 = tile_h / 2;
        let oy = if center_grid {
            (screen.1 - (grid.0 + grid.1) * th2) / 2
        } else {
            0
        };
        Self::new(tile_w, tile_h, (screen.0 / 2, oy))
    }

    pub fn origin(&self) -> (i32, i32) {
        self.origin
    }

    pub fn tile_half_size(&self) -> (i32, i32) {
        (self.tile_half_w, self.tile_half_h)
    }

    pub fn grid_to_screen(&self, cell: (i32, i32)) -> (i32, i32) {
        (
            self.origin.0 + (cell.0 - cell.1) * self.tile_half_w,
            self.origin.1 + (cell.0 + cell.1) * self.tile_half_h,
        )
    }

    /// Inverse of [`grid_to_screen`](Self::grid_to_screen). Never validates
    /// bounds; out-of-range results are expected near the grid edges and the
    /// caller filters them.
    pub fn screen_to_grid(&self, point: (i32, i32)) -> (i32, i32) {
        let dx = (point.0 - self.origin.0) as f64;
        let dy = (point.1 - self.origin.1) as f64;
        let a = dx / self.tile_half_w as f64;
        let b = dy / self.tile_half_h as f64;
        // f64::round rounds half away from zero, matching the fixed policy.
        (
            ((a + b) / 2.0).round() as i32,
            ((b - a) / 2.0).round() as i32,
        )
    }

    /// Rhombus corners around a tile center, in top/right/bottom/left order.
    pub fn tile_corners(&self, center: (i32, i32)) -> [(i32, i32); 4] {
        let (sx, sy) = center;
        [
            (sx, sy - self.tile_half_h),
            (sx + self.tile_half_w, sy),
            (sx, sy + self.tile_half_h),
            (sx - self.tile_half_w, sy),
        ]
    }
}
