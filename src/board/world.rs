#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrushColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl BrushColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// What a cell can be painted with. Colors compare by exact component match,
/// textures by asset index identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileBrush {
    Color(BrushColor),
    Texture(usize),
}

/// Fixed-size grid of optional paint values, all empty at startup and never
/// resized. `toggle` is the sole mutator.
///
/// Callers bounds-check cells before calling in; the grid treats an
/// out-of-range cell as a programming error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldGrid {
    width: i32,
    height: i32,
    cells: Vec<Option<TileBrush>>,
}

impl WorldGrid {
    pub fn new(width: i32, height: i32) -> Self {
        debug_assert!(width > 0 && height > 0, "grid dimensions must be positive");
        Self {
            width,
            height,
            cells: vec![None; (width * height) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, cell: (i32, i32)) -> bool {
        cell.0 >= 0 && cell.0 < self.width && cell.1 >= 0 && cell.1 < self.height
    }

    pub fn get(&self, cell: (i32, i32)) -> Option<TileBrush> {
        debug_assert!(self.in_bounds(cell), "cell {cell:?} out of range");
        self.cells[self.index(cell)]
    }

    /// Paint `cell` with `brush`, or erase it if it already holds an equal
    /// brush. Painting over a different brush overwrites.
    pub fn toggle(&mut self, cell: (i32, i32), brush: TileBrush) {
        debug_assert!(self.in_bounds(cell), "cell {cell:?} out of range");
        let index = self.index(cell);
        let slot = &mut self.cells[index];
        *slot = if *slot == Some(brush) { None } else { Some(brush) };
    }

    fn index(&self, cell: (i32, i32)) -> usize {
        (cell.1 * self.width + cell.0) as usize
    }
}
