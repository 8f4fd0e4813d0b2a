use crate::board::world::{BrushColor, TileBrush};

/// Ordered, immutable-after-load list of selectable brushes. Exactly one is
/// selected at any time; selection defaults to the first item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    items: Vec<TileBrush>,
    selected: usize,
}

impl Palette {
    pub fn new(items: Vec<TileBrush>) -> Self {
        debug_assert!(!items.is_empty(), "palette needs at least one item");
        Self { items, selected: 0 }
    }

    /// The seven fixed colors of the color-palette configuration.
    pub fn default_colors() -> Self {
        Self::new(
            [
                BrushColor::rgb(255, 0, 0),
                BrushColor::rgb(0, 255, 0),
                BrushColor::rgb(0, 0, 255),
                BrushColor::rgb(255, 255, 0),
                BrushColor::rgb(255, 165, 0),
                BrushColor::rgb(128, 0, 128),
                BrushColor::rgb(255, 192, 203),
            ]
            .into_iter()
            .map(TileBrush::Color)
            .collect(),
        )
    }

    /// One texture brush per loaded asset, in load order.
    pub fn from_texture_count(count: usize) -> Self {
        Self::new((0..count).map(TileBrush::Texture).collect())
    }

    pub fn items(&self) -> &[TileBrush] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> TileBrush {
        self.items[self.selected]
    }

    pub fn select(&mut self, index: usize) {
        debug_assert!(index < self.items.len(), "selection index out of range");
        self.selected = index;
    }
}
