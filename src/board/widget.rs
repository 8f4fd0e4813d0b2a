use crate::board::input::PointerButton;

pub const PANEL_WIDTH: i32 = 200;
pub const PANEL_HEIGHT: i32 = 100;
pub const MINIMIZED_HEIGHT: i32 = 30;
pub const SCREEN_MARGIN: i32 = 10;
const ITEM_MARGIN: i32 = 10;
const ITEM_INSET: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WidgetRect {
    pub fn contains(self, point: (i32, i32)) -> bool {
        point.0 >= self.x
            && point.0 < self.x + self.w
            && point.1 >= self.y
            && point.1 < self.y + self.h
    }
}

/// What a pointer position inside the panel lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetHitTarget {
    MinimizeToggle,
    Item(usize),
    Body,
}

/// Outcome of offering a pointer event to the widget. `consumed` means the
/// event must not also reach grid painting; `selected` carries a palette
/// index when the event landed on an item box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WidgetResponse {
    pub consumed: bool,
    pub selected: Option<usize>,
}

impl WidgetResponse {
    fn consumed() -> Self {
        Self {
            consumed: true,
            selected: None,
        }
    }
}

/// The movable, minimizable palette panel.
///
/// State is `{normal, minimized} x {idle, dragging}`; all four combinations
/// are reachable, since the minimized bar remains draggable. The position
/// invariant holds after every transition: the full-height bounding rect
/// stays inside the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteWidget {
    position: (i32, i32),
    width: i32,
    height: i32,
    screen: (i32, i32),
    movable: bool,
    minimized: bool,
    dragging: bool,
    drag_offset: (i32, i32),
}

impl PaletteWidget {
    pub fn new(screen: (i32, i32), movable: bool) -> Self {
        let mut widget = Self {
            position: (
                screen.0 - PANEL_WIDTH - SCREEN_MARGIN,
                screen.1 - PANEL_HEIGHT - SCREEN_MARGIN,
            ),
            width: PANEL_WIDTH,
            height: PANEL_HEIGHT,
            screen,
            movable,
            minimized: false,
            dragging: false,
            drag_offset: (0, 0),
        };
        widget.clamp_position();
        widget
    }

    pub fn position(&self) -> (i32, i32) {
        self.position
    }

    pub fn minimized(&self) -> bool {
        self.minimized
    }

    pub fn dragging(&self) -> bool {
        self.dragging
    }

    /// Outer bounding rect; only as tall as the title bar when minimized.
    pub fn panel_rect(&self) -> WidgetRect {
        WidgetRect {
            x: self.position.0,
            y: self.position.1,
            w: self.width,
            h: if self.minimized {
                MINIMIZED_HEIGHT
            } else {
                self.height
            },
        }
    }

    /// Minimize button, fixed relative to the panel's top-right corner.
    pub fn minimize_rect(&self) -> WidgetRect {
        WidgetRect {
            x: self.position.0 + self.width - 25,
            y: self.position.1 + 5,
            w: 20,
            h: 20,
        }
    }

    /// One equal-width box per palette item, laid out in a single row below
    /// the title bar. Boxes are non-overlapping by construction, and their
    /// height is capped at the panel interior so small palettes with wide
    /// boxes never spill past the border.
    pub fn item_rects(&self, item_count: usize) -> Vec<(usize, WidgetRect)> {
        if item_count == 0 {
            return Vec::new();
        }
        let box_size = (self.width - 2 * ITEM_MARGIN) / item_count as i32;
        let box_h = (box_size - ITEM_INSET).min(self.height - MINIMIZED_HEIGHT - 2 * ITEM_MARGIN);
        (0..item_count)
            .map(|idx| {
                (
                    idx,
                    WidgetRect {
                        x: self.position.0 + ITEM_MARGIN + idx as i32 * box_size,
                        y: self.position.1 + MINIMIZED_HEIGHT + 10,
                        w: box_size - ITEM_INSET,
                        h: box_h,
                    },
                )
            })
            .collect()
    }

    pub fn hit_test(&self, point: (i32, i32), item_count: usize) -> Option<WidgetHitTarget> {
        if !self.panel_rect().contains(point) {
            return None;
        }
        if self.minimize_rect().contains(point) {
            return Some(WidgetHitTarget::MinimizeToggle);
        }
        if !self.minimized {
            for (idx, rect) in self.item_rects(item_count) {
                if rect.contains(point) {
                    return Some(WidgetHitTarget::Item(idx));
                }
            }
        }
        Some(WidgetHitTarget::Body)
    }

    /// Offer a button-down to the widget. Events outside the panel rect are
    /// not consumed and flow back to the dispatcher; secondary-button events
    /// inside it are consumed no-ops reserved for future use.
    ///
    /// Clicking an item box selects it without starting a drag; only panel
    /// chrome drags the window.
    pub fn handle_button_down(
        &mut self,
        button: PointerButton,
        point: (i32, i32),
        item_count: usize,
    ) -> WidgetResponse {
        let Some(target) = self.hit_test(point, item_count) else {
            return WidgetResponse::default();
        };
        if button != PointerButton::Primary {
            return WidgetResponse::consumed();
        }
        match target {
            WidgetHitTarget::MinimizeToggle => {
                self.minimized = !self.minimized;
                WidgetResponse::consumed()
            }
            WidgetHitTarget::Item(idx) => WidgetResponse {
                consumed: true,
                selected: Some(idx),
            },
            WidgetHitTarget::Body => {
                if self.movable {
                    self.dragging = true;
                    self.drag_offset = (self.position.0 - point.0, self.position.1 - point.1);
                }
                WidgetResponse::consumed()
            }
        }
    }

    pub fn handle_button_up(&mut self, button: PointerButton) {
        if button == PointerButton::Primary {
            self.dragging = false;
        }
    }

    pub fn handle_motion(&mut self, point: (i32, i32)) {
        if !self.dragging {
            return;
        }
        self.position = (point.0 + self.drag_offset.0, point.1 + self.drag_offset.1);
        self.clamp_position();
    }

    fn clamp_position(&mut self) {
        self.position.0 = self.position.0.clamp(0, (self.screen.0 - self.width).max(0));
        self.position.1 = self
            .position
            .1
            .clamp(0, (self.screen.1 - self.height).max(0));
    }
}
