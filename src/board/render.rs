use eframe::egui::{self, Color32, Pos2, Rect, Shape, Stroke, TextureHandle};

use crate::board::state::AppState;
use crate::board::widget::{PaletteWidget, WidgetRect};
use crate::board::world::{BrushColor, TileBrush};

const BACKGROUND: Color32 = Color32::BLACK;
const GRID_LINE: Color32 = Color32::WHITE;
const PANEL_FILL: Color32 = Color32::from_rgb(50, 50, 50);
const PANEL_BORDER: Color32 = Color32::from_rgb(200, 200, 200);
const HIGHLIGHT: Color32 = Color32::WHITE;

/// Draw one frame from the current state. Reads only; all mutation happens
/// in event handling.
pub fn paint_frame(painter: &egui::Painter, state: &AppState, textures: &[TextureHandle]) {
    let (sw, sh) = state.screen();
    painter.rect_filled(
        Rect::from_min_max(Pos2::ZERO, pos((sw, sh))),
        0.0,
        BACKGROUND,
    );
    paint_grid(painter, state, textures);
    paint_widget(painter, state, textures);
}

fn paint_grid(painter: &egui::Painter, state: &AppState, textures: &[TextureHandle]) {
    let (tw2, th2) = state.projection.tile_half_size();
    for y in 0..state.world.height() {
        for x in 0..state.world.width() {
            let center = state.projection.grid_to_screen((x, y));
            let corners = state
                .projection
                .tile_corners(center)
                .iter()
                .map(|&p| pos(p))
                .collect::<Vec<_>>();
            match state.world.get((x, y)) {
                None => {
                    painter.add(Shape::closed_line(corners, Stroke::new(1.0, GRID_LINE)));
                }
                Some(TileBrush::Color(color)) => {
                    painter.add(Shape::convex_polygon(
                        corners,
                        to_color32(color),
                        Stroke::NONE,
                    ));
                }
                Some(TileBrush::Texture(index)) => {
                    if let Some(texture) = textures.get(index) {
                        let rect = Rect::from_min_max(
                            pos((center.0 - tw2, center.1 - th2)),
                            pos((center.0 + tw2, center.1 + th2)),
                        );
                        painter.image(texture.id(), rect, uv_full(), Color32::WHITE);
                    }
                }
            }
        }
    }
}

/// Panel chrome first, then the item row unless minimized.
fn paint_widget(painter: &egui::Painter, state: &AppState, textures: &[TextureHandle]) {
    let widget = &state.widget;
    painter.rect_filled(rect(widget.panel_rect()), 0.0, PANEL_FILL);
    painter.rect_stroke(
        rect(widget.panel_rect()),
        0.0,
        Stroke::new(2.0, PANEL_BORDER),
    );

    let button = rect(widget.minimize_rect());
    painter.rect_filled(button, 0.0, PANEL_BORDER);
    painter.line_segment(
        [
            Pos2::new(button.left() + 5.0, button.center().y),
            Pos2::new(button.right() - 5.0, button.center().y),
        ],
        Stroke::new(2.0, Color32::BLACK),
    );

    if widget.minimized() {
        return;
    }
    paint_items(painter, widget, state, textures);
}

fn paint_items(
    painter: &egui::Painter,
    widget: &PaletteWidget,
    state: &AppState,
    textures: &[TextureHandle],
) {
    for (idx, item_rect) in widget.item_rects(state.palette.len()) {
        let box_rect = rect(item_rect);
        match state.palette.items()[idx] {
            TileBrush::Color(color) => {
                painter.rect_filled(box_rect, 0.0, to_color32(color));
            }
            TileBrush::Texture(index) => {
                if let Some(texture) = textures.get(index) {
                    painter.image(texture.id(), box_rect, uv_full(), Color32::WHITE);
                }
            }
        }
        if idx == state.palette.selected_index() {
            painter.rect_stroke(box_rect, 0.0, Stroke::new(3.0, HIGHLIGHT));
        }
    }
}

fn pos(p: (i32, i32)) -> Pos2 {
    Pos2::new(p.0 as f32, p.1 as f32)
}

fn rect(r: WidgetRect) -> Rect {
    Rect::from_min_size(
        Pos2::new(r.x as f32, r.y as f32),
        egui::Vec2::new(r.w as f32, r.h as f32),
    )
}

fn uv_full() -> Rect {
    Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0))
}

fn to_color32(color: BrushColor) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}
