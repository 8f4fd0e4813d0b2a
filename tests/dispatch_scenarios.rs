use isobrush::board::palette::Palette;
use isobrush::board::world::{BrushColor, TileBrush};
use isobrush::board::{dispatch, AppState, DispatchOutcome, InputEvent, PointerButton};
use isobrush::settings::Settings;

fn default_state() -> AppState {
    AppState::new(&Settings::default(), Palette::default_colors())
}

fn primary_down(pos: (i32, i32)) -> InputEvent {
    InputEvent::ButtonDown {
        button: PointerButton::Primary,
        pos,
    }
}

fn primary_up(pos: (i32, i32)) -> InputEvent {
    InputEvent::ButtonUp {
        button: PointerButton::Primary,
        pos,
    }
}

#[test]
fn painting_and_erasing_cell_3_3_via_pixel_clicks() {
    // 10x10 grid, 64x32 tiles, centered origin.
    let mut state = default_state();
    let pixel = state.projection.grid_to_screen((3, 3));

    assert_eq!(dispatch(&mut state, primary_down(pixel)), DispatchOutcome::Continue);
    assert_eq!(
        state.world.get((3, 3)),
        Some(TileBrush::Color(BrushColor::rgb(255, 0, 0)))
    );

    dispatch(&mut state, primary_up(pixel));
    dispatch(&mut state, primary_down(pixel));
    assert_eq!(state.world.get((3, 3)), None);
}

#[test]
fn selecting_an_item_then_painting_uses_the_new_brush() {
    let mut state = default_state();
    let (idx, rect) = state.widget.item_rects(state.palette.len())[2];
    assert_eq!(idx, 2);

    dispatch(&mut state, primary_down((rect.x + 1, rect.y + 1)));
    dispatch(&mut state, primary_up((rect.x + 1, rect.y + 1)));
    assert_eq!(state.palette.selected_index(), 2);

    let pixel = state.projection.grid_to_screen((5, 7));
    dispatch(&mut state, primary_down(pixel));
    assert_eq!(
        state.world.get((5, 7)),
        Some(TileBrush::Color(BrushColor::rgb(0, 0, 255)))
    );
}

#[test]
fn painting_over_a_cell_with_a_different_brush_overwrites() {
    let mut state = default_state();
    let pixel = state.projection.grid_to_screen((0, 9));

    dispatch(&mut state, primary_down(pixel));
    dispatch(&mut state, primary_up(pixel));

    let (_, rect) = state.widget.item_rects(state.palette.len())[4];
    dispatch(&mut state, primary_down((rect.x + 1, rect.y + 1)));
    dispatch(&mut state, primary_up((rect.x + 1, rect.y + 1)));

    dispatch(&mut state, primary_down(pixel));
    assert_eq!(
        state.world.get((0, 9)),
        Some(TileBrush::Color(BrushColor::rgb(255, 165, 0)))
    );
}

#[test]
fn one_dispatch_step_never_feeds_both_widget_and_grid() {
    let mut state = default_state();

    // Inside the widget: the grid must stay untouched.
    let (wx, wy) = state.widget.position();
    let world_before = state.world.clone();
    dispatch(&mut state, primary_down((wx + 2, wy + 2)));
    assert_eq!(state.world, world_before);
    dispatch(&mut state, primary_up((wx + 2, wy + 2)));

    // Outside the widget: palette and widget state must stay untouched.
    let widget_before = state.widget;
    let selection_before = state.palette.selected_index();
    let pixel = state.projection.grid_to_screen((4, 4));
    dispatch(&mut state, primary_down(pixel));
    assert_eq!(state.widget, widget_before);
    assert_eq!(state.palette.selected_index(), selection_before);
}

#[test]
fn dragging_the_widget_through_the_dispatcher_stays_clamped() {
    let mut state = default_state();
    let (wx, wy) = state.widget.position();

    dispatch(&mut state, primary_down((wx + 3, wy + 3)));
    for pos in [(-2000, -2000), (4000, 4000), (100, 100), (-50, 700)] {
        dispatch(&mut state, InputEvent::Motion { pos });
        let (x, y) = state.widget.position();
        assert!((0..=600).contains(&x), "x escaped: {x}");
        assert!((0..=500).contains(&y), "y escaped: {y}");
    }
    dispatch(&mut state, primary_up((0, 0)));

    // Motion with the button released moves nothing.
    let frozen = state.widget.position();
    dispatch(&mut state, InputEvent::Motion { pos: (300, 300) });
    assert_eq!(state.widget.position(), frozen);
}

#[test]
fn minimized_widget_keeps_its_selection_regardless_of_clicks() {
    let mut state = default_state();
    let item_rects = state.widget.item_rects(state.palette.len());
    let button = state.widget.minimize_rect();

    dispatch(&mut state, primary_down((button.x + 1, button.y + 1)));
    dispatch(&mut state, primary_up((button.x + 1, button.y + 1)));
    assert!(state.widget.minimized());

    for (_, rect) in item_rects {
        dispatch(&mut state, primary_down((rect.x + 1, rect.y + 1)));
        dispatch(&mut state, primary_up((rect.x + 1, rect.y + 1)));
    }
    assert_eq!(state.palette.selected_index(), 0);
}

#[test]
fn wheel_zoom_floors_and_recenters_the_projection() {
    let mut state = default_state();
    for _ in 0..5 {
        dispatch(&mut state, InputEvent::Wheel { ticks: -1 });
    }
    assert!((state.zoom.factor() - 0.5).abs() < 1e-6);
    assert_eq!(state.projection.tile_half_size(), (16, 8));
    assert_eq!(state.projection.origin(), (400, 220));

    for _ in 0..10 {
        dispatch(&mut state, InputEvent::Wheel { ticks: -1 });
    }
    assert!((state.zoom.factor() - 0.2).abs() < 1e-6);

    // Painting still hits the right cell after zooming.
    let pixel = state.projection.grid_to_screen((8, 1));
    dispatch(&mut state, primary_down(pixel));
    assert_eq!(
        state.world.get((8, 1)),
        Some(TileBrush::Color(BrushColor::rgb(255, 0, 0)))
    );
}

#[test]
fn texture_palette_paints_by_asset_index() {
    let mut state = AppState::new(&Settings::default(), Palette::from_texture_count(2));
    let (_, rect) = state.widget.item_rects(2)[1];
    dispatch(&mut state, primary_down((rect.x + 1, rect.y + 1)));
    dispatch(&mut state, primary_up((rect.x + 1, rect.y + 1)));

    let pixel = state.projection.grid_to_screen((6, 6));
    dispatch(&mut state, primary_down(pixel));
    assert_eq!(state.world.get((6, 6)), Some(TileBrush::Texture(1)));
}

#[test]
fn clicks_on_wide_texture_item_boxes_never_paint_the_grid() {
    let mut state = AppState::new(&Settings::default(), Palette::from_texture_count(1));
    let (_, rect) = state.widget.item_rects(1)[0];
    let world_before = state.world.clone();

    dispatch(
        &mut state,
        primary_down((rect.x + rect.w - 1, rect.y + rect.h - 1)),
    );
    assert_eq!(state.world, world_before);
    assert_eq!(state.palette.selected_index(), 0);
}

#[test]
fn quit_event_ends_dispatch() {
    let mut state = default_state();
    assert_eq!(dispatch(&mut state, InputEvent::Quit), DispatchOutcome::Quit);
}
