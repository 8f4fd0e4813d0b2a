use crate::board::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// Backend-independent input events, in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    ButtonDown {
        button: PointerButton,
        pos: (i32, i32),
    },
    ButtonUp {
        button: PointerButton,
        pos: (i32, i32),
    },
    Motion {
        pos: (i32, i32),
    },
    Wheel {
        ticks: i32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Continue,
    Quit,
}

/// Route one event through the frame's handling order: quit, then zoom,
/// then the palette widget, then grid painting.
///
/// The widget owns every button-down inside its rect; only unconsumed
/// primary-button-downs reach the inverse transform, and out-of-range picks
/// are dropped silently.
pub fn dispatch(state: &mut AppState, event: InputEvent) -> DispatchOutcome {
    match event {
        InputEvent::Quit => return DispatchOutcome::Quit,
        InputEvent::Wheel { ticks } => {
            if state.zoom_enabled() && ticks != 0 {
                state.zoom.step_by(ticks);
                state.rebuild_projection();
                tracing::debug!(factor = state.zoom.factor(), "zoom changed");
            }
        }
        InputEvent::ButtonDown { button, pos } => {
            let response = state.widget.handle_button_down(button, pos, state.palette.len());
            if let Some(index) = response.selected {
                state.palette.select(index);
                tracing::debug!(index, "palette selection changed");
            }
            if response.consumed {
                return DispatchOutcome::Continue;
            }
            if button == PointerButton::Primary {
                let cell = state.projection.screen_to_grid(pos);
                if state.world.in_bounds(cell) {
                    state.world.toggle(cell, state.palette.selected());
                } else {
                    tracing::trace!(?cell, "click outside the grid ignored");
                }
            }
        }
        InputEvent::ButtonUp { button, .. } => {
            state.widget.handle_button_up(button);
        }
        InputEvent::Motion { pos } => {
            state.widget.handle_motion(pos);
        }
    }
    DispatchOutcome::Continue
}
