pub mod input;
pub mod iso;
pub mod palette;
pub mod render;
pub mod state;
pub mod widget;
pub mod world;
pub mod zoom;

pub use input::{dispatch, DispatchOutcome, InputEvent, PointerButton};
pub use state::AppState;
