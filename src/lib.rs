pub mod app;
pub mod assets;
pub mod board;
pub mod logging;
pub mod settings;
