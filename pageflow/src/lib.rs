mod app;
pub mod background;
pub mod commands;
pub mod events;
pub mod list_core;
pub mod logging;
pub mod presenter;
pub mod session;
pub mod settings;
pub mod source;
pub mod state;

pub use app::App;
pub use settings::Settings;

// Always expose testing module (integration tests need it)
pub mod testing;
