pub mod executor;
pub mod handlers;

pub use crate::events::ListIntent;
pub use handlers::ConsoleCommand;
