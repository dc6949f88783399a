//! Terminal shell for hot-seat chess
//!
//! Everything rules-related lives in [`chess_rules`]; this crate only maps
//! typed square names to board cells, draws the board as text and keeps
//! user preferences.

pub mod cli;
pub mod error;
pub mod input;
pub mod render;
pub mod session;
pub mod settings;

pub use cli::Cli;
pub use error::{ShellError, ShellResult};
pub use session::Session;
pub use settings::GameSettings;
