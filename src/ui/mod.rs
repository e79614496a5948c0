//! Front ends over [`crate::game::Session`]: an interactive terminal UI and a
//! plain-text renderer for headless play.

mod app;
mod game_view;
pub mod text;

pub use app::App;
pub use text::{render_text, run_script, write_events, EventLog};
