pub mod actions;
mod app;
pub mod assignment_dialog;
pub mod drag;
pub mod theme;
pub mod views;

pub use app::state::SchedulerState;
pub use app::{load_settings_or_default, SchedulerApp};
