mod render;
mod state;

pub use render::render_assignment_dialog;
pub use state::{AssignmentDialogState, AssignmentForm, DialogSubmit};
