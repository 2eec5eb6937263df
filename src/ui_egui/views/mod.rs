pub mod layout;
pub mod palette;
pub mod schedule_grid;
pub mod slot_cell;
