// Module exports for models

pub mod assignment;
pub mod employee;
pub mod settings;
pub mod time_slot;
