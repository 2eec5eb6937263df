// Service module exports

pub mod schedule;
pub mod settings;
