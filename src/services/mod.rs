// Service module exports

pub mod appointments;
pub mod settings;
