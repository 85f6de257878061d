// Service module exports

pub mod display;
pub mod hijri;
pub mod refresh;
pub mod schedule;
pub mod settings;
