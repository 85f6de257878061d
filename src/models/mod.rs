// Module exports for models

pub mod display;
pub mod hijri;
pub mod prayer;
pub mod settings;
