// egui front end for the prayer clock

pub mod app;
pub mod theme;
mod views;

pub use app::{AthanApp, FatalErrorSlot};
pub use theme::AthanTheme;
