//! Theme module for the prayer clock window
//!
//! Defines the AthanTheme structure. A theme is built once at startup and
//! passed by reference into every render function; drawing never changes it.

use egui::Color32;

/// Colours, text sizes and spacing used by the prayer clock.
#[derive(Debug, Clone, PartialEq)]
pub struct AthanTheme {
    /// Window background color
    pub background: Color32,

    /// Hijri date header text
    pub header_text: Color32,

    /// Prayer table text
    pub row_text: Color32,

    /// Prayer table text for the upcoming prayer
    pub row_highlight: Color32,

    /// Countdown text
    pub countdown_text: Color32,

    /// Fill behind the countdown
    pub countdown_background: Color32,

    /// Thin rule between sections
    pub separator: Color32,

    pub day_size: f32,
    pub month_size: f32,
    pub year_size: f32,
    pub row_size: f32,
    pub countdown_size: f32,

    /// Outer padding around each section
    pub section_inset: f32,
    /// Vertical padding around each prayer row
    pub row_spacing: f32,
    pub countdown_rounding: f32,
}

impl Default for AthanTheme {
    fn default() -> Self {
        Self::sky()
    }
}

impl AthanTheme {
    /// Light blue default theme
    pub fn sky() -> Self {
        Self {
            background: Color32::from_rgb(0x42, 0xA5, 0xF5),
            header_text: Color32::from_rgb(0x33, 0x33, 0x33),
            row_text: Color32::from_rgb(0x44, 0x44, 0x44),
            row_highlight: Color32::WHITE,
            countdown_text: Color32::WHITE,
            countdown_background: Color32::from_rgb(0x42, 0xA5, 0xF5),
            separator: Color32::from_rgba_unmultiplied(0xFF, 0xFF, 0xFF, 0x40),
            day_size: 48.0,
            month_size: 30.0,
            year_size: 22.0,
            row_size: 18.0,
            countdown_size: 20.0,
            section_inset: 10.0,
            row_spacing: 6.0,
            countdown_rounding: 4.0,
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::light();

        visuals.window_fill = self.background;
        visuals.panel_fill = self.background;
        visuals.override_text_color = Some(self.row_text);

        ctx.set_visuals(visuals);
    }
}
