use egui::{Align, Layout, RichText, Sense, Ui};

use super::theme::AthanTheme;
use crate::services::display::{FormattedDisplay, PrayerRow};

/// Lay out the whole window: date header, prayer table, countdown.
pub fn render_display(ui: &mut Ui, display: &FormattedDisplay, theme: &AthanTheme) {
    ui.vertical_centered(|ui| {
        section(ui, theme, |ui| render_date_section(ui, display, theme));
        render_separator(ui, theme);
        section(ui, theme, |ui| render_prayer_table(ui, &display.rows, theme));
        render_separator(ui, theme);
        section(ui, theme, |ui| render_countdown_section(ui, display, theme));
    });
}

fn section(ui: &mut Ui, theme: &AthanTheme, add_contents: impl FnOnce(&mut Ui)) {
    egui::Frame::none()
        .inner_margin(egui::Margin::same(theme.section_inset))
        .show(ui, add_contents);
}

fn render_date_section(ui: &mut Ui, display: &FormattedDisplay, theme: &AthanTheme) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(&display.hijri_day)
                .size(theme.day_size)
                .color(theme.header_text),
        );
        ui.add_space(16.0);
        ui.vertical(|ui| {
            ui.label(
                RichText::new(display.hijri_month)
                    .size(theme.month_size)
                    .color(theme.header_text),
            );
            ui.label(
                RichText::new(&display.hijri_year)
                    .size(theme.year_size)
                    .color(theme.header_text),
            );
        });
    });
}

fn render_separator(ui: &mut Ui, theme: &AthanTheme) {
    ui.add_space(8.0);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), 1.0), Sense::hover());
    ui.painter().rect_filled(rect, 0.0, theme.separator);
    ui.add_space(8.0);
}

fn render_prayer_table(ui: &mut Ui, rows: &[PrayerRow], theme: &AthanTheme) {
    for row in rows {
        let color = if row.is_next {
            theme.row_highlight
        } else {
            theme.row_text
        };
        let text = |s: &str| {
            let text = RichText::new(s).size(theme.row_size).color(color);
            if row.is_next {
                text.strong()
            } else {
                text
            }
        };

        ui.add_space(theme.row_spacing);
        ui.horizontal(|ui| {
            ui.label(text(row.name));
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(text(&row.time));
            });
        });
        ui.add_space(theme.row_spacing);
    }
}

fn render_countdown_section(ui: &mut Ui, display: &FormattedDisplay, theme: &AthanTheme) {
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(&display.next_label)
                .size(theme.row_size)
                .color(theme.row_text),
        );
        egui::Frame::none()
            .fill(theme.countdown_background)
            .rounding(theme.countdown_rounding)
            .show(ui, |ui| {
                ui.label(
                    RichText::new(&display.countdown)
                        .size(theme.countdown_size)
                        .color(theme.countdown_text)
                        .monospace(),
                );
            });
    });
}
