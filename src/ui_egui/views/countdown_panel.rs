// Main countdown panel: target label, the three digit cells and the
// sehri/iftar pair for the day being displayed

use egui::{RichText, Ui};

use super::{card_frame, ltr_time_label};
use crate::models::texts::{countdown_units, prayers};
use crate::services::resolver::ResolvedState;
use crate::ui_egui::theme::PortalTheme;

pub fn render_countdown_panel(ui: &mut Ui, theme: &PortalTheme, state: &ResolvedState) {
    card_frame(theme).show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(format!("🕒 {}", state.target_label))
                    .size(20.0)
                    .color(theme.accent),
            );
            ui.add_space(12.0);

            // Digits always run left-to-right regardless of prose direction.
            ui.with_layout(
                egui::Layout::left_to_right(egui::Align::Center)
                    .with_main_align(egui::Align::Center),
                |ui| {
                    unit_cell(ui, theme, &state.countdown.hours_text(), countdown_units::HOURS);
                    separator(ui, theme);
                    unit_cell(
                        ui,
                        theme,
                        &state.countdown.minutes_text(),
                        countdown_units::MINUTES,
                    );
                    separator(ui, theme);
                    unit_cell(
                        ui,
                        theme,
                        &state.countdown.seconds_text(),
                        countdown_units::SECONDS,
                    );
                },
            );

            ui.add_space(16.0);
            ui.separator();
            ui.add_space(8.0);

            ui.columns(2, |cols| {
                marker_column(
                    &mut cols[0],
                    theme,
                    prayers::SEHRI_HEADING,
                    &state.display_sehri,
                    "☀",
                );
                marker_column(
                    &mut cols[1],
                    theme,
                    prayers::IFTAR_HEADING,
                    &state.display_iftar,
                    "🌙",
                );
            });
        });
    });
}

fn unit_cell(ui: &mut Ui, theme: &PortalTheme, value: &str, unit: &str) {
    ui.vertical(|ui| {
        ui.label(
            RichText::new(value)
                .monospace()
                .size(64.0)
                .strong()
                .color(theme.text_primary),
        );
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(unit).size(10.0).color(theme.text_faint));
        });
    });
}

fn separator(ui: &mut Ui, theme: &PortalTheme) {
    ui.label(
        RichText::new(":")
            .monospace()
            .size(48.0)
            .color(theme.text_faint),
    );
}

fn marker_column(ui: &mut Ui, theme: &PortalTheme, heading: &str, value: &str, icon: &str) {
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(format!("{} {}", icon, heading))
                .size(14.0)
                .color(theme.text_secondary),
        );
        ltr_time_label(ui, value, 26.0, theme.text_primary);
    });
}
