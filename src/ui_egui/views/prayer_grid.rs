// Prayer times panel
// Fajr and Maghrib mirror the resolver's current sehri/iftar pair; the
// middle three slots are fixed congregation times.

use egui::{RichText, Ui};

use super::{card_frame, ltr_time_label};
use crate::models::texts::prayers;
use crate::services::resolver::ResolvedState;
use crate::ui_egui::theme::PortalTheme;

pub fn render_prayer_grid(ui: &mut Ui, theme: &PortalTheme, state: &ResolvedState) {
    let slots: [(&str, &str); 5] = [
        (prayers::FAJR, state.fajr.as_str()),
        (prayers::ZUHR, prayers::ZUHR_TIME),
        (prayers::ASR, prayers::ASR_TIME),
        (prayers::MAGHRIB, state.maghrib.as_str()),
        (prayers::ISHA, prayers::ISHA_TIME),
    ];

    card_frame(theme).show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(format!("🔔 {}", prayers::PANEL_TITLE))
                    .size(18.0)
                    .strong()
                    .color(theme.accent),
            );
        });
        ui.add_space(10.0);

        ui.columns(slots.len(), |cols| {
            for (col, (name, time)) in cols.iter_mut().zip(slots) {
                col.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(name)
                            .size(16.0)
                            .strong()
                            .color(theme.accent_bright),
                    );
                    ltr_time_label(ui, time, 13.0, theme.text_primary);
                });
            }
        });
    });
}
