// Info bar: today's Gregorian date (Urdu month names), the fixed Hijri
// year label and the footer attribution

use chrono::NaiveDate;
use egui::{RichText, Ui};

use super::card_frame;
use crate::models::texts::info;
use crate::ui_egui::theme::PortalTheme;
use crate::utils::time::format_urdu_date;

pub fn render_info_bar(ui: &mut Ui, theme: &PortalTheme, today: NaiveDate) {
    card_frame(theme).show(ui, |ui| {
        ui.columns(2, |cols| {
            cols[0].vertical(|ui| {
                ui.label(
                    RichText::new(format!("📅 {}", info::TODAY_DATE))
                        .size(11.0)
                        .color(theme.text_faint),
                );
                ui.label(
                    RichText::new(format_urdu_date(today))
                        .size(17.0)
                        .color(theme.text_primary),
                );
            });
            cols[1].with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                ui.label(
                    RichText::new(info::ISLAMIC_YEAR)
                        .size(11.0)
                        .color(theme.text_faint),
                );
                ui.label(
                    RichText::new(info::HIJRI_YEAR)
                        .size(17.0)
                        .color(theme.accent),
                );
            });
        });
    });
}

pub fn render_footer(ui: &mut Ui, theme: &PortalTheme) {
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(info::FOOTER_SOURCE)
                .size(12.0)
                .color(theme.text_faint),
        );
        ui.label(
            RichText::new(info::FOOTER_ADDRESS)
                .size(12.0)
                .color(theme.text_faint),
        );
    });
}
