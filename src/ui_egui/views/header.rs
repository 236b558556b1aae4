// Header: location badge, council title and portal subtitle

use egui::{RichText, Ui};

use super::card_frame;
use crate::models::texts::header;
use crate::ui_egui::theme::PortalTheme;

pub fn render_header(ui: &mut Ui, theme: &PortalTheme) {
    ui.vertical_centered(|ui| {
        card_frame(theme)
            .inner_margin(egui::Margin::symmetric(14.0, 4.0))
            .rounding(egui::Rounding::same(12.0))
            .show(ui, |ui| {
                ui.label(
                    RichText::new(format!("📍 {}", header::LOCATION))
                        .size(14.0)
                        .color(theme.accent),
                );
            });

        ui.add_space(6.0);

        ui.horizontal_wrapped(|ui| {
            ui.with_layout(
                egui::Layout::top_down(egui::Align::Center),
                |ui| {
                    ui.label(
                        RichText::new(format!(
                            "{} {}",
                            header::TITLE_LEAD,
                            header::TITLE_ACCENT
                        ))
                        .size(42.0)
                        .strong()
                        .color(theme.text_primary),
                    );
                    ui.label(
                        RichText::new(header::SUBTITLE)
                            .size(18.0)
                            .color(theme.text_secondary),
                    );
                },
            );
        });
    });
}
