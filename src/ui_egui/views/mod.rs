// Portal view components

pub mod countdown_panel;
pub mod dua_card;
pub mod header;
pub mod info_bar;
pub mod marquee;
pub mod prayer_grid;

use egui::{Frame, Margin, Rounding, Stroke, Ui};

use super::theme::PortalTheme;

/// Rounded card frame shared by every panel.
pub fn card_frame(theme: &PortalTheme) -> Frame {
    Frame::none()
        .fill(theme.card_background)
        .stroke(Stroke::new(1.0, theme.card_border))
        .rounding(Rounding::same(18.0))
        .inner_margin(Margin::same(18.0))
}

/// Left-to-right island for numeric time runs inside RTL prose.
pub fn ltr_time_label(ui: &mut Ui, text: &str, size: f32, color: egui::Color32) {
    ui.label(
        egui::RichText::new(text)
            .monospace()
            .size(size)
            .color(color),
    );
}
