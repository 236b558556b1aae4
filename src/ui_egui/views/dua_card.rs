// Dua card: shows the sehri or iftar dua depending on the resolver's index

use egui::{RichText, Ui};

use super::card_frame;
use crate::models::dua::Dua;
use crate::ui_egui::theme::PortalTheme;

pub fn render_dua_card(ui: &mut Ui, theme: &PortalTheme, dua_index: usize) {
    let dua = Dua::for_index(dua_index);

    card_frame(theme).show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("🤲").size(22.0).color(theme.accent));
            ui.add_space(8.0);
            ui.label(
                RichText::new(dua.title)
                    .size(20.0)
                    .strong()
                    .color(theme.accent),
            );
            ui.add_space(10.0);
            ui.label(
                RichText::new(dua.arabic)
                    .size(26.0)
                    .color(theme.text_primary),
            );
            ui.add_space(10.0);
            ui.label(
                RichText::new(dua.urdu)
                    .size(15.0)
                    .color(theme.text_secondary),
            );
        });
    });
}
