// Announcement ribbon with a continuously scrolling ticker

use egui::{pos2, vec2, FontId, RichText, Sense, Ui};

use crate::models::texts::announcement;
use crate::ui_egui::theme::PortalTheme;

const TICKER_HEIGHT: f32 = 40.0;
const SCROLL_SPEED: f32 = 55.0; // pixels per second

pub fn render_announcement(ui: &mut Ui, theme: &PortalTheme) {
    ui.horizontal(|ui| {
        // Fixed heading block on the gold ribbon.
        let heading = RichText::new(format!("ℹ {}", announcement::HEADING))
            .size(17.0)
            .strong()
            .color(theme.ribbon_text);
        egui::Frame::none()
            .fill(theme.ribbon_background)
            .rounding(egui::Rounding::same(8.0))
            .inner_margin(egui::Margin::symmetric(12.0, 8.0))
            .show(ui, |ui| {
                ui.label(heading);
            });

        // Scrolling region: paint the ticker text at a time-driven offset,
        // clipped to the allocated rect.
        let width = ui.available_width();
        let (rect, _) = ui.allocate_exact_size(vec2(width, TICKER_HEIGHT), Sense::hover());
        let painter = ui.painter_at(rect);

        let galley = painter.layout_no_wrap(
            announcement::TICKER.to_owned(),
            FontId::proportional(17.0),
            theme.text_primary,
        );

        let span = galley.size().x + rect.width();
        let elapsed = ui.input(|i| i.time) as f32;
        let offset = (elapsed * SCROLL_SPEED) % span;

        // Urdu reads right-to-left, so the text enters on the left edge and
        // travels right.
        let x = rect.left() - galley.size().x + offset;
        let y = rect.center().y - galley.size().y / 2.0;
        painter.galley(pos2(x, y), galley, theme.text_primary);

        ui.ctx().request_repaint();
    });
}
