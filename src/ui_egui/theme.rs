//! Theme module for the portal display
//!
//! Defines the PortalTheme structure and applies it to the egui context.
//! The palette follows the original portal artwork: deep emerald night
//! background with gold accents.

use egui::Color32;

/// Colors used across the portal surface.
#[derive(Debug, Clone)]
pub struct PortalTheme {
    /// Application background color
    pub app_background: Color32,

    /// Card/panel background color
    pub card_background: Color32,

    /// Card border color
    pub card_border: Color32,

    /// Gold accent (headings, highlights)
    pub accent: Color32,

    /// Brighter gold used for prayer names
    pub accent_bright: Color32,

    /// Primary text color
    pub text_primary: Color32,

    /// Secondary/dimmed text color
    pub text_secondary: Color32,

    /// Faint text for captions and unit labels
    pub text_faint: Color32,

    /// Announcement ribbon background
    pub ribbon_background: Color32,

    /// Announcement ribbon text
    pub ribbon_text: Color32,
}

impl PortalTheme {
    /// The emerald-and-gold night theme the portal ships with.
    pub fn night() -> Self {
        Self {
            app_background: Color32::from_rgb(6, 30, 24),
            card_background: Color32::from_rgb(11, 45, 36),
            card_border: Color32::from_rgb(66, 57, 26),
            accent: Color32::from_rgb(212, 175, 55),
            accent_bright: Color32::from_rgb(241, 196, 15),
            text_primary: Color32::from_rgb(255, 255, 255),
            text_secondary: Color32::from_rgb(200, 208, 204),
            text_faint: Color32::from_rgb(140, 152, 146),
            ribbon_background: Color32::from_rgb(212, 175, 55),
            ribbon_text: Color32::from_rgb(0, 50, 20),
        }
    }

    /// Apply this theme to an egui context.
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::dark();

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;
        visuals.widgets.noninteractive.bg_fill = self.card_background;
        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, self.card_border);
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}
