// src/gui/theme.rs
use eframe::egui::{self, Color32, FontId, TextStyle, Visuals};

pub const NAVY: Color32       = Color32::from_rgb(0x0F, 0x20, 0x41);
pub const NAVY_LIGHT: Color32 = Color32::from_rgb(0x1A, 0x2E, 0x5A);
pub const BLUE: Color32       = Color32::from_rgb(0x1E, 0x3A, 0x8A);
pub const BLUE_SOFT: Color32  = Color32::from_rgb(0x2C, 0x4A, 0x9A);
pub const GOLD: Color32       = Color32::from_rgb(0xD4, 0xAF, 0x37);
pub const MUTED: Color32      = Color32::from_rgb(0x88, 0x96, 0xBF);
pub const PAGE_BG: Color32    = Color32::from_rgb(0xFA, 0xFA, 0xFA);
pub const CODE_BG: Color32    = Color32::from_rgb(0xF3, 0xF4, 0xF6);
pub const BORDER: Color32     = Color32::from_rgb(0xE5, 0xE7, 0xEB);

pub const INFO_BG: Color32    = Color32::from_rgb(0xE8, 0xF0, 0xFE);
pub const WARN_BG: Color32    = Color32::from_rgb(0xFF, 0xF7, 0xE0);
pub const WARN_FG: Color32    = Color32::from_rgb(0x92, 0x60, 0x0E);
pub const ERROR_BG: Color32   = Color32::from_rgb(0xFD, 0xEC, 0xEC);
pub const ERROR_FG: Color32   = Color32::from_rgb(0xB0, 0x1E, 0x1E);

/// Light main area, navy accents. Applied once at startup.
pub fn apply(ctx: &egui::Context) {
    ctx.set_visuals(Visuals::light());
    ctx.style_mut(|style| {
        style.visuals.panel_fill = PAGE_BG;
        style.visuals.selection.bg_fill = BLUE_SOFT;
        style.visuals.hyperlink_color = BLUE;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);

        style.text_styles.insert(TextStyle::Heading, FontId::proportional(26.0));
        style.text_styles.insert(TextStyle::Body, FontId::proportional(15.0));
        style.text_styles.insert(TextStyle::Monospace, FontId::monospace(13.0));
    });
}
