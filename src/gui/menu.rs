// src/gui/menu.rs
//
// Two menu renderers: a styled menu with icons and a plain radio list.
// Picked once at startup (config + `rich-menu` feature), never switched mid-session.

use eframe::egui;

use crate::config::MenuChoice;
use crate::router::MenuEntry;

pub trait MenuRenderer {
    fn name(&self) -> &'static str;

    /// Draw `entries`; return the label clicked this frame, if any.
    fn draw(&self, ui: &mut egui::Ui, entries: &[MenuEntry], current: Option<&str>) -> Option<String>;
}

/// Fallback list selector. No icons, no styling.
pub struct PlainMenu;

impl MenuRenderer for PlainMenu {
    fn name(&self) -> &'static str { "plain" }

    fn draw(&self, ui: &mut egui::Ui, entries: &[MenuEntry], current: Option<&str>) -> Option<String> {
        ui.label(egui::RichText::new("Menu").color(egui::Color32::WHITE).strong());
        let mut picked = None;
        for e in entries {
            let selected = current == Some(e.label.as_str());
            if ui.radio(selected, egui::RichText::new(&e.label).color(egui::Color32::WHITE)).clicked() && !selected {
                picked = Some(e.label.clone());
            }
        }
        picked
    }
}

#[cfg(feature = "rich-menu")]
pub struct RichMenu;

#[cfg(feature = "rich-menu")]
impl MenuRenderer for RichMenu {
    fn name(&self) -> &'static str { "rich" }

    fn draw(&self, ui: &mut egui::Ui, entries: &[MenuEntry], current: Option<&str>) -> Option<String> {
        use super::theme;
        use egui::{Button, CornerRadius, Margin, RichText, Stroke};

        let mut picked = None;
        egui::Frame::default()
            .fill(theme::NAVY_LIGHT)
            .corner_radius(CornerRadius::same(10))
            .inner_margin(Margin::same(10))
            .show(ui, |ui| {
                let w = ui.available_width();
                for e in entries {
                    let selected = current == Some(e.label.as_str());
                    let (text_color, fill, stroke) = if selected {
                        (theme::GOLD, theme::GOLD.gamma_multiply(0.2), Stroke::new(1.0, theme::GOLD))
                    } else {
                        (egui::Color32::WHITE, egui::Color32::TRANSPARENT, Stroke::NONE)
                    };
                    let text = RichText::new(format!("{}  {}", e.icon, e.label))
                        .size(16.0)
                        .color(text_color);
                    let btn = Button::new(text)
                        .fill(fill)
                        .stroke(stroke)
                        .corner_radius(CornerRadius::same(7))
                        .min_size(egui::vec2(w, 40.0));
                    if ui.add(btn).clicked() && !selected {
                        picked = Some(e.label.clone());
                    }
                }
            });
        picked
    }
}

pub fn select(choice: MenuChoice) -> Box<dyn MenuRenderer> {
    let renderer: Box<dyn MenuRenderer> = match choice {
        MenuChoice::Plain => Box::new(PlainMenu),
        #[cfg(feature = "rich-menu")]
        MenuChoice::Auto | MenuChoice::Rich => Box::new(RichMenu),
        #[cfg(not(feature = "rich-menu"))]
        MenuChoice::Auto => Box::new(PlainMenu),
        #[cfg(not(feature = "rich-menu"))]
        MenuChoice::Rich => {
            logw!("Menu: rich menu requested but not compiled in; using plain list");
            Box::new(PlainMenu)
        }
    };
    logf!("Menu: using {} renderer", renderer.name());
    renderer
}
