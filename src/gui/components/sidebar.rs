// src/gui/components/sidebar.rs
//
// Brand header, menu, startup notices, footer.
// Returns the label the user picked this frame; the caller dispatches it.

use eframe::egui::{self, Align, Layout, RichText};

use crate::core::Block;
use crate::gui::{app::App, theme, view};

pub fn draw(ui: &mut egui::Ui, app: &App) -> Option<String> {
    ui.vertical_centered(|ui| {
        ui.add_space(8.0);
        ui.label(RichText::new("Fraud").size(24.0).strong().color(egui::Color32::WHITE));
        ui.label(RichText::new("Detection").size(24.0).strong().color(theme::GOLD));
        let (rect, _) = ui.allocate_exact_size(egui::vec2(50.0, 3.0), egui::Sense::hover());
        ui.painter().rect_filled(rect, egui::CornerRadius::ZERO, theme::GOLD);
        ui.add_space(12.0);
    });

    let picked = app.menu.draw(ui, &app.entries, app.nav.current_label());

    if !app.dash.notices.is_empty() {
        ui.add_space(12.0);
        for block in app.dash.notices.blocks() {
            if let Block::Notice(level, msg) = block {
                view::notice(ui, *level, msg);
            }
        }
    }

    ui.with_layout(Layout::bottom_up(Align::Center), |ui| {
        ui.add_space(12.0);
        ui.label(RichText::new("© 2025").size(10.0).color(theme::MUTED));
        ui.label(RichText::new("Advanced Analytics").size(12.0).color(theme::MUTED));
        let (rect, _) = ui.allocate_exact_size(egui::vec2(30.0, 1.0), egui::Sense::hover());
        ui.painter().rect_filled(rect, egui::CornerRadius::ZERO, theme::MUTED);
    });

    picked
}
