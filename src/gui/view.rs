// src/gui/view.rs
//
// Draws a rendered page Frame. Blocks are laid out top to bottom.

use eframe::egui::{self, CornerRadius, Margin, RichText};
use egui_extras::{Column, TableBuilder};

use crate::core::{Block, Frame, Level};
use super::theme;

pub fn draw(ui: &mut egui::Ui, frame: &Frame) {
    for (idx, block) in frame.blocks().iter().enumerate() {
        match block {
            Block::Heading { level, text } => heading(ui, *level, text),
            Block::Text(t) => { ui.label(t); }
            Block::Output(t) => {
                egui::Frame::default()
                    .fill(theme::CODE_BG)
                    .stroke(egui::Stroke::new(1.0, theme::BORDER))
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(Margin::same(8))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(RichText::new(t).monospace());
                    });
            }
            Block::Table { headers, rows } => {
                ui.push_id(("table", idx), |ui| table(ui, headers, rows));
            }
            Block::Notice(level, msg) => notice(ui, *level, msg),
        }
        ui.add_space(4.0);
    }
}

fn heading(ui: &mut egui::Ui, level: u8, text: &str) {
    match level {
        1 => {
            ui.label(RichText::new(text).size(30.0).strong().color(theme::NAVY));
            ui.separator();
        }
        2 => {
            ui.add_space(8.0);
            ui.label(RichText::new(text).size(22.0).strong().color(theme::BLUE));
        }
        _ => {
            ui.label(RichText::new(text).size(18.0).strong().color(theme::BLUE_SOFT));
        }
    }
}

fn table(ui: &mut egui::Ui, headers: &[String], rows: &[Vec<String>]) {
    let cols = headers.len().max(rows.iter().map(Vec::len).max().unwrap_or(0));
    if cols == 0 { return; }

    TableBuilder::new(ui)
        .striped(true)
        .columns(Column::auto().resizable(true).at_least(80.0), cols)
        .header(22.0, |mut header| {
            for h in headers {
                header.col(|ui| { ui.strong(h); });
            }
        })
        .body(|mut body| {
            for r in rows {
                body.row(20.0, |mut row| {
                    for cell in r {
                        row.col(|ui| { ui.label(cell); });
                    }
                });
            }
        });
}

/// Colored banner; also used for sidebar notices.
pub fn notice(ui: &mut egui::Ui, level: Level, msg: &str) {
    let (bg, fg, icon) = match level {
        Level::Info    => (theme::INFO_BG, theme::BLUE, "ℹ"),
        Level::Warning => (theme::WARN_BG, theme::WARN_FG, "⚠"),
        Level::Error   => (theme::ERROR_BG, theme::ERROR_FG, "✖"),
    };
    egui::Frame::default()
        .fill(bg)
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.colored_label(fg, format!("{icon}  {msg}"));
        });
}
