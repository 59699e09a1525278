// src/gui/app.rs
use std::error::Error;

use eframe::egui::{self, Margin, RichText};

use crate::{
    config::consts::HOME_LABEL,
    dashboard::Dashboard,
    router::{MenuEntry, Nav},
};

use super::{
    components,
    menu::{self, MenuRenderer},
    theme,
    view,
};

pub fn run(dash: Dashboard, options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let title = dash.config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            theme::apply(&cc.egui_ctx);
            Ok(Box::new(App::new(dash)))
        }),
    )?;
    Ok(())
}

pub struct App {
    pub dash: Dashboard,

    // fixed for the session
    pub menu: Box<dyn MenuRenderer>,
    pub entries: Vec<MenuEntry>,

    pub nav: Nav,
}

impl App {
    pub fn new(dash: Dashboard) -> Self {
        let menu = menu::select(dash.config.menu);
        let entries = dash.router.menu();

        logf!(
            "Init: menu=[{}]",
            entries.iter().map(|e| e.label.as_str()).collect::<Vec<_>>().join(", ")
        );

        // Home is selected on launch
        let mut nav = Nav::default();
        let first = entries.first().map(|e| e.label.as_str()).unwrap_or(HOME_LABEL);
        nav.select(&dash.router, first);

        Self { dash, menu, entries, nav }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let picked = egui::SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(250.0)
            .frame(egui::Frame::default().fill(theme::NAVY).inner_margin(Margin::same(12)))
            .show(ctx, |ui| components::sidebar::draw(ui, self))
            .inner;

        if let Some(label) = picked {
            self.nav.select(&self.dash.router, &label);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(theme::PAGE_BG).inner_margin(Margin::same(24)))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if let Some(label) = self.nav.current_label() {
                        ui.label(RichText::new(label).color(theme::MUTED));
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("⟳ Reload").clicked() {
                            self.nav.reload(&self.dash.router);
                        }
                    });
                });
                ui.add_space(6.0);

                egui::ScrollArea::vertical()
                    .id_salt("page_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        if let Some(frame) = self.nav.frame() {
                            view::draw(ui, frame);
                        }
                    });
            });
    }
}
