use eframe::egui;
use merbabu_core::{Session, Theme};
use tracing::debug;

use crate::alert::Alert;
use crate::config::Config;
use crate::style;
use crate::views;

pub struct InventoryApp {
    session: Session,
    theme: Theme,
    alert: Option<Alert>,
}

impl InventoryApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &Config) -> Self {
        let theme = config.resolved_theme();
        style::apply_theme(&cc.egui_ctx, &theme);
        debug!(policy = ?config.policy(), "creating inventory window");

        Self {
            session: Session::new(config.policy()),
            theme,
            alert: None,
        }
    }

    fn submit(&mut self) {
        if let Err(err) = self.session.submit() {
            debug!(error = %err, "showing error dialog");
            self.alert = Some(Alert::from(&err));
        }
    }
}

impl eframe::App for InventoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let enabled = self.alert.is_none();
        let mut submitted = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(enabled, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(10.0);
                    ui.label(
                        egui::RichText::new(&self.theme.heading)
                            .strong()
                            .size(self.theme.heading_size)
                            .color(style::color(self.theme.heading_color)),
                    );
                    ui.add_space(10.0);
                });

                submitted = views::form::show(ui, self.session.form_mut(), &self.theme);
                ui.add_space(10.0);
                views::table::show(ui, self.session.table(), &self.theme);
            });
        });

        if submitted {
            self.submit();
        }

        if let Some(alert) = &self.alert {
            if alert.show(ctx) {
                debug!("error dialog dismissed");
                self.alert = None;
            }
        }
    }
}
