use eframe::egui;
use merbabu_core::ValidationError;

/// Modal error message. While one is open the rest of the window is dimmed
/// and the caller keeps its widgets disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    title: String,
    message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Draws the dialog; returns `true` once the user has dismissed it.
    pub fn show(&self, ctx: &egui::Context) -> bool {
        let screen_rect = ctx.screen_rect();
        ctx.layer_painter(egui::LayerId::new(
            egui::Order::PanelResizeLine,
            egui::Id::new("alert_overlay"),
        ))
        .rect_filled(screen_rect, 0.0, egui::Color32::from_black_alpha(80));

        let mut dismissed = ctx.input(|i| i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Escape));

        egui::Window::new(self.title())
            .id(egui::Id::new("alert_window"))
            .collapsible(false)
            .resizable(false)
            .movable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("⚠")
                            .size(22.0)
                            .color(egui::Color32::from_rgb(200, 60, 40)),
                    );
                    ui.label(self.message());
                });
                ui.add_space(10.0);
                ui.vertical_centered(|ui| {
                    if ui.add(egui::Button::new("OK").min_size(egui::vec2(70.0, 0.0))).clicked() {
                        dismissed = true;
                    }
                });
            });

        dismissed
    }
}

impl From<&ValidationError> for Alert {
    fn from(err: &ValidationError) -> Self {
        Alert::new(err.dialog_title(), err.dialog_message())
    }
}
