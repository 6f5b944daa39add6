use eframe::egui;
use egui::RichText;
use merbabu_core::{TableView, Theme, COLUMNS};

use crate::style::color;

/// Scrollable three-column listing. Only reads the rows it is given.
pub fn show(ui: &mut egui::Ui, table: &TableView, theme: &Theme) {
    let col_width = ((ui.available_width() - 24.0) / COLUMNS.len() as f32).max(60.0);

    egui::Frame::none()
        .fill(color(theme.table_fill))
        .stroke(egui::Stroke::new(1.0, color(theme.grid_color)))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            egui::ScrollArea::vertical()
                .id_source("inventory_table_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    egui::Grid::new("inventory_table")
                        .num_columns(COLUMNS.len())
                        .striped(true)
                        .min_col_width(col_width)
                        .min_row_height(theme.row_height)
                        .spacing([0.0, 0.0])
                        .show(ui, |ui| {
                            for column in COLUMNS {
                                header_cell(ui, column, col_width, theme);
                            }
                            ui.end_row();

                            for row in table.rows() {
                                for cell in row.cells() {
                                    ui.add_sized(
                                        [col_width, theme.row_height],
                                        egui::Label::new(RichText::new(cell).size(theme.body_size)),
                                    );
                                }
                                ui.end_row();
                            }
                        });
                });
        });
}

fn header_cell(ui: &mut egui::Ui, title: &str, width: f32, theme: &Theme) {
    egui::Frame::none()
        .fill(color(theme.header_fill))
        .show(ui, |ui| {
            ui.add_sized(
                [width, theme.row_height],
                egui::Label::new(
                    RichText::new(title)
                        .strong()
                        .size(theme.label_size)
                        .color(color(theme.header_text)),
                ),
            );
        });
}
