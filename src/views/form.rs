use eframe::egui;
use egui::RichText;
use merbabu_core::{FormInput, Theme};

use crate::style::color;

const GROUP_TITLE: &str = "Tambah Barang";
const SUBMIT_LABEL: &str = "Tambah Barang";
const NAME_LABEL: &str = "Nama Barang:";
const CATEGORY_LABEL: &str = "Kategori:";
const QUANTITY_LABEL: &str = "Jumlah:";

/// Input group with the three fields and the submit button.
/// Returns `true` when the button was clicked this frame.
pub fn show(ui: &mut egui::Ui, form: &mut FormInput, theme: &Theme) -> bool {
    let mut submitted = false;

    egui::Frame::group(ui.style())
        .fill(color(theme.form_fill))
        .inner_margin(egui::Margin::same(10.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(GROUP_TITLE).strong().size(theme.label_size));
            ui.add_space(4.0);

            egui::Grid::new("form_grid")
                .num_columns(2)
                .spacing([10.0, 10.0])
                .show(ui, |ui| {
                    field(ui, NAME_LABEL, &mut form.name, theme);
                    field(ui, CATEGORY_LABEL, &mut form.category, theme);
                    field(ui, QUANTITY_LABEL, &mut form.quantity, theme);

                    ui.label("");
                    let button = egui::Button::new(
                        RichText::new(SUBMIT_LABEL)
                            .strong()
                            .size(theme.label_size)
                            .color(color(theme.button_text)),
                    )
                    .fill(color(theme.button_fill));
                    if ui.add(button).clicked() {
                        submitted = true;
                    }
                    ui.end_row();
                });
        });

    submitted
}

fn field(ui: &mut egui::Ui, label: &str, value: &mut String, theme: &Theme) {
    ui.label(RichText::new(label).strong().size(theme.label_size));
    ui.add(egui::TextEdit::singleline(value).desired_width(f32::INFINITY));
    ui.end_row();
}
