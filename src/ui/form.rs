// src/ui/form.rs

use crate::form::StockInputForm;
use eframe::egui;
use egui::{Color32, RichText};

/// What the user asked for this frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FormOutcome {
    pub pick_requested: bool,
    pub submitted: bool,
}

/// The add-stock panel. Text fields edit `form` in place; button presses are
/// reported back so the caller can route them through the screen state.
pub fn show_input_panel(
    ui: &mut egui::Ui,
    form: &mut StockInputForm,
    icon_path: &mut String,
) -> FormOutcome {
    let mut outcome = FormOutcome::default();

    egui::Frame::none()
        .inner_margin(egui::Margin::same(20.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                let symbol_width = ui.available_width() - 40.0;
                ui.add(
                    egui::TextEdit::singleline(&mut form.symbol)
                        .hint_text("Stock Symbol")
                        .desired_width(symbol_width),
                );
                if ui
                    .button(RichText::new("+").strong().size(18.0))
                    .on_hover_text("Pick an icon from the path below, or drop an image on the window")
                    .clicked()
                {
                    outcome.pick_requested = true;
                }
            });
            ui.add(egui::TextEdit::singleline(icon_path).hint_text("Icon file path"));

            if let Some(label) = form.icon_label() {
                ui.label(RichText::new(label).italics().color(Color32::DARK_GRAY));
            }

            ui.add(egui::TextEdit::singleline(&mut form.price).hint_text("Price"));
            ui.add(egui::TextEdit::singleline(&mut form.change).hint_text("Change (e.g. +1.2%)"));

            ui.add_space(6.0);
            if ui
                .add_enabled(form.is_complete(), egui::Button::new("Add Stock"))
                .clicked()
            {
                outcome.submitted = true;
            }
        });

    outcome
}
