// src/ui/cards.rs

use super::icons::{IconTextures, paint_icon};
use super::{CARD_BG, change_color};
use crate::config::ICON_SIZE;
use crate::screen::ScreenState;
use eframe::egui;
use egui::{Color32, RichText, Sense, vec2};

/// Vertical list of every stock in the current snapshot.
pub fn show_stock_cards(ui: &mut egui::Ui, screen: &ScreenState, textures: &mut IconTextures) {
    egui::ScrollArea::vertical()
        .id_source("stock_cards")
        .show(ui, |ui| {
            for entry in screen.stocks().iter() {
                egui::Frame::none()
                    .fill(CARD_BG)
                    .rounding(8.0)
                    .inner_margin(egui::Margin::same(10.0))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            let (icon_rect, _) =
                                ui.allocate_exact_size(vec2(ICON_SIZE, ICON_SIZE), Sense::hover());
                            let icon = screen.icons().resolve(entry);
                            paint_icon(ui.painter(), icon_rect, icon.as_ref(), &entry.symbol, textures);
                            ui.add_space(10.0);
                            ui.vertical(|ui| {
                                ui.label(RichText::new(&entry.symbol).strong().size(16.0).color(Color32::BLACK));
                                ui.label(RichText::new(&entry.price).size(14.0).color(Color32::BLACK));
                                ui.label(
                                    RichText::new(&entry.change)
                                        .strong()
                                        .size(12.0)
                                        .color(change_color(entry.direction())),
                                );
                            });
                        });
                    });
                ui.add_space(10.0);
            }
        });
}
