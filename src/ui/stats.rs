// src/ui/stats.rs

use super::{GAME_CARD_BG, STAT_ACCENT};
use crate::panels::{GameCard, StatCard, StatsPanel};
use eframe::egui;
use egui::{Align2, Color32, FontId, RichText, Sense, vec2};

const THUMBNAIL_SIZE: f32 = 120.0;

fn section_header(ui: &mut egui::Ui, title: &str) {
    ui.label(RichText::new(title).strong().size(20.0));
    ui.separator();
}

fn stat_card(ui: &mut egui::Ui, card: &StatCard) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(15.0))
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(card.title).strong().size(16.0));
                ui.label(RichText::new(card.value).size(18.0).color(STAT_ACCENT));
            });
        });
}

fn game_card(ui: &mut egui::Ui, card: &GameCard) {
    egui::Frame::none()
        .fill(GAME_CARD_BG)
        .rounding(8.0)
        .inner_margin(egui::Margin::same(15.0))
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(card.title).strong().size(18.0).color(Color32::BLACK));
                let (rect, _) =
                    ui.allocate_exact_size(vec2(THUMBNAIL_SIZE, THUMBNAIL_SIZE), Sense::hover());
                let painter = ui.painter();
                painter.rect_filled(rect, 8.0, Color32::from_gray(90));
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    card.thumbnail,
                    FontId::proportional(14.0),
                    Color32::WHITE,
                );
                let detail = |text: String| RichText::new(text).size(14.0).color(Color32::from_gray(102));
                ui.label(detail(format!("Players: {}", card.players)));
                ui.label(detail(format!("Rating: {}", card.rating)));
                ui.label(detail(format!("Genre: {}", card.genre)));
            });
        });
}

pub fn show_stats_panel(ui: &mut egui::Ui, panel: &StatsPanel) {
    section_header(ui, StatsPanel::PERFORMANCE_TITLE);
    ui.horizontal(|ui| {
        for card in &panel.performance {
            stat_card(ui, card);
        }
    });
    ui.add_space(12.0);

    section_header(ui, StatsPanel::GAMES_TITLE);
    ui.horizontal(|ui| {
        for card in &panel.games {
            game_card(ui, card);
        }
    });
}
