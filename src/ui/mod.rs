// src/ui/mod.rs
//! egui front-end. Reads `ScreenState`, feeds user input back as `ScreenAction`s.

pub mod cards;
pub mod form;
pub mod icons;
pub mod stats;
pub mod ticker;

use crate::config::{LEFT_PANEL_WIDTH, TickerConfig};
use crate::picker::{PathPicker, pick_stock_icon};
use crate::screen::{ScreenAction, ScreenState};
use crate::stocks::ChangeDirection;
use eframe::egui;
use egui::Color32;
use icons::IconTextures;
use std::path::PathBuf;

// --- Palette ---
pub const UP_GREEN: Color32 = Color32::from_rgb(34, 160, 70);
pub const DOWN_RED: Color32 = Color32::from_rgb(220, 50, 50);
pub const PANEL_BG: Color32 = Color32::from_rgb(240, 240, 240);
pub const CARD_BG: Color32 = Color32::from_rgb(46, 125, 50);
pub const TICKER_BG: Color32 = Color32::from_rgb(250, 250, 250);
pub const STAT_ACCENT: Color32 = Color32::from_rgb(0, 122, 255);
pub const GAME_CARD_BG: Color32 = Color32::from_rgb(255, 192, 203);

pub fn change_color(direction: ChangeDirection) -> Color32 {
    match direction {
        ChangeDirection::Up => UP_GREEN,
        ChangeDirection::Down => DOWN_RED,
    }
}

pub struct TickerApp {
    screen: ScreenState,
    picker: PathPicker,
    /// Path typed next to the "+" button.
    icon_path: String,
    textures: IconTextures,
}

impl TickerApp {
    pub fn new(config: &TickerConfig) -> Self {
        Self {
            screen: ScreenState::new(config),
            picker: PathPicker::new(),
            icon_path: String::new(),
            textures: IconTextures::default(),
        }
    }

    fn pick_icon(&mut self) {
        let picked = pick_stock_icon(&mut self.picker);
        if picked.is_some() {
            self.icon_path.clear();
        }
        self.screen.handle(ScreenAction::PickIcon(picked));
    }

    fn offer_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect()
        });
        // single file, like the document picker
        if let Some(path) = dropped.into_iter().next() {
            self.picker.offer(path);
            self.pick_icon();
        }
    }
}

impl eframe::App for TickerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.offer_dropped_files(ctx);
        let now = ctx.input(|i| i.time);

        egui::SidePanel::left("input_panel")
            .exact_width(LEFT_PANEL_WIDTH)
            .frame(egui::Frame::none().fill(PANEL_BG))
            .show(ctx, |ui| {
                let outcome = form::show_input_panel(ui, self.screen.form_mut(), &mut self.icon_path);
                if outcome.pick_requested {
                    let typed = self.icon_path.trim();
                    if !typed.is_empty() {
                        self.picker.offer(typed);
                    }
                    self.pick_icon();
                }
                if outcome.submitted {
                    self.screen.handle(ScreenAction::Submit);
                }
                cards::show_stock_cards(ui, &self.screen, &mut self.textures);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.screen.handle(ScreenAction::Frame {
                now,
                viewport_width: ui.available_width(),
            });
            ticker::show_ticker(ui, &self.screen, &mut self.textures);
            ui.add_space(12.0);
            stats::show_stats_panel(ui, self.screen.stats());
        });

        ctx.request_repaint();
    }
}

impl Drop for TickerApp {
    fn drop(&mut self) {
        self.screen.handle(ScreenAction::Teardown);
    }
}
