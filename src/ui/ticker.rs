// src/ui/ticker.rs

use super::icons::{IconTextures, paint_icon};
use super::{TICKER_BG, change_color};
use crate::config::{ICON_SIZE, TICKER_HEIGHT};
use crate::icons::IconRegistry;
use crate::screen::ScreenState;
use crate::stocks::StockEntry;
use eframe::egui;
use egui::{Align2, Color32, FontId, Painter, Rect, Sense, pos2, vec2};

/// Draws the scrolling strip. Slots are laid out left to right from the
/// ticker's current offset; anything past the right edge is skipped.
pub fn show_ticker(ui: &mut egui::Ui, screen: &ScreenState, textures: &mut IconTextures) {
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(vec2(width, TICKER_HEIGHT), Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, TICKER_BG);

    let Some(ticker) = screen.ticker() else {
        return;
    };
    let item_width = ticker.settings().item_width;

    for (i, slot) in ticker.window().slots().enumerate() {
        let left = rect.left() + ticker.offset() + i as f32 * item_width;
        if left > rect.right() {
            break;
        }
        let item = Rect::from_min_size(pos2(left, rect.top()), vec2(item_width, rect.height()));
        paint_ticker_item(&painter, item, &slot.entry, screen.icons(), textures);
    }
}

fn paint_ticker_item(
    painter: &Painter,
    item: Rect,
    entry: &StockEntry,
    icons: &IconRegistry,
    textures: &mut IconTextures,
) {
    let icon_rect = Rect::from_min_size(
        pos2(item.left() + 10.0, item.center().y - ICON_SIZE / 2.0),
        vec2(ICON_SIZE, ICON_SIZE),
    );
    paint_icon(painter, icon_rect, icons.get(&entry.symbol), &entry.symbol, textures);

    let text_left = icon_rect.right() + 10.0;
    let mut y = item.top() + 10.0;
    painter.text(
        pos2(text_left, y),
        Align2::LEFT_TOP,
        &entry.symbol,
        FontId::proportional(16.0),
        Color32::BLACK,
    );
    y += 20.0;
    painter.text(
        pos2(text_left, y),
        Align2::LEFT_TOP,
        &entry.price,
        FontId::proportional(14.0),
        Color32::DARK_GRAY,
    );
    y += 18.0;
    painter.text(
        pos2(text_left, y),
        Align2::LEFT_TOP,
        &entry.change,
        FontId::proportional(12.0),
        change_color(entry.direction()),
    );
}
