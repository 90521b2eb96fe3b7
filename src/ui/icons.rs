// src/ui/icons.rs
//! Turns an `IconSource` into pixels.

use crate::error::Result;
use crate::icons::{BundledIcon, IconSource};
use crate::picker::uri_to_path;
use eframe::egui;
use egui::{Align2, Color32, ColorImage, FontId, Painter, Rect, TextureHandle, TextureOptions, pos2};
use std::collections::HashMap;
use tracing::{debug, warn};

fn bundled_color(icon: BundledIcon) -> Color32 {
    match icon {
        BundledIcon::Apple => Color32::from_rgb(85, 85, 85),
        BundledIcon::Google => Color32::from_rgb(66, 133, 244),
        BundledIcon::Microsoft => Color32::from_rgb(242, 80, 34),
        BundledIcon::Amazon => Color32::from_rgb(255, 153, 0),
        BundledIcon::Facebook => Color32::from_rgb(24, 119, 242),
    }
}

/// Decodes an image file behind a `file://` URI.
pub fn load_color_image(uri: &str) -> Result<ColorImage> {
    let rgba = image::open(uri_to_path(uri))?.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

/// Textures for user-supplied icons, decoded once per URI.
/// Failed decodes are remembered so they are logged only once.
#[derive(Default)]
pub struct IconTextures {
    loaded: HashMap<String, Option<TextureHandle>>,
}

impl IconTextures {
    pub fn texture_for(&mut self, ctx: &egui::Context, uri: &str) -> Option<&TextureHandle> {
        if !self.loaded.contains_key(uri) {
            let texture = match load_color_image(uri) {
                Ok(image) => {
                    debug!(uri, "icon texture loaded");
                    Some(ctx.load_texture(uri, image, TextureOptions::LINEAR))
                }
                Err(err) => {
                    warn!(%err, uri, "could not load icon, falling back to badge");
                    None
                }
            };
            self.loaded.insert(uri.to_string(), texture);
        }
        self.loaded.get(uri).and_then(|t| t.as_ref())
    }
}

fn paint_badge(painter: &Painter, rect: Rect, glyph: &str, fill: Color32) {
    painter.circle_filled(rect.center(), rect.width().min(rect.height()) / 2.0, fill);
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        glyph,
        FontId::proportional(rect.height() * 0.5),
        Color32::WHITE,
    );
}

/// Paints `icon` into `rect`. `None` leaves the slot empty.
pub fn paint_icon(
    painter: &Painter,
    rect: Rect,
    icon: Option<&IconSource>,
    symbol: &str,
    textures: &mut IconTextures,
) {
    let initial: String = symbol.chars().take(1).collect();
    match icon {
        Some(IconSource::Bundled(bundled)) => {
            paint_badge(painter, rect, &initial, bundled_color(*bundled));
        }
        Some(IconSource::Uri(uri)) => match textures.texture_for(painter.ctx(), uri) {
            Some(texture) => {
                let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
                painter.image(texture.id(), rect, uv, Color32::WHITE);
            }
            None => paint_badge(painter, rect, &initial, Color32::GRAY),
        },
        None => {}
    }
}
