// src/bin/stock_ticker_app.rs

use eframe::egui;
use stock_ticker::TickerConfig;
use stock_ticker::TickerApp;
use stock_ticker::logging::init_default_logging;
use tracing::{info, warn};

fn main() -> Result<(), eframe::Error> {
    init_default_logging();

    let config = TickerConfig::from_env().unwrap_or_else(|err| {
        warn!(%err, "falling back to default ticker config");
        TickerConfig::default()
    });
    info!(
        stocks = config.presets.len(),
        item_width = config.item_width,
        cycle_ms = config.cycle_duration_ms,
        "starting stock ticker"
    );

    let app_state = TickerApp::new(&config);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_drag_and_drop(true)
            .with_title("Stock Ticker"),
        ..Default::default()
    };

    eframe::run_native(
        "Stock Ticker App",
        native_options,
        Box::new(|_cc| Box::new(app_state)),
    )
}
