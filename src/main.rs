//! Papo - a desktop chat client
//!
//! Architecture:
//! - Main thread: runs the egui UI
//! - Backend thread: runs a Tokio runtime for async network I/O
//! - Communication via crossbeam channels (lock-free, sync-safe)

use eframe::egui;

use papo_client::app::ChatApp;
use papo_client::config;
use papo_client::history::HistoryStore;
use papo_client::storage::FileStorage;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let settings = config::load_settings().unwrap_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 640.0])
            .with_min_inner_size([320.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Papo",
        options,
        Box::new(move |cc| {
            let storage = FileStorage::open()?;
            let history = HistoryStore::new(Box::new(storage));
            let app = ChatApp::new(cc, settings, history)?;
            Ok(Box::new(app))
        }),
    )
}
