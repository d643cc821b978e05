// main.rs - Waterfall viewer for generalized elementary cellular automata

use anyhow::anyhow;
use eframe::egui;
use egui::Color32;
use log::{LevelFilter, info};
use simple_logger::SimpleLogger;

use waterfall::{Config, Controller};

mod ui;

fn main() -> anyhow::Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).env().init()?;
    info!("Starting waterfall v{} ...", env!("CARGO_PKG_VERSION"));

    let controller = Controller::new(Config::default())?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1020.0, 1000.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Waterfall",
        options,
        Box::new(|_cc| Box::new(WaterfallApp::new(controller))),
    )
    .map_err(|e| anyhow!("{}", e))
}

/// Front-end state around the automaton controller.
pub struct WaterfallApp {
    controller: Controller,
    pub live_color: Color32,
    pub dead_color: Color32,
    last_error: Option<String>,
}

impl WaterfallApp {
    fn new(controller: Controller) -> Self {
        Self {
            controller,
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_gray(90),
            last_error: None,
        }
    }

    /// Keeps the most recent rejection around for the status line.
    fn report<T>(&mut self, result: waterfall::Result<T>) {
        self.last_error = result.err().map(|e| e.to_string());
    }
}
