// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{IconData, ViewportBuilder};
use image::{Rgba, RgbaImage};
use routine_scrape::{
    config::state::GuiState,
    gui,
    log::{self, Sink},
};

/// A small timetable glyph: green header band over a ruled grid.
fn app_icon() -> IconData {
    const SIZE: u32 = 64;
    const CELL: u32 = 16;
    let icon = RgbaImage::from_fn(SIZE, SIZE, |x, y| {
        let rule = x % CELL == 0 || y % CELL == 0 || x == SIZE - 1 || y == SIZE - 1;
        if rule {
            Rgba([38, 42, 48, 255])
        } else if y < CELL {
            Rgba([0, 106, 78, 255])
        } else {
            Rgba([246, 244, 238, 255])
        }
    });
    IconData { rgba: icon.into_raw(), width: SIZE, height: SIZE }
}

fn main() {
    log::init(0, Sink::File);

    let gui_state = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_icon(app_icon())
            .with_inner_size([gui_state.window_w as f32, gui_state.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
