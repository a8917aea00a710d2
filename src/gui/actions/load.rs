// src/gui/actions/load.rs
use std::{
    sync::mpsc::{self, TryRecvError},
    thread,
};

use eframe::egui;

use crate::{
    config::options::Refresh,
    gui::{app::App, progress::GuiProgress},
    scrape,
};

/// Fetch and/or parse on a worker thread; `poll` picks the result up.
pub fn load(app: &mut App, ctx: &egui::Context, refresh: Refresh) {
    if app.running {
        return;
    }

    let mut opts = app.state.options.clone();
    opts.source.refresh = refresh;
    logf!("Load: Begin refresh={:?} url={}", refresh, opts.source.url);

    let (tx, rx) = mpsc::channel();
    let status = app.status.clone();
    let ctx = ctx.clone();

    app.running = true;
    app.job = Some(rx);
    app.status("Loading…");

    thread::spawn(move || {
        let mut prog = GuiProgress::new(status);
        let res = scrape::collect(&opts, Some(&mut prog)).map_err(|e| e.to_string());
        // Receiver gone means the window closed; nothing left to tell.
        let _ = tx.send(res);
        ctx.request_repaint();
    });
}

/// Drain a finished worker, if any. Called once per frame.
pub fn poll(app: &mut App) {
    let Some(rx) = &app.job else { return };
    let received = rx.try_recv();

    match received {
        Err(TryRecvError::Empty) => {}
        Ok(Ok(outcome)) => {
            app.job = None;
            app.running = false;
            logf!("Load: OK {}", outcome.document.summary());
            app.apply_outcome(outcome);
        }
        Ok(Err(e)) => {
            app.job = None;
            app.running = false;
            loge!("Load: Error: {}", e);
            app.status(format!("Error: {e}"));
        }
        Err(TryRecvError::Disconnected) => {
            app.job = None;
            app.running = false;
            loge!("Load: worker exited without a result");
            app.status("Error: load worker stopped");
        }
    }
}
