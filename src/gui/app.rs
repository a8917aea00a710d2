// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc::Receiver, Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::AppState,
    file,
    model::{Routine, RoutineDocument},
    report::ParseReport,
    scrape::{self, ParseOutcome},
    store,
};

use super::{
    actions,
    components::{action_bar, legend, program_tree, routine_grid},
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "BUBT Routine Scraper",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

/// Result a background load hands back to the UI thread.
pub type JobResult = Result<ParseOutcome, String>;

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // output text field, mapped onto ExportOptions on use
    pub out_path_text: String,

    pub document: Option<RoutineDocument>,
    pub report: Option<ParseReport>,

    // status/progress (workers write here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub job: Option<Receiver<JobResult>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.out_path.to_string_lossy().into_owned();
        let mut status = s!("Idle: nothing loaded yet, press Refresh");
        let mut document = None;
        let mut report = None;

        // Previous export first, then the cached page.
        let json_path = &state.options.export.out_path;
        let cache_path = &state.options.source.cache_path;
        if json_path.is_file() {
            match file::read_document(json_path) {
                Ok(doc) => {
                    logf!("Init: loaded {} ({})", json_path.display(), doc.summary());
                    status = format!("Loaded {}", json_path.display());
                    document = Some(doc);
                }
                Err(e) => loge!("Init: ignoring {}: {}", json_path.display(), e),
            }
        }
        if document.is_none() && cache_path.is_file() {
            match store::load_page(cache_path, state.options.source.encoding.as_deref()) {
                Ok(html) => {
                    let outcome = scrape::parse_document(&html);
                    status = format!("Parsed cached page {}", cache_path.display());
                    document = Some(outcome.document);
                    report = Some(outcome.report);
                }
                Err(e) => logd!("Init: no usable page cache ({})", e),
            }
        }

        let mut app = Self {
            state,
            out_path_text,
            document,
            report,
            status: Arc::new(Mutex::new(status)),
            running: false,
            job: None,
        };
        app.clamp_selection();
        app
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn selected_routine(&self) -> Option<&Routine> {
        let ix = self.state.gui.selected_routine?;
        self.document.as_ref()?.routines.get(ix)
    }

    /// Swap in a freshly parsed page.
    pub fn apply_outcome(&mut self, outcome: ParseOutcome) {
        let summary = outcome.document.summary();
        let warnings = outcome.report.warnings.len();
        self.document = Some(outcome.document);
        self.report = Some(outcome.report);
        self.clamp_selection();
        self.status(if warnings == 0 {
            format!("Ready: {summary}")
        } else {
            format!("Ready: {summary} ({warnings} warning(s))")
        });
    }

    /// Swap in a document read back from JSON; there is no parse report for it.
    pub fn apply_document(&mut self, document: RoutineDocument) {
        self.status(format!("Ready: {}", document.summary()));
        self.document = Some(document);
        self.report = None;
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let len = self.document.as_ref().map_or(0, |d| d.routines.len());
        let sel = &mut self.state.gui.selected_routine;
        match *sel {
            Some(ix) if ix < len => {}
            _ => *sel = (len > 0).then_some(0),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll(self);

        egui::SidePanel::left("programs")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                program_tree::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            action_bar::draw(ui, self);
            ui.separator();

            let Some(doc) = self.document.as_ref() else {
                ui.label("No routines loaded.");
                return;
            };
            let Some(routine) = self.selected_routine() else {
                ui.label("Pick a section on the left.");
                return;
            };

            egui::ScrollArea::vertical()
                .id_salt("routine_scroll")
                .show(ui, |ui| {
                    routine_grid::draw(ui, doc, routine);
                    if self.state.gui.show_legend {
                        ui.add_space(8.0);
                        legend::draw(ui, doc, routine);
                    }
                    if let (Some(report), Some(ix)) = (&self.report, self.state.gui.selected_routine) {
                        ui.add_space(8.0);
                        legend::draw_warnings(ui, report, ix);
                    }
                });
        });

        if self.running {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
