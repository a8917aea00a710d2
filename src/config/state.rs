// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Index into `RoutineDocument::routines` of the routine on screen.
    pub selected_routine: Option<usize>,

    /// Filters the program tree (case-insensitive substring of the label).
    pub filter: String,

    pub window_w: u32,
    pub window_h: u32,

    /// Show the course/faculty legend under the grid.
    pub show_legend: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            selected_routine: None,
            filter: s!(),
            window_w: 1100,
            window_h: 700,
            show_legend: true,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
