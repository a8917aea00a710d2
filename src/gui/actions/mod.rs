// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{load, poll, export, open_json, open_folder}.

mod export; // src/gui/actions/export.rs
mod load;   // src/gui/actions/load.rs

pub use export::{export, open_folder, open_json};
pub use load::{load, poll};

use crate::gui::app::App;

/// Map the output text field onto the export options.
#[inline]
pub(super) fn sync_out_path(app: &mut App) {
    app.state.options.export.set_path(&app.out_path_text);
    logd!("UI: out_path → {}", app.state.options.export.out_path.display());
}
