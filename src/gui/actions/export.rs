// src/gui/actions/export.rs
use std::path::{Path, PathBuf};

use crate::{file, gui::app::App};

use super::sync_out_path;

pub fn export(app: &mut App) {
    sync_out_path(app);
    let Some(doc) = app.document.as_ref() else {
        app.status("Nothing to export yet");
        return;
    };

    let export = &app.state.options.export;
    match file::write_document(&export.out_path, doc, export.pretty) {
        Ok(w) => app.status(format!("Exported {} ({})", w.path.display(), file::format_bytes(w.bytes))),
        Err(e) => {
            loge!("Export: {}", e);
            app.status(format!("Export error: {e}"));
        }
    }
}

/// Read a previously exported `routines.json` from the output path.
pub fn open_json(app: &mut App) {
    sync_out_path(app);
    let path = app.state.options.export.out_path.clone();
    match file::read_document(&path) {
        Ok(doc) => {
            logf!("Open: {} ({})", path.display(), doc.summary());
            app.apply_document(doc);
        }
        Err(e) => {
            loge!("Open: {}", e);
            app.status(format!("Open error: {e}"));
        }
    }
}

/// Open the output folder in the system file explorer.
pub fn open_folder(app: &mut App) {
    sync_out_path(app);
    let path = &app.state.options.export.out_path;
    let folder = path.parent().unwrap_or(Path::new("."));
    let folder = nearest_existing_dir(folder);

    let absolute = match std::fs::canonicalize(&folder) {
        Ok(p) => p,
        Err(e) => {
            app.status(format!("Cannot resolve folder path: {e}"));
            return;
        }
    };

    match open_in_explorer(&absolute) {
        Ok(()) => logf!("Opened folder: {}", absolute.display()),
        Err(e) => {
            loge!("Failed to open folder: {}", e);
            app.status(format!("Failed to open folder: {e}"));
        }
    }
}

/// Walk up until something exists; "." if nothing does.
fn nearest_existing_dir(path: &Path) -> PathBuf {
    path.ancestors()
        .find(|p| !p.as_os_str().is_empty() && p.is_dir())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

fn open_in_explorer(path: &Path) -> Result<(), String> {
    #[cfg(target_os = "windows")]
    let program = "explorer";
    #[cfg(target_os = "macos")]
    let program = "open";
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    let program = "xdg-open";

    std::process::Command::new(program)
        .arg(path)
        .spawn()
        .map(drop)
        .map_err(|e| format!("Failed to spawn {program}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_existing_dir_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let deep = dir.path().join("a").join("b");
        assert_eq!(nearest_existing_dir(&deep), dir.path());
        assert_eq!(nearest_existing_dir(Path::new("")), PathBuf::from("."));
    }
}
