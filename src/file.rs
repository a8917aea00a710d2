// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::{Error, Result};
use crate::model::RoutineDocument;

/// Where the artifact went and how big it is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Written {
    pub path: PathBuf,
    pub bytes: u64,
}

/// JSON text of the document. Pretty output is two-space indented with a
/// trailing newline.
pub fn to_json(doc: &RoutineDocument, pretty: bool) -> Result<String> {
    let mut text = if pretty {
        serde_json::to_string_pretty(doc)?
    } else {
        serde_json::to_string(doc)?
    };
    text.push('\n');
    Ok(text)
}

/// Serialize and write `doc`, creating parent directories.
pub fn write_document(path: &Path, doc: &RoutineDocument, pretty: bool) -> Result<Written> {
    let text = to_json(doc, pretty)?;
    ensure_parent(path)?;
    fs::write(path, &text).map_err(|e| Error::io(path, e))?;

    let written = Written { path: path.to_path_buf(), bytes: text.len() as u64 };
    logf!("Saved parsed json to {} ({})", path.display(), format_bytes(written.bytes));
    Ok(written)
}

/// Load a previously written artifact.
pub fn read_document(path: &Path) -> Result<RoutineDocument> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(serde_json::from_str(&text)?)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    Ok(())
}

pub fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_directory(parent),
        _ => Ok(()),
    }
}

/// 1536 → "1.5KB". Binary units, at most two decimals.
pub fn format_bytes(n: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if n < 1024 {
        return format!("{n}B");
    }
    let mut value = n as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let text = format!("{value:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{text}{}", UNITS[unit])
}
