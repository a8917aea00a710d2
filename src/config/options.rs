// src/config/options.rs
use std::path::PathBuf;
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub source: SourceOptions,
    pub export: ExportOptions,
}

/// When to go to the network instead of the local page cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Refresh {
    /// Always download, then refresh the cache.
    Always,
    /// Download only when nothing is cached yet.
    #[default]
    IfMissing,
    /// Offline: cache or bust.
    Never,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    pub url: String,
    pub cache_path: PathBuf,
    pub refresh: Refresh,
    /// Encoding label that overrides BOM-less sniffing (e.g. "windows-1252").
    pub encoding: Option<String>,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            url: s!(ROUTINE_URL),
            cache_path: PathBuf::from(STORE_DIR).join(PAGE_CACHE_FILE),
            refresh: Refresh::default(),
            encoding: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_path: PathBuf,
    /// Indented JSON (default) or one line.
    pub pretty: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_path: PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_OUT_FILE),
            pretty: true,
        }
    }
}

impl ExportOptions {
    /// Parse GUI/CLI text into a path; a trailing separator means "directory,
    /// use the default file name".
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.out_path = ExportOptions::default().out_path;
        } else if s.ends_with('/') || s.ends_with('\\') {
            self.out_path = PathBuf::from(s).join(DEFAULT_OUT_FILE);
        } else {
            self.out_path = PathBuf::from(s);
        }
    }
}
