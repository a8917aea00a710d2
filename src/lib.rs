// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod model;
pub mod report;
pub mod specs;

pub mod file;
pub mod progress;
pub mod scrape;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;
pub mod gui;

pub use error::{Error, Result};
pub use model::{ClassSlot, Intake, ProgramIndex, Routine, RoutineDocument};
pub use scrape::{parse_document, parse_document_at, ParseOutcome};
