// src/specs/mod.rs
//! # Routine page specs
//!
//! This module knows **where the ground truth lives** in the routine page and
//! how to read it. The page repeats one group of three tables per section:
//!
//! ```text
//! <table id="HdtableRtn">  program / intake - section / semester     (info)
//! <table id="tableRtn">    period headers + one row per weekday      (grid)
//! <table class="tb">       course code/title, faculty code/name     (legend)
//! ```
//!
//! The i-th table of each kind belongs to the i-th routine. Nothing on the
//! page links them otherwise, so alignment is by position only.
//!
//! ## What lives here
//! - **Locating** the three groups (`locator`).
//! - **Pure parsing** of each table kind (`info`, `grid`, `legend`) and of
//!   the encoded class cell (`cell`).
//! - **Per-routine assembly** into `model::Routine`, folding legend entries
//!   and the program index into an explicit [`routine::Accumulator`].
//!
//! ## What does **not** live here
//! - Fetching, decoding and caching the page (`core::net`, `core::encoding`,
//!   `store`).
//! - The document-level loop and timestamps (`scrape`).
//! - Writing JSON (`file`).
//!
//! ## Conventions
//! - **Never fail.** Odd input degrades to empty strings or `null` cells and
//!   an [`Issue`](crate::report::Issue) is recorded; the rest of the routine
//!   still parses.
//! - Text is read as DOM `textContent`, trimmed; period headers and section
//!   names are whitespace-normalized.
//!
//! ## Testing notes
//! Every parser here is testable offline against an HTML fragment.
pub mod cell;
pub mod grid;
pub mod info;
pub mod legend;
pub mod locator;
pub mod routine;

pub use locator::{RoutineTables, TableGroups};
pub use routine::{parse_routine, Accumulator};
