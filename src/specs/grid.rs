// src/specs/grid.rs
use scraper::ElementRef;

use crate::core::html::{clean_text, rows, td_cells, th_cells, trimmed_text};
use crate::model::ClassSlot;
use crate::report::Issue;
use super::cell::{parse_cell, CellParse};

pub struct Grid {
    pub periods: Vec<String>,
    pub classes: Vec<Vec<Option<ClassSlot>>>,
}

/// First row: corner cell + period headers. Every later row: one weekday,
/// one `<td>` per period (the day label is a `<th>` and is not read).
pub fn parse_grid(table: ElementRef<'_>, issues: &mut Vec<Issue>) -> Grid {
    let mut trs = rows(table).into_iter();

    let periods = match trs.next() {
        Some(header) => read_periods(header),
        None => {
            issues.push(Issue::MissingPeriods);
            Vec::new()
        }
    };

    let classes = trs
        .enumerate()
        .map(|(r, tr)| {
            let tds = td_cells(tr);
            if tds.len() != periods.len() {
                issues.push(Issue::RowWidth { row: r, cells: tds.len(), periods: periods.len() });
            }
            tds.into_iter()
                .enumerate()
                .map(|(c, td)| read_cell(r, c, &trimmed_text(td), issues))
                .collect()
        })
        .collect();

    Grid { periods, classes }
}

fn read_periods(header: ElementRef<'_>) -> Vec<String> {
    let mut cells = th_cells(header);
    if cells.is_empty() {
        // some exports use <td> for the header row
        cells = td_cells(header);
    }
    cells.into_iter().skip(1).map(clean_text).collect()
}

fn read_cell(row: usize, col: usize, text: &str, issues: &mut Vec<Issue>) -> Option<ClassSlot> {
    match parse_cell(text) {
        CellParse::Empty => None,
        CellParse::Complete(slot) => Some(slot),
        CellParse::Partial { slot, missing } => {
            issues.push(Issue::PartialCell { row, col, missing, text: s!(text) });
            Some(slot)
        }
        CellParse::Malformed(text) => {
            issues.push(Issue::MalformedCell { row, col, text });
            None
        }
    }
}
