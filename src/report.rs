// src/report.rs
//
// What the tolerant parser had to paper over. A report never stops a run;
// it is logged and handed back next to the document.

use std::fmt;

use crate::specs::cell::Missing;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Issue {
    /// Info table had fewer cells than program/intake/semester need.
    MissingInfoField { field: &'static str },
    /// Info field without a `label:` prefix; whole text used as the value.
    UnlabelledInfoField { field: &'static str, text: String },
    /// Intake/section field without a `-`.
    MissingSection { text: String },
    /// Grid header row absent; `periods` is empty.
    MissingPeriods,
    /// Data row whose cell count differs from the period count.
    RowWidth { row: usize, cells: usize, periods: usize },
    /// Cell decoded with some markers missing; kept in the grid.
    PartialCell { row: usize, col: usize, missing: Vec<Missing>, text: String },
    /// Cell with no recognisable markers; grid holds `null` there.
    MalformedCell { row: usize, col: usize, text: String },
    /// Legend row that is not `code, title, code, name`.
    ShortLegendRow { row: usize, cells: usize },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::MissingInfoField { field } => write!(f, "info table has no {field} cell"),
            Issue::UnlabelledInfoField { field, text } => {
                write!(f, "{field} cell has no label: {text:?}")
            }
            Issue::MissingSection { text } => write!(f, "no section in intake field {text:?}"),
            Issue::MissingPeriods => f.write_str("grid has no header row"),
            Issue::RowWidth { row, cells, periods } => {
                write!(f, "row {row} has {cells} cells for {periods} periods")
            }
            Issue::PartialCell { row, col, missing, text } => {
                write!(f, "cell [{row},{col}] missing {missing:?}: {text:?}")
            }
            Issue::MalformedCell { row, col, text } => {
                write!(f, "cell [{row},{col}] unreadable: {text:?}")
            }
            Issue::ShortLegendRow { row, cells } => {
                write!(f, "legend row {row} has {cells} cells, expected 4")
            }
        }
    }
}

/// An issue tied to the routine (by position in `routines`) it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Warning {
    pub routine: usize,
    pub issue: Issue,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "routine #{}: {}", self.routine, self.issue)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Sizes of the info/grid/footer groups as found on the page.
    pub tables_found: [usize; 3],
    pub warnings: Vec<Warning>,
}

impl ParseReport {
    pub fn push_all(&mut self, routine: usize, issues: Vec<Issue>) {
        for issue in issues {
            logw!("Parse: routine #{routine}: {issue}");
            self.warnings.push(Warning { routine, issue });
        }
    }

    /// True when the three table groups had different lengths.
    pub fn truncated(&self) -> bool {
        let [a, b, c] = self.tables_found;
        a != b || b != c
    }

    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty() && !self.truncated()
    }
}
