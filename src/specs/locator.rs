// src/specs/locator.rs
use scraper::{ElementRef, Html};

use crate::config::consts::{FOOTER_TABLE, GRID_TABLE, INFO_TABLE};

/// The three table groups of one page, each in document order.
pub struct TableGroups<'a> {
    pub info: Vec<ElementRef<'a>>,
    pub grid: Vec<ElementRef<'a>>,
    pub footer: Vec<ElementRef<'a>>,
}

/// One routine's tables.
#[derive(Clone, Copy)]
pub struct RoutineTables<'a> {
    pub info: ElementRef<'a>,
    pub grid: ElementRef<'a>,
    pub footer: ElementRef<'a>,
}

impl<'a> TableGroups<'a> {
    pub fn locate(doc: &'a Html) -> Self {
        let groups = Self {
            info: doc.select(selector!(INFO_TABLE)).collect(),
            grid: doc.select(selector!(GRID_TABLE)).collect(),
            footer: doc.select(selector!(FOOTER_TABLE)).collect(),
        };
        let [i, g, f] = groups.counts();
        if i != g || g != f {
            logd!("Locate: uneven table groups info={i} grid={g} footer={f}; using {}", groups.aligned_len());
        } else {
            logd!("Locate: {i} routine table groups");
        }
        groups
    }

    pub fn counts(&self) -> [usize; 3] {
        [self.info.len(), self.grid.len(), self.footer.len()]
    }

    /// Routines we can assemble: surplus tables in a longer group are ignored.
    pub fn aligned_len(&self) -> usize {
        self.info.len().min(self.grid.len()).min(self.footer.len())
    }

    /// Zip the groups by position.
    pub fn triples(&self) -> impl Iterator<Item = RoutineTables<'a>> + '_ {
        self.info
            .iter()
            .zip(&self.grid)
            .zip(&self.footer)
            .map(|((&info, &grid), &footer)| RoutineTables { info, grid, footer })
    }
}
