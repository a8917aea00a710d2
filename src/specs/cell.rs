// src/specs/cell.rs
//
// Grammar of one grid cell:
//
//     <course> FC: <faculty> B: <building-label>:<building> ⇒ <room-label>:<room>
//
// e.g. "CSE 319FC: MSRB:Main Campus⇒Room:604". Each marker is looked for
// after the previous one; whatever is missing is reported instead of
// guessed.

use crate::config::consts::{BUILDING_MARKER, FACULTY_MARKER, ROOM_SEPARATOR};
use crate::core::sanitize::value_after_label;
use crate::model::ClassSlot;

/// A marker the grammar expected but did not find.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Missing {
    FacultyMarker,
    BuildingMarker,
    RoomSeparator,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellParse {
    /// Nothing scheduled.
    Empty,
    Complete(ClassSlot),
    /// Some markers missing; the fields that could be delimited are filled,
    /// the rest are empty.
    Partial { slot: ClassSlot, missing: Vec<Missing> },
    /// Text present but none of the markers were.
    Malformed(String),
}

impl CellParse {
    /// What goes into the grid: a slot when anything could be read.
    pub fn into_slot(self) -> Option<ClassSlot> {
        match self {
            CellParse::Complete(slot) | CellParse::Partial { slot, .. } => Some(slot),
            CellParse::Empty | CellParse::Malformed(_) => None,
        }
    }
}

pub fn parse_cell(text: &str) -> CellParse {
    let text = text.trim();
    if text.is_empty() {
        return CellParse::Empty;
    }

    let fc = text.find(FACULTY_MARKER);
    let search_from = fc.map_or(0, |i| i + FACULTY_MARKER.len());
    let b = text[search_from..].find(BUILDING_MARKER).map(|i| search_from + i);

    if fc.is_none() && b.is_none() {
        return CellParse::Malformed(s!(text));
    }

    let mut missing = Vec::new();

    // course: everything up to the first marker we have
    let course_end = fc.or(b).unwrap_or(text.len());
    let course_code = s!(text[..course_end].trim());

    // faculty: between FC: and B: (or end)
    let faculty_code = match fc {
        Some(_) => s!(text[search_from..b.unwrap_or(text.len())].trim()),
        None => {
            missing.push(Missing::FacultyMarker);
            s!()
        }
    };

    // location: "B:<building>⇒Room:<room>"
    let (building, room) = match b {
        Some(b) => match text[b..].split_once(ROOM_SEPARATOR) {
            Some((building, rest)) => {
                // a stray second separator ends the room
                let room = rest.split_once(ROOM_SEPARATOR).map_or(rest, |(room, _)| room);
                (s!(value_after_label(building)), s!(value_after_label(room)))
            }
            None => {
                missing.push(Missing::RoomSeparator);
                (s!(value_after_label(&text[b..])), s!())
            }
        },
        None => {
            missing.push(Missing::BuildingMarker);
            (s!(), s!())
        }
    };

    let slot = ClassSlot { course_code, faculty_code, building, room };
    if missing.is_empty() {
        CellParse::Complete(slot)
    } else {
        CellParse::Partial { slot, missing }
    }
}
