// src/gui/components/routine_grid.rs
//
// One routine as a day × period table. Hovering a code shows its full name.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::{
    config::consts::WEEKDAYS,
    model::{ClassSlot, Routine, RoutineDocument},
};

const ROW_HEIGHT: f32 = 58.0;

pub fn draw(ui: &mut egui::Ui, doc: &RoutineDocument, routine: &Routine) {
    ui.horizontal(|ui| {
        ui.heading(routine.label());
        if !routine.semester.is_empty() {
            ui.label(RichText::new(&routine.semester).weak());
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak(format!("Updated {}", doc.updated.format("%Y-%m-%d %H:%M UTC")));
        });
    });

    let cols = routine
        .classes
        .iter()
        .map(Vec::len)
        .max()
        .unwrap_or(0)
        .max(routine.periods.len());

    if cols == 0 {
        ui.weak("This routine has no periods.");
        return;
    }

    TableBuilder::new(ui)
        .id_salt("routine_grid")
        .striped(true)
        .resizable(true)
        .vscroll(false)
        .column(Column::exact(48.0))
        .columns(Column::initial(140.0).at_least(70.0).clip(true), cols)
        .header(34.0, |mut header| {
            header.col(|ui| {
                ui.strong("Day");
            });
            for p in 0..cols {
                header.col(|ui| {
                    ui.strong(routine.periods.get(p).map(String::as_str).unwrap_or("?"));
                });
            }
        })
        .body(|mut body| {
            for (d, row) in routine.classes.iter().enumerate() {
                body.row(ROW_HEIGHT, |mut tr| {
                    tr.col(|ui| {
                        ui.strong(day_label(d));
                    });
                    for p in 0..cols {
                        tr.col(|ui| match row.get(p).and_then(Option::as_ref) {
                            Some(slot) => slot_cell(ui, doc, slot),
                            None => {
                                ui.weak("·");
                            }
                        });
                    }
                });
            }
        });
}

/// "SAT".."FRI" for the usual seven rows, "Day 8" beyond that.
pub fn day_label(row: usize) -> String {
    WEEKDAYS
        .get(row)
        .map_or_else(|| format!("Day {}", row + 1), |d| s!(*d))
}

fn slot_cell(ui: &mut egui::Ui, doc: &RoutineDocument, slot: &ClassSlot) {
    ui.vertical(|ui| {
        ui.label(RichText::new(&slot.course_code).strong())
            .on_hover_text(doc.course_title(&slot.course_code).unwrap_or("Unknown course"));
        ui.label(RichText::new(&slot.faculty_code).small())
            .on_hover_text(doc.faculty_name(&slot.faculty_code).unwrap_or("Unknown faculty"));
        ui.label(RichText::new(location(slot)).small().weak());
    });
}

fn location(slot: &ClassSlot) -> String {
    match (slot.building.is_empty(), slot.room.is_empty()) {
        (false, false) => format!("{} · {}", slot.building, slot.room),
        (false, true) => slot.building.clone(),
        (true, false) => slot.room.clone(),
        (true, true) => s!(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_labels_fall_back_past_friday() {
        assert_eq!(day_label(0), "SAT");
        assert_eq!(day_label(6), "FRI");
        assert_eq!(day_label(7), "Day 8");
    }

    #[test]
    fn location_skips_blank_parts() {
        let mut slot = ClassSlot { building: s!("Main"), room: s!("301"), ..ClassSlot::default() };
        assert_eq!(location(&slot), "Main · 301");
        slot.room.clear();
        assert_eq!(location(&slot), "Main");
    }
}
