// src/gui/components/legend.rs
//
// Course/faculty legend for the routine on screen, plus its parse warnings.

use eframe::egui;

use crate::{
    model::{Routine, RoutineDocument},
    report::ParseReport,
};

pub fn draw(ui: &mut egui::Ui, doc: &RoutineDocument, routine: &Routine) {
    ui.columns(2, |cols| {
        cols[0].strong("Courses");
        egui::Grid::new("legend_courses").striped(true).num_columns(2).show(&mut cols[0], |ui| {
            for code in routine.course_codes() {
                ui.monospace(code);
                ui.label(doc.course_title(code).unwrap_or("(unknown)"));
                ui.end_row();
            }
        });

        cols[1].strong("Faculty");
        egui::Grid::new("legend_faculty").striped(true).num_columns(2).show(&mut cols[1], |ui| {
            for code in routine.faculty_codes() {
                ui.monospace(code);
                ui.label(doc.faculty_name(code).unwrap_or("(unknown)"));
                ui.end_row();
            }
        });
    });
}

pub fn draw_warnings(ui: &mut egui::Ui, report: &ParseReport, routine: usize) {
    let mine: Vec<_> = report.warnings.iter().filter(|w| w.routine == routine).collect();
    if mine.is_empty() {
        return;
    }
    egui::CollapsingHeader::new(format!("Warnings ({})", mine.len()))
        .id_salt("routine_warnings")
        .show(ui, |ui| {
            for w in mine {
                ui.label(w.issue.to_string());
            }
        });
}
