// src/gui/components/program_tree.rs
//
// Left panel: program → intake → section, built from the document's program
// index. Clicking a section selects that routine.

use eframe::egui;

use crate::{gui::app::App, model::Routine};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Programs");
    ui.add(
        egui::TextEdit::singleline(&mut app.state.gui.filter)
            .hint_text("Filter (e.g. CSE 45)")
            .desired_width(f32::INFINITY),
    );
    ui.separator();

    let Some(doc) = app.document.as_ref() else {
        ui.weak("Nothing loaded");
        return;
    };

    let needle = app.state.gui.filter.trim().to_lowercase();
    let keep = |r: &Routine| needle.is_empty() || r.label().to_lowercase().contains(&needle);
    let selected = app.state.gui.selected_routine;
    let mut clicked = None;

    egui::ScrollArea::vertical()
        .id_salt("program_tree_scroll")
        .show(ui, |ui| {
            let w = ui.available_width();
            ui.set_min_width(w);

            for program in doc.programs.programs() {
                // Section lists follow routine order, so the k-th section of
                // (program, intake) is the k-th matching routine.
                let groups: Vec<_> = doc
                    .programs
                    .intakes(program)
                    .map(|(intake, sections)| {
                        let entries: Vec<(usize, &String)> = doc
                            .routines
                            .iter()
                            .enumerate()
                            .filter(|(_, r)| r.program == program && &r.intake == intake)
                            .map(|(i, _)| i)
                            .zip(sections)
                            .filter(|(i, _)| keep(&doc.routines[*i]))
                            .collect();
                        (intake, entries)
                    })
                    .filter(|(_, entries)| !entries.is_empty())
                    .collect();

                if groups.is_empty() {
                    continue;
                }

                let title = if program.is_empty() { "(no program)" } else { program };
                egui::CollapsingHeader::new(title)
                    .id_salt(("program", program))
                    .default_open(!needle.is_empty())
                    .show(ui, |ui| {
                        for (intake, entries) in &groups {
                            egui::CollapsingHeader::new(format!("Intake {intake}"))
                                .id_salt(("intake", program, intake.to_string()))
                                .default_open(true)
                                .show(ui, |ui| {
                                    for (ix, section) in entries {
                                        let text = if section.is_empty() {
                                            s!("(no section)")
                                        } else {
                                            format!("Section {section}")
                                        };
                                        if ui.selectable_label(selected == Some(*ix), text).clicked() {
                                            clicked = Some(*ix);
                                        }
                                    }
                                });
                        }
                    });
            }
        });

    if let Some(ix) = clicked {
        app.state.gui.selected_routine = Some(ix);
        logd!("UI: selected routine {}", ix);
    }
}
