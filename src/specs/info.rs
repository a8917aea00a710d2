// src/specs/info.rs
use scraper::ElementRef;

use crate::core::html::{td_cells, trimmed_text};
use crate::core::sanitize::{has_label, normalize_ws, split_intake_section, value_after_label};
use crate::model::Intake;
use crate::report::Issue;

/// Identifying metadata of one routine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoutineInfo {
    pub program: String,
    pub intake: Intake,
    pub section: String,
    pub semester: String,
}

/// Cells: `[title, "Program: …", "Intake: 45 - A", "Semester: …", …]`.
/// The first cell and anything after the fourth are ignored.
pub fn parse_info(table: ElementRef<'_>, issues: &mut Vec<Issue>) -> RoutineInfo {
    let cells: Vec<String> = td_cells(table).into_iter().map(trimmed_text).collect();

    let mut field = |i: usize, name: &'static str| -> String {
        match cells.get(i) {
            Some(text) => {
                if !has_label(text) {
                    issues.push(Issue::UnlabelledInfoField { field: name, text: text.clone() });
                }
                s!(value_after_label(text))
            }
            None => {
                issues.push(Issue::MissingInfoField { field: name });
                s!()
            }
        }
    };

    let program = field(1, "program");
    let intake_section = field(2, "intake");
    let semester = field(3, "semester");

    let (intake, section) = split_intake_section(&intake_section);
    let section = match section {
        Some(s) => normalize_ws(s),
        None => {
            if !intake_section.is_empty() {
                issues.push(Issue::MissingSection { text: intake_section.clone() });
            }
            s!()
        }
    };

    RoutineInfo { program, intake: Intake::parse(intake), section, semester }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn info_of(cells: &[&str]) -> (RoutineInfo, Vec<Issue>) {
        let tds: String = cells.iter().map(|c| format!("<td>{c}</td>")).collect();
        let doc = Html::parse_fragment(&format!("<table><tr>{tds}</tr></table>"));
        let table = doc.select(selector!("table")).next().unwrap();
        let mut issues = Vec::new();
        (parse_info(table, &mut issues), issues)
    }

    #[test]
    fn reads_program_intake_section_semester() {
        let (info, issues) = info_of(&[
            "Class Routine",
            "Program: BSCSE",
            "Intake: 45 - A",
            "Semester: Spring2024",
            "Printed: today",
        ]);
        assert!(issues.is_empty());
        assert_eq!(
            info,
            RoutineInfo {
                program: s!("BSCSE"),
                intake: Intake::Number(45),
                section: s!("A"),
                semester: s!("Spring2024"),
            }
        );
    }

    #[test]
    fn section_whitespace_is_normalized() {
        let (info, _) = info_of(&["", "Program: BBA", "Intake : 12 -  Day \n  Shift", "Semester: Fall"]);
        assert_eq!(info.intake, Intake::Number(12));
        assert_eq!(info.section, "Day Shift");
    }

    #[test]
    fn non_numeric_intake_is_kept_as_text() {
        let (info, _) = info_of(&["", "Program: MBA", "Intake: E1 - 2", "Semester: Fall"]);
        assert_eq!(info.intake, Intake::Text(s!("E1")));
        assert_eq!(info.section, "2");
    }

    #[test]
    fn missing_pieces_degrade_with_issues() {
        let (info, issues) = info_of(&["", "BSCSE", "Intake: 45"]);
        assert_eq!(info.program, "BSCSE");
        assert_eq!(info.intake, Intake::Number(45));
        assert_eq!(info.section, "");
        assert_eq!(info.semester, "");
        assert_eq!(
            issues,
            vec![
                Issue::UnlabelledInfoField { field: "program", text: s!("BSCSE") },
                Issue::MissingInfoField { field: "semester" },
                Issue::MissingSection { text: s!("45") },
            ]
        );
    }

    #[test]
    fn section_is_the_second_hyphen_piece() {
        let (info, issues) = info_of(&["t", "Program: BSCSE", "Intake: 45-A-1", "Semester: Fall2024"]);
        assert!(issues.is_empty());
        assert_eq!(info.intake, Intake::Number(45));
        assert_eq!(info.section, "A");
    }
}
