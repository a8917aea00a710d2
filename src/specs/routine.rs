// src/specs/routine.rs
use crate::model::{CourseCatalog, FacultyDirectory, ProgramIndex, Routine};
use crate::report::Issue;
use super::{grid::parse_grid, info::parse_info, legend::parse_legend, locator::RoutineTables};

/// Cross-routine state, folded one routine at a time. Owned by a single run.
#[derive(Clone, Debug, Default)]
pub struct Accumulator {
    pub courses: CourseCatalog,
    pub faculty: FacultyDirectory,
    pub programs: ProgramIndex,
}

/// Read one routine from its three tables. Legend entries and the program
/// index go into `acc`; anything odd comes back as issues.
pub fn parse_routine(tables: RoutineTables<'_>, acc: &mut Accumulator) -> (Routine, Vec<Issue>) {
    let mut issues = Vec::new();

    parse_legend(tables.footer, &mut acc.courses, &mut acc.faculty, &mut issues);

    let info = parse_info(tables.info, &mut issues);
    let grid = parse_grid(tables.grid, &mut issues);

    let routine = Routine {
        program: info.program,
        intake: info.intake,
        section: info.section,
        semester: info.semester,
        periods: grid.periods,
        classes: grid.classes,
    };
    acc.programs.add(&routine);

    (routine, issues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClassSlot, Intake};
    use crate::specs::TableGroups;
    use scraper::Html;

    const PAGE: &str = r#"
        <table id="HdtableRtn"><tr>
          <td>Routine</td><td>Program: BSCSE</td><td>Intake: 45 - A</td><td>Semester: Spring2024</td>
        </tr></table>
        <table id="tableRtn">
          <tr><th></th><th>8:30-10:00</th><th>10:00-11:30</th></tr>
          <tr><th>SAT</th><td>CS101FC: RahimB:Main⇒Room:301</td><td></td></tr>
        </table>
        <table class="tb">
          <tr><th>Code</th><th>Title</th><th>FC</th><th>Name</th></tr>
          <tr><td>CS101</td><td>Intro to CS</td><td>Rahim</td><td>Dr. Rahim Uddin</td></tr>
        </table>"#;

    #[test]
    fn one_routine_end_to_end() {
        let doc = Html::parse_document(PAGE);
        let groups = TableGroups::locate(&doc);
        let tables = groups.triples().next().unwrap();

        let mut acc = Accumulator::default();
        let (r, issues) = parse_routine(tables, &mut acc);

        assert!(issues.is_empty(), "{issues:?}");
        assert_eq!(r.program, "BSCSE");
        assert_eq!(r.intake, Intake::Number(45));
        assert_eq!(r.section, "A");
        assert_eq!(r.semester, "Spring2024");
        assert_eq!(r.periods, ["8:30-10:00", "10:00-11:30"]);
        assert_eq!(
            r.classes,
            vec![vec![
                Some(ClassSlot {
                    course_code: s!("CS101"),
                    faculty_code: s!("Rahim"),
                    building: s!("Main"),
                    room: s!("301"),
                }),
                None,
            ]]
        );
        assert_eq!(acc.courses["CS101"], "Intro to CS");
        assert_eq!(acc.faculty["Rahim"], "Dr. Rahim Uddin");
        assert_eq!(acc.programs.sections("BSCSE", &Intake::Number(45)), ["A"]);
    }
}
