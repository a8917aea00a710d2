// tests/program_index.rs
use routine_scrape::model::{Intake, ProgramIndex, Routine, RoutineDocument};
use routine_scrape::parse_document;

fn routine(program: &str, intake: &str, section: &str) -> Routine {
    Routine {
        program: program.into(),
        intake: Intake::parse(intake),
        section: section.into(),
        ..Routine::default()
    }
}

fn page(groups: &[(&str, &str)]) -> String {
    groups
        .iter()
        .map(|(program, intake)| {
            format!(
                r#"<table id="HdtableRtn"><tr><td>t</td><td>Program: {program}</td><td>Intake: {intake}</td><td>Semester: Fall2024</td></tr></table>
                   <table id="tableRtn"><tr><th></th><th>P1</th></tr><tr><th>SAT</th><td></td></tr></table>
                   <table class="tb"><tr><td>h</td></tr></table>"#
            )
        })
        .collect()
}

#[test]
fn list_length_equals_routines_sharing_program_and_intake() {
    let html = page(&[
        ("BSCSE", "45 - A"),
        ("BSCSE", "45 - B"),
        ("BSCSE", "46 - A"),
        ("BSCSE", "45 - A"),
        ("BBA", "45 - A"),
    ]);
    let doc = parse_document(&html).document;

    assert_eq!(doc.programs.sections("BSCSE", &Intake::Number(45)), ["A", "B", "A"]);
    assert_eq!(doc.programs.sections("BSCSE", &Intake::Number(46)), ["A"]);
    assert_eq!(doc.programs.sections("BBA", &Intake::Number(45)), ["A"]);

    for r in &doc.routines {
        let expected = doc
            .routines
            .iter()
            .filter(|o| o.program == r.program && o.intake == r.intake)
            .count();
        assert_eq!(doc.programs.sections(&r.program, &r.intake).len(), expected);
    }
}

#[test]
fn rebuilding_from_routines_matches_parsed_index() {
    let html = page(&[("EEE", "30 - 1"), ("EEE", "30 - 2"), ("CSE", "E2 - 1")]);
    let doc = parse_document(&html).document;
    assert_eq!(ProgramIndex::from_routines(&doc.routines), doc.programs);
}

#[test]
fn intakes_are_sorted_numbers_before_text() {
    let rs = [
        routine("BSCSE", "E1", "1"),
        routine("BSCSE", "46", "A"),
        routine("BSCSE", "45", "A"),
    ];
    let idx = ProgramIndex::from_routines(&rs);
    let intakes: Vec<String> = idx.intakes("BSCSE").map(|(i, _)| i.to_string()).collect();
    assert_eq!(intakes, ["45", "46", "E1"]);
    assert_eq!(idx.intakes("MBA").count(), 0);
}

#[test]
fn find_returns_first_match() {
    let doc = RoutineDocument {
        updated: chrono::Utc::now(),
        programs: ProgramIndex::default(),
        course_code_to_title_map: Default::default(),
        faculty_id_to_name_map: Default::default(),
        routines: vec![
            Routine { semester: "first".into(), ..routine("BSCSE", "45", "A") },
            Routine { semester: "second".into(), ..routine("BSCSE", "45", "A") },
        ],
    };
    let r = doc.find("BSCSE", &Intake::Number(45), "A").unwrap();
    assert_eq!(r.semester, "first");
    assert!(doc.find("BSCSE", &Intake::Number(45), "B").is_none());
}
