// src/model.rs
//
// Output model. Field names on the wire follow the published
// `routines.json` (camelCase, `classes` for the grid).

use std::{collections::BTreeMap, fmt};

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Course code → course title.
pub type CourseCatalog = BTreeMap<String, String>;

/// Faculty code → faculty name.
pub type FacultyDirectory = BTreeMap<String, String>;

/// One class in one (day, period) cell.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSlot {
    pub course_code: String,
    pub faculty_code: String,
    pub building: String,
    pub room: String,
}

/// Cohort identifier. Plain numbers stay numbers; anything else is kept as
/// the trimmed source text so nothing is lost.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Intake {
    Number(u32),
    Text(String),
}

impl Intake {
    pub fn parse(text: &str) -> Self {
        let t = text.trim();
        if !t.is_empty() && t.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = t.parse() {
                return Intake::Number(n);
            }
        }
        Intake::Text(s!(t))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Intake::Text(t) if t.is_empty())
    }
}

impl Default for Intake {
    fn default() -> Self {
        Intake::Text(s!())
    }
}

impl fmt::Display for Intake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intake::Number(n) => write!(f, "{n}"),
            Intake::Text(t) => f.write_str(t),
        }
    }
}

// Hand-written so the same impl works as a JSON value (number or string) and
// as a JSON object key (always a string).
impl Serialize for Intake {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Intake::Number(n) => serializer.serialize_u32(*n),
            Intake::Text(t) => serializer.serialize_str(t),
        }
    }
}

impl<'de> Deserialize<'de> for Intake {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IntakeVisitor;

        impl de::Visitor<'_> for IntakeVisitor {
            type Value = Intake;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an intake number or string")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Intake, E> {
                match u32::try_from(v) {
                    Ok(n) => Ok(Intake::Number(n)),
                    Err(_) => Ok(Intake::Text(v.to_string())),
                }
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Intake, E> {
                match u32::try_from(v) {
                    Ok(n) => Ok(Intake::Number(n)),
                    Err(_) => Ok(Intake::Text(v.to_string())),
                }
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Intake, E> {
                Ok(Intake::parse(v))
            }
        }

        deserializer.deserialize_any(IntakeVisitor)
    }
}

/// One section's weekly timetable.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Routine {
    pub program: String,
    pub intake: Intake,
    pub section: String,
    pub semester: String,
    /// Column headers (time ranges), left to right.
    pub periods: Vec<String>,
    /// `classes[day][period]`; days in page order (SAT..FRI).
    pub classes: Vec<Vec<Option<ClassSlot>>>,
}

impl Routine {
    /// Distinct course codes in this routine, sorted.
    pub fn course_codes(&self) -> Vec<&str> {
        let mut v: Vec<&str> = self.slots().map(|c| c.course_code.as_str()).collect();
        v.sort_unstable();
        v.dedup();
        v
    }

    /// Distinct faculty codes in this routine, sorted.
    pub fn faculty_codes(&self) -> Vec<&str> {
        let mut v: Vec<&str> = self.slots().map(|c| c.faculty_code.as_str()).collect();
        v.sort_unstable();
        v.dedup();
        v
    }

    pub fn slots(&self) -> impl Iterator<Item = &ClassSlot> {
        self.classes.iter().flatten().flatten()
    }

    /// "BSCSE 45 A"
    pub fn label(&self) -> String {
        format!("{} {} {}", self.program, self.intake, self.section)
    }
}

/// program → intake → sections. Keys are sorted; each section list is in
/// the order routines were seen, repeats kept (one entry per routine).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgramIndex(BTreeMap<String, BTreeMap<Intake, Vec<String>>>);

impl ProgramIndex {
    pub fn add(&mut self, routine: &Routine) {
        self.0
            .entry(routine.program.clone())
            .or_default()
            .entry(routine.intake.clone())
            .or_default()
            .push(routine.section.clone());
    }

    pub fn from_routines<'a>(routines: impl IntoIterator<Item = &'a Routine>) -> Self {
        let mut index = Self::default();
        for r in routines {
            index.add(r);
        }
        index
    }

    pub fn programs(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn intakes(&self, program: &str) -> impl Iterator<Item = (&Intake, &[String])> {
        self.0
            .get(program)
            .into_iter()
            .flat_map(|m| m.iter().map(|(i, s)| (i, s.as_slice())))
    }

    pub fn sections(&self, program: &str, intake: &Intake) -> &[String] {
        self.0
            .get(program)
            .and_then(|m| m.get(intake))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Root artifact written to `routines.json`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineDocument {
    pub updated: DateTime<Utc>,
    pub programs: ProgramIndex,
    pub course_code_to_title_map: CourseCatalog,
    pub faculty_id_to_name_map: FacultyDirectory,
    pub routines: Vec<Routine>,
}

impl RoutineDocument {
    pub fn find(&self, program: &str, intake: &Intake, section: &str) -> Option<&Routine> {
        self.routines
            .iter()
            .find(|r| r.program == program && &r.intake == intake && r.section == section)
    }

    pub fn course_title(&self, code: &str) -> Option<&str> {
        self.course_code_to_title_map.get(code).map(String::as_str)
    }

    pub fn faculty_name(&self, code: &str) -> Option<&str> {
        self.faculty_id_to_name_map.get(code).map(String::as_str)
    }

    pub fn summary(&self) -> Summary {
        Summary {
            programs: self.programs.len(),
            intakes: self.programs.0.values().map(BTreeMap::len).sum(),
            sections: self.programs.0.values().flat_map(BTreeMap::values).map(Vec::len).sum(),
            routines: self.routines.len(),
            courses: self.course_code_to_title_map.len(),
            faculty: self.faculty_id_to_name_map.len(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub programs: usize,
    pub intakes: usize,
    pub sections: usize,
    pub routines: usize,
    pub courses: usize,
    pub faculty: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} routines | {} programs, {} intakes, {} sections | {} courses, {} faculty",
            self.routines, self.programs, self.intakes, self.sections, self.courses, self.faculty
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn routine(program: &str, intake: Intake, section: &str) -> Routine {
        Routine {
            program: s!(program),
            intake,
            section: s!(section),
            ..Routine::default()
        }
    }

    #[test]
    fn intake_parse_number_or_text() {
        assert_eq!(Intake::parse(" 45 "), Intake::Number(45));
        assert_eq!(Intake::parse("45A"), Intake::Text(s!("45A")));
        assert_eq!(Intake::parse(""), Intake::Text(s!()));
        assert!(Intake::parse("  ").is_empty());
    }

    #[test]
    fn intake_json_value_and_key() {
        assert_eq!(serde_json::to_string(&Intake::Number(45)).unwrap(), "45");
        assert_eq!(serde_json::to_string(&Intake::Text(s!("E1"))).unwrap(), "\"E1\"");

        let mut m = BTreeMap::new();
        m.insert(Intake::Number(45), 1);
        assert_eq!(serde_json::to_string(&m).unwrap(), r#"{"45":1}"#);

        let back: BTreeMap<Intake, i32> = serde_json::from_str(r#"{"45":1,"E1":2}"#).unwrap();
        assert_eq!(back.get(&Intake::Number(45)), Some(&1));
        assert_eq!(back.get(&Intake::Text(s!("E1"))), Some(&2));
    }

    #[test]
    fn index_keeps_duplicates_in_order() {
        let rs = vec![
            routine("BSCSE", Intake::Number(45), "A"),
            routine("BSCSE", Intake::Number(45), "B"),
            routine("BSCSE", Intake::Number(45), "A"),
            routine("BBA", Intake::Number(12), "1"),
        ];
        let idx = ProgramIndex::from_routines(&rs);
        assert_eq!(idx.sections("BSCSE", &Intake::Number(45)), ["A", "B", "A"]);
        assert_eq!(idx.programs().collect::<Vec<_>>(), ["BBA", "BSCSE"]);
        assert!(idx.sections("BSCSE", &Intake::Number(46)).is_empty());
    }

    #[test]
    fn class_slot_uses_camel_case() {
        let slot = ClassSlot {
            course_code: s!("CS101"),
            faculty_code: s!("Rahim"),
            building: s!("Main"),
            room: s!("301"),
        };
        let v = serde_json::to_value(&slot).unwrap();
        assert_eq!(v["courseCode"], "CS101");
        assert_eq!(v["facultyCode"], "Rahim");
    }
}
