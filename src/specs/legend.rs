// src/specs/legend.rs
use scraper::ElementRef;

use crate::core::html::{rows, td_cells, trimmed_text};
use crate::model::{CourseCatalog, FacultyDirectory};
use crate::report::Issue;

/// Rows after the header: `course code, course title, faculty code, faculty name`.
/// Later rows (and later routines) overwrite earlier titles for the same code.
pub fn parse_legend(
    table: ElementRef<'_>,
    courses: &mut CourseCatalog,
    faculty: &mut FacultyDirectory,
    issues: &mut Vec<Issue>,
) {
    for (r, tr) in rows(table).into_iter().enumerate().skip(1) {
        let cells: Vec<String> = td_cells(tr).into_iter().map(trimmed_text).collect();
        if cells.is_empty() {
            continue;
        }
        if cells.len() != 4 {
            issues.push(Issue::ShortLegendRow { row: r, cells: cells.len() });
        }

        let cell = |i: usize| cells.get(i).cloned().unwrap_or_default();
        let (course_code, course_title) = (cell(0), cell(1));
        let (faculty_code, faculty_name) = (cell(2), cell(3));

        if !course_code.is_empty() {
            courses.insert(course_code, course_title);
        }
        if !faculty_code.is_empty() {
            faculty.insert(faculty_code, faculty_name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn legend(html: &str, courses: &mut CourseCatalog, faculty: &mut FacultyDirectory) -> Vec<Issue> {
        let doc = Html::parse_fragment(html);
        let table = doc.select(selector!("table")).next().unwrap();
        let mut issues = Vec::new();
        parse_legend(table, courses, faculty, &mut issues);
        issues
    }

    #[test]
    fn header_row_skipped_and_maps_filled() {
        let (mut c, mut f) = Default::default();
        let issues = legend(
            r#"<table>
                 <tr><td>Course Code</td><td>Course Title</td><td>Faculty</td><td>Name</td></tr>
                 <tr><td> CS101 </td><td>Intro to CS</td><td>Rahim</td><td>Dr. Rahim Uddin</td></tr>
                 <tr><td>CS102</td><td>Data Structures</td><td>KMH</td><td>K. M. Hasan</td></tr>
               </table>"#,
            &mut c,
            &mut f,
        );
        assert!(issues.is_empty());
        assert_eq!(c.len(), 2);
        assert_eq!(c["CS101"], "Intro to CS");
        assert_eq!(f["Rahim"], "Dr. Rahim Uddin");
        assert!(!c.contains_key("Course Code"));
    }

    #[test]
    fn last_write_wins() {
        let (mut c, mut f) = Default::default();
        legend(
            "<table><tr><th>h</th></tr><tr><td>CS101</td><td>Old</td><td>R</td><td>Old Name</td></tr></table>",
            &mut c,
            &mut f,
        );
        legend(
            "<table><tr><th>h</th></tr><tr><td>CS101</td><td>New</td><td>R</td><td>New Name</td></tr></table>",
            &mut c,
            &mut f,
        );
        assert_eq!(c["CS101"], "New");
        assert_eq!(f["R"], "New Name");
    }

    #[test]
    fn short_rows_fill_what_they_can() {
        let (mut c, mut f) = Default::default();
        let issues = legend(
            "<table><tr><th>h</th></tr><tr><td>CS101</td><td>Intro</td></tr></table>",
            &mut c,
            &mut f,
        );
        assert_eq!(c["CS101"], "Intro");
        assert!(f.is_empty());
        assert_eq!(issues, vec![Issue::ShortLegendRow { row: 1, cells: 2 }]);
    }

    #[test]
    fn empty_code_leaves_its_half_out() {
        let (mut c, mut f) = Default::default();
        let issues = legend(
            "<table><tr><th>h</th></tr>\
             <tr><td></td><td>Orphan title</td><td>R</td><td>Rahim</td></tr>\
             <tr><td>CS101</td><td>Intro</td><td> </td><td>Nobody</td></tr></table>",
            &mut c,
            &mut f,
        );
        assert!(issues.is_empty());
        assert_eq!(c.len(), 1);
        assert_eq!(c["CS101"], "Intro");
        assert!(!c.contains_key(""));
        assert_eq!(f.len(), 1);
        assert_eq!(f["R"], "Rahim");
    }
}
