// benches/parse.rs
use std::hint::black_box;

use chrono::{TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};

use routine_scrape::{parse_document_at, progress::NullProgress};

const PERIODS: usize = 8;
const DAYS: [&str; 7] = ["SAT", "SUN", "MON", "TUE", "WED", "THU", "FRI"];

/// A page shaped like the published one: `n` routines, mostly-full grids.
fn synthetic_page(n: usize) -> String {
    let mut html = String::from("<html><body>");
    for i in 0..n {
        let intake = 40 + i % 10;
        let section = (b'A' + (i % 6) as u8) as char;
        html.push_str(&format!(
            r#"<table id="HdtableRtn"><tr><td>Routine</td><td>Program: BSCSE</td><td>Intake: {intake} - {section}</td><td>Semester: Spring2024</td></tr></table>"#
        ));

        html.push_str(r#"<table id="tableRtn"><tr><th>Day/Time</th>"#);
        for p in 0..PERIODS {
            html.push_str(&format!("<th>{:02}:00 - {:02}:30</th>", 8 + p, 9 + p));
        }
        html.push_str("</tr>");
        for (d, day) in DAYS.iter().enumerate() {
            html.push_str(&format!("<tr><th>{day}</th>"));
            for p in 0..PERIODS {
                if (d + p) % 3 == 0 {
                    html.push_str("<td></td>");
                } else {
                    html.push_str(&format!(
                        "<td>CSE {}FC: F{}B:Main Campus⇒Room:{}</td>",
                        300 + p, d, 600 + p
                    ));
                }
            }
            html.push_str("</tr>");
        }
        html.push_str("</table>");

        html.push_str(r#"<table class="tb"><tr><th>Code</th><th>Title</th><th>FC</th><th>Name</th></tr>"#);
        for p in 0..PERIODS {
            html.push_str(&format!(
                "<tr><td>CSE {}</td><td>Course {p}</td><td>F{}</td><td>Faculty {p}</td></tr>",
                300 + p,
                p % DAYS.len()
            ));
        }
        html.push_str("</table>");
    }
    html.push_str("</body></html>");
    html
}

fn bench_parse(c: &mut Criterion) {
    let stamp = Utc.with_ymd_and_hms(2024, 2, 1, 8, 0, 0).unwrap();
    let small = synthetic_page(10);
    let full = synthetic_page(250);

    c.bench_function("parse_10_routines", |b| {
        b.iter(|| {
            let out = parse_document_at(black_box(&small), stamp, Some(&mut NullProgress));
            black_box(out.document.routines.len())
        })
    });

    c.bench_function("parse_250_routines", |b| {
        b.iter(|| {
            let out = parse_document_at(black_box(&full), stamp, Some(&mut NullProgress));
            black_box(out.document.routines.len())
        })
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
