// src/core/sanitize.rs

/// Collapse every whitespace run (NBSP included) to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// `"Program: BSc in CSE"` → `"BSc in CSE"`.
/// Without a colon the whole (trimmed) text is the value.
pub fn value_after_label(s: &str) -> &str {
    match s.find(':') {
        Some(i) => s[i + 1..].trim(),
        None => s.trim(),
    }
}

/// True when `s` carries a `label:` prefix.
pub fn has_label(s: &str) -> bool {
    s.contains(':')
}

/// `"45 - A"` → `("45", Some("A"))`. Only the first two hyphen-separated
/// pieces are read: `"45-A-1"` is section `"A"`.
pub fn split_intake_section(s: &str) -> (&str, Option<&str>) {
    let mut parts = s.split('-');
    let intake = parts.next().unwrap_or_default().trim();
    (intake, parts.next().map(str::trim))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_ws_collapses_runs_and_nbsp() {
        assert_eq!(normalize_ws("  8:30 \n\t -\u{a0}10:00 "), "8:30 - 10:00");
        assert_eq!(normalize_ws("\n \t"), "");
    }

    #[test]
    fn value_after_label_takes_first_colon() {
        assert_eq!(value_after_label("Program: BSCSE"), "BSCSE");
        assert_eq!(value_after_label("Semester : Spring 2024: Day"), "Spring 2024: Day");
        assert_eq!(value_after_label("  BSCSE  "), "BSCSE");
        assert!(!has_label("BSCSE"));
    }

    #[test]
    fn intake_section_split() {
        assert_eq!(split_intake_section("45 - A"), ("45", Some("A")));
        assert_eq!(split_intake_section("45-A-1"), ("45", Some("A")));
        assert_eq!(split_intake_section("45 -"), ("45", Some("")));
        assert_eq!(split_intake_section("45"), ("45", None));
    }
}
