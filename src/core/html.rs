// src/core/html.rs
//
// Small helpers over `scraper` so the page specs read like the table layout
// they describe. All text comes back entity-decoded (the parser does that).

use scraper::ElementRef;

use super::sanitize::normalize_ws;

/// Concatenated text of every descendant text node (DOM `textContent`).
pub fn text_content(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// `textContent`, trimmed at both ends.
pub fn trimmed_text(el: ElementRef<'_>) -> String {
    text_content(el).trim().to_string()
}

/// `textContent` with whitespace runs collapsed.
pub fn clean_text(el: ElementRef<'_>) -> String {
    normalize_ws(&text_content(el))
}

/// Every `<tr>` below `table`, document order (nested tables included, like
/// `getElementsByTagName`).
pub fn rows<'a>(table: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    table.select(selector!("tr")).collect()
}

/// `<td>` cells below `el`.
pub fn td_cells<'a>(el: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    el.select(selector!("td")).collect()
}

/// `<th>` cells below `el`.
pub fn th_cells<'a>(el: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    el.select(selector!("th")).collect()
}
