// src/scrape.rs
//
// Document-level assembly plus the fetch → parse → write run used by both
// frontends.

use chrono::{DateTime, Utc};
use scraper::Html;

use crate::{
    config::options::{AppOptions, Refresh, SourceOptions},
    core::{encoding::decode_document, net},
    file::{self, Written},
    model::RoutineDocument,
    progress::Progress,
    report::ParseReport,
    specs::{parse_routine, Accumulator, TableGroups},
    store,
    error::Result,
};

/// Parsed document plus everything the parser had to tolerate.
#[derive(Clone, Debug)]
pub struct ParseOutcome {
    pub document: RoutineDocument,
    pub report: ParseReport,
}

/// Parse a whole routine page, stamped with the current time.
pub fn parse_document(html: &str) -> ParseOutcome {
    parse_document_at(html, Utc::now(), None)
}

/// Parse with an explicit `updated` stamp. Same input + same stamp → same output.
pub fn parse_document_at(
    html: &str,
    updated: DateTime<Utc>,
    mut progress: Option<&mut dyn Progress>,
) -> ParseOutcome {
    let doc = Html::parse_document(html);
    let groups = TableGroups::locate(&doc);
    let total = groups.aligned_len();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(total);
    }

    let mut report = ParseReport { tables_found: groups.counts(), ..ParseReport::default() };
    let mut acc = Accumulator::default();
    let mut routines = Vec::with_capacity(total);

    for (i, tables) in groups.triples().enumerate() {
        let (routine, issues) = parse_routine(tables, &mut acc);
        report.push_all(i, issues);
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(i, &routine.label());
        }
        routines.push(routine);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    let Accumulator { courses, faculty, programs } = acc;
    let document = RoutineDocument {
        updated,
        programs,
        course_code_to_title_map: courses,
        faculty_id_to_name_map: faculty,
        routines,
    };

    logf!(
        "Parse: {} (tables info={} grid={} footer={}, warnings={})",
        document.summary(),
        report.tables_found[0],
        report.tables_found[1],
        report.tables_found[2],
        report.warnings.len()
    );

    ParseOutcome { document, report }
}

/// Get the page text per the refresh policy: network, cache, or both.
pub fn load_source(src: &SourceOptions, mut progress: Option<&mut dyn Progress>) -> Result<String> {
    let cached = src.cache_path.is_file();
    let download = match src.refresh {
        Refresh::Always => true,
        Refresh::IfMissing => !cached,
        Refresh::Never => false,
    };

    if download {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Fetching {}…", src.url));
        }
        let page = net::http_get(&src.url)?;
        let declared = src.encoding.as_deref().or(page.charset.as_deref());
        let decoded = decode_document(&page.bytes, declared);
        store::save_page(&src.cache_path, &decoded.text)?;
        logf!(
            "Fetch: saved page to {} ({})",
            src.cache_path.display(),
            file::format_bytes(decoded.text.len() as u64)
        );
        Ok(decoded.text)
    } else {
        if let Some(p) = progress.as_deref_mut() {
            p.log("Loading cached page…");
        }
        store::load_page(&src.cache_path, src.encoding.as_deref())
    }
}

/// Lend the sink to a callee without giving it up; the object lifetime is
/// shortened so the caller can keep using `progress` afterwards.
fn reborrow<'a>(progress: &'a mut Option<&mut dyn Progress>) -> Option<&'a mut dyn Progress> {
    progress.as_mut().map(|p| &mut **p as &mut dyn Progress)
}

/// Load (per refresh policy) and parse.
pub fn collect(opts: &AppOptions, mut progress: Option<&mut dyn Progress>) -> Result<ParseOutcome> {
    let html = load_source(&opts.source, reborrow(&mut progress))?;
    Ok(parse_document_at(&html, Utc::now(), progress))
}

/// What a full run produced.
pub struct RunSummary {
    pub outcome: ParseOutcome,
    pub written: Written,
}

/// Load, parse, write. The only fallible steps are the I/O ones.
pub fn run(opts: &AppOptions, mut progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    let outcome = collect(opts, reborrow(&mut progress))?;
    let written = file::write_document(&opts.export.out_path, &outcome.document, opts.export.pretty)?;
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Saved {} ({})", written.path.display(), file::format_bytes(written.bytes)));
    }
    Ok(RunSummary { outcome, written })
}
