// src/cli.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::WrapErr;

use crate::{
    config::{
        consts::{DEFAULT_OUT_DIR, DEFAULT_OUT_FILE, PAGE_CACHE_FILE, ROUTINE_URL, STORE_DIR},
        options::{AppOptions, Refresh},
    },
    file,
    progress::Progress,
    report::ParseReport,
    scrape, store,
};

#[derive(Parser, Debug)]
#[command(name = "routine_scrape", version, about = "Extract the BUBT class routine page into JSON")]
pub struct Cli {
    /// More log output (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Download the routine page into the local cache.
    Fetch {
        #[arg(long, default_value = ROUTINE_URL)]
        url: String,
        /// Cache file [default: .store/routine.php.html]
        #[arg(long)]
        cache: Option<PathBuf>,
        /// Encoding label to decode with instead of the server's charset.
        #[arg(long)]
        encoding: Option<String>,
    },
    /// Parse a saved HTML page and write JSON.
    Parse {
        /// HTML file [default: the page cache]
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Output JSON [default: data/routines.json]
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Encoding label; otherwise BOM / <meta> / UTF-8.
        #[arg(long)]
        encoding: Option<String>,
        /// Single-line JSON.
        #[arg(long)]
        compact: bool,
        /// Print every parse warning.
        #[arg(long)]
        warnings: bool,
    },
    /// Fetch (per --refresh) then parse and write JSON.
    Run {
        #[arg(long, default_value = ROUTINE_URL)]
        url: String,
        #[arg(long, value_enum, default_value_t = RefreshArg::IfMissing)]
        refresh: RefreshArg,
        #[arg(short, long)]
        out: Option<PathBuf>,
        #[arg(long)]
        encoding: Option<String>,
        #[arg(long)]
        compact: bool,
        #[arg(long)]
        warnings: bool,
    },
    /// Print counts and the program → intake → sections tree of a JSON file.
    Summary {
        /// JSON file [default: data/routines.json]
        input: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RefreshArg {
    Always,
    IfMissing,
    Never,
}

impl From<RefreshArg> for Refresh {
    fn from(r: RefreshArg) -> Self {
        match r {
            RefreshArg::Always => Refresh::Always,
            RefreshArg::IfMissing => Refresh::IfMissing,
            RefreshArg::Never => Refresh::Never,
        }
    }
}

/// Prints progress lines to stderr; per-routine lines only when verbose.
struct CliProgress {
    verbose: bool,
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("Parsing {total} routines…");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, index: usize, label: &str) {
        if self.verbose {
            eprintln!("  [{}/{}] {}", index + 1, self.total, label);
        }
    }
}

fn default_cache() -> PathBuf {
    PathBuf::from(STORE_DIR).join(PAGE_CACHE_FILE)
}

fn default_out() -> PathBuf {
    PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_OUT_FILE)
}

pub fn run(cli: Cli) -> color_eyre::Result<()> {
    let mut progress = CliProgress { verbose: cli.verbose > 0, total: 0 };

    match cli.command {
        Command::Fetch { url, cache, encoding } => {
            let mut opts = AppOptions::default();
            opts.source.url = url;
            opts.source.cache_path = cache.unwrap_or_else(default_cache);
            opts.source.refresh = Refresh::Always;
            opts.source.encoding = encoding;

            let html = scrape::load_source(&opts.source, Some(&mut progress))
                .wrap_err("fetching routine page")?;
            println!(
                "Saved routine data to {} ({})",
                opts.source.cache_path.display(),
                file::format_bytes(html.len() as u64)
            );
        }

        Command::Parse { input, out, encoding, compact, warnings } => {
            let input = input.unwrap_or_else(default_cache);
            let out = out.unwrap_or_else(default_out);

            let html = store::read_html(&input, encoding.as_deref())
                .wrap_err_with(|| format!("reading {}", input.display()))?;
            let outcome = scrape::parse_document_at(&html, chrono::Utc::now(), Some(&mut progress));
            let written = file::write_document(&out, &outcome.document, !compact)?;

            println!(
                "Saved parsed json to {} ({})",
                written.path.display(),
                file::format_bytes(written.bytes)
            );
            println!("{}", outcome.document.summary());
            print_report(&outcome.report, warnings);
        }

        Command::Run { url, refresh, out, encoding, compact, warnings } => {
            let mut opts = AppOptions::default();
            opts.source.url = url;
            opts.source.refresh = refresh.into();
            opts.source.encoding = encoding;
            opts.export.out_path = out.unwrap_or_else(default_out);
            opts.export.pretty = !compact;

            let summary = scrape::run(&opts, Some(&mut progress))?;
            println!("{}", summary.outcome.document.summary());
            print_report(&summary.outcome.report, warnings);
        }

        Command::Summary { input } => {
            let input = input.unwrap_or_else(default_out);
            let doc = file::read_document(&input)
                .wrap_err_with(|| format!("reading {}", input.display()))?;

            println!("Updated: {}", doc.updated.to_rfc3339());
            println!("{}", doc.summary());
            for program in doc.programs.programs() {
                println!("{program}");
                for (intake, sections) in doc.programs.intakes(program) {
                    println!("  {intake}: {}", sections.join(", "));
                }
            }
        }
    }

    Ok(())
}

fn print_report(report: &ParseReport, all: bool) {
    if report.truncated() {
        let [i, g, f] = report.tables_found;
        eprintln!("Note: uneven table groups (info={i}, grid={g}, footer={f}); extra tables ignored");
    }
    if report.warnings.is_empty() {
        return;
    }
    if all {
        for w in &report.warnings {
            eprintln!("warning: {w}");
        }
    } else {
        eprintln!("{} parse warnings (use --warnings to list)", report.warnings.len());
    }
}
