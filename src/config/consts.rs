// src/config/consts.rs

// Net config
pub const ROUTINE_URL: &str = "https://annex.bubt.edu.bd/global_file/routine.php";
pub const USER_AGENT: &str = concat!("routine_scrape/", env!("CARGO_PKG_VERSION"));
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// Local cache
pub const STORE_DIR: &str = ".store";
pub const PAGE_CACHE_FILE: &str = "routine.php.html";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "data";
pub const DEFAULT_OUT_FILE: &str = "routines.json";

// Page markers (one of each per routine, in the same order)
pub const INFO_TABLE: &str = r#"table[id="HdtableRtn"]"#;
pub const GRID_TABLE: &str = r#"table[id="tableRtn"]"#;
pub const FOOTER_TABLE: &str = "table.tb";

// Grid cell grammar: "<course>FC: <faculty>B:<building>⇒Room:<room>"
pub const FACULTY_MARKER: &str = "FC:";
pub const BUILDING_MARKER: &str = "B:";
pub const ROOM_SEPARATOR: char = '\u{21D2}'; // ⇒

// Grid rows, in page order
pub const WEEKDAYS: [&str; 7] = ["SAT", "SUN", "MON", "TUE", "WED", "THU", "FRI"];
