// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Compile a constant CSS selector once and hand out `&'static Selector`.
/// Only meant for literals and consts; a bad one is a programming error and
/// panics the first time the selector is used.
#[macro_export]
macro_rules! selector {
    ($css:expr) => {{
        static SELECTOR: ::std::sync::LazyLock<::scraper::Selector> =
            ::std::sync::LazyLock::new(|| {
                ::scraper::Selector::parse($css)
                    .unwrap_or_else(|e| panic!("bad selector {:?}: {e}", $css))
            });
        &*SELECTOR
    }};
}
