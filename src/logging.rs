/// Conditional logging module for development builds
///
/// The `log!` macro provides informational logging that is compiled out in
/// production (release) builds by default. Errors and warnings should continue
/// using `leptos::logging::error!` and `leptos::logging::warn!` directly.
///
/// Logging is enabled when either:
/// - Building in debug mode (`cfg(debug_assertions)`)
/// - The `console_logging` feature is explicitly enabled
///
/// Output goes to the browser console on wasm and to stdout on native targets,
/// so engine code can log freely from unit tests.
///
/// # Examples
///
/// ```rust,ignore
/// log!("Starting journey at {}", station_id);
/// log!("Loaded {} stations for {}", count, city);
/// ```
#[macro_export]
macro_rules! log {
    ($($arg:tt)+) => {
        #[cfg(any(debug_assertions, feature = "console_logging"))]
        {
            leptos::logging::log!($($arg)+);
        }
    };
}
