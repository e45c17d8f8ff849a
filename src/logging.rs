/// Conditional logging for development builds
///
/// The `log!` macro provides informational logging that is compiled out in
/// production (release) builds by default. Errors should keep using
/// `leptos::logging::error!` directly.
///
/// Logging is enabled when either:
/// - Building in debug mode (`cfg(debug_assertions)`)
/// - The `console_logging` feature is explicitly enabled
///
/// Output goes through `leptos::logging::log!`, so it lands in the browser
/// console on wasm and on stdout in native test runs.
///
/// # Examples
///
/// ```rust
/// use portal_modal::logging::log;
///
/// log!("modal {}", "opened");
/// ```
#[macro_export]
macro_rules! log {
    ($($arg:expr),+ $(,)?) => {
        #[cfg(any(debug_assertions, feature = "console_logging"))]
        {
            leptos::logging::log!("{}", format!($($arg),+));
        }
    };
}

pub use log;
