#![deny(missing_docs)]
//! Shared logging utilities for the newsdesk workspace.
//!
//! This crate provides the `news_*` logging macros used by the core, the
//! engine and the app, plus a minimal test initializer for the global logger.

use std::sync::Once;

#[doc(hidden)]
pub use log;

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! news_trace {
    ($($arg:tt)*) => {{
        $crate::log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! news_debug {
    ($($arg:tt)*) => {{
        $crate::log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! news_info {
    ($($arg:tt)*) => {{
        $crate::log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! news_warn {
    ($($arg:tt)*) => {{
        $crate::log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! news_error {
    ($($arg:tt)*) => {{
        $crate::log::error!($($arg)*);
    }};
}

static TEST_INIT: Once = Once::new();

/// Initializes a simple terminal logger for use in tests.
///
/// Safe to call from every test; only the first call installs a logger, and
/// an already-installed logger from elsewhere is left in place.
pub fn initialize_for_tests() {
    TEST_INIT.call_once(|| {
        use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

        // Use debug level in debug builds, info in release builds.
        let level = if cfg!(debug_assertions) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };

        let _ = CombinedLogger::init(vec![TermLogger::new(
            level,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        )]);
    });
}
