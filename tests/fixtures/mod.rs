//! Test fixtures and helpers for binding tests.
//!
//! - [`Recorder`] - Shared model text plus a log of every model call
//! - [`FocusToggle`] - Switchable focus probe
//!
//! # Example
//!
//! ```ignore
//! let recorder = Recorder::new("x");
//! let mut binding = TextDiffBinding::new(recorder.model(), MemorySurface::with_text("xy"));
//! binding.on_input().unwrap();
//! assert_eq!(recorder.calls(), vec!["insert(1, \"y\")"]);
//! ```

#![allow(dead_code)] // Shared test helpers; not every integration test uses every helper
#![allow(clippy::nursery)] // Test fixtures prioritize clarity over pedantry
#![allow(clippy::pedantic)] // Test fixtures prioritize clarity over pedantry

pub mod focus;
pub mod recorder;

pub use focus::*;
pub use recorder::*;

use std::sync::Once;

/// Route binding log output into `tracing` once per test binary.
pub fn setup_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
        text_diff_binding::set_log_callback(|level, message| match level {
            text_diff_binding::LogLevel::Debug => tracing::debug!("{message}"),
            text_diff_binding::LogLevel::Info => tracing::info!("{message}"),
            text_diff_binding::LogLevel::Warn => tracing::warn!("{message}"),
            text_diff_binding::LogLevel::Error => tracing::error!("{message}"),
        });
    });
}
