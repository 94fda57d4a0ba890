//! Shared helpers for the cross-crate integration tests.

use std::sync::Once;

static INIT: Once = Once::new();

/// Routes `log` output through the test harness; honours `RUST_LOG`.
pub fn init_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
        log::debug!("integration test logger initialized");
    });
}

/// Runs the whole pipeline on `source` under `<stdin>` and returns the tree's
/// display form, or the error report.
pub fn run_display(source: &str) -> Result<String, String> {
    init_logger();
    beer::run("<stdin>", source)
        .map(|ast| ast.to_string())
        .map_err(|err| err.report())
}
