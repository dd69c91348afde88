// crates/cli/src/app.rs
use crate::config::Config;
use crate::error::Result;
use crate::presentation;
use file_kind_engine::classify_entry;
use std::io::Write;
use std::path::Path;

/// Classify every configured path in order, one report line each.
///
/// Per-path failures are reported as "cannot open" and never stop the run.
///
/// # Errors
/// Returns `Err` only when writing to `out` fails.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    for path in &config.paths {
        let classification = classify_entry(Path::new(path), config.classify);
        presentation::write_report(out, path, &classification)?;
    }
    out.flush()?;
    Ok(())
}
