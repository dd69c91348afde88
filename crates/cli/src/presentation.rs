// crates/cli/src/presentation.rs
use file_kind_engine::Classification;
use file_kind_engine::platform::os_str_bytes;
use std::ffi::OsStr;
use std::io::{self, Write};

/// Write one `<path>: <description>` line. Path and link target bytes are
/// written unchanged.
///
/// # Errors
/// Propagates write failures from `out`.
pub fn write_report<W: Write + ?Sized>(
    out: &mut W,
    path: &OsStr,
    classification: &Classification,
) -> io::Result<()> {
    out.write_all(&os_str_bytes(path))?;
    out.write_all(b": ")?;
    classification.write_to(out)?;
    out.write_all(b"\n")
}
