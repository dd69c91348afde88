// crates/cli/src/args.rs
use std::ffi::OsString;

use clap::Parser;

use crate::error::Result;

/// Printed on stderr for every usage error.
pub const USAGE: &str = "usage:\tfile [-hi] ...";

/// Command-line arguments, getopt style: `-h`, `-i`, `-d`, `-m arg`, `-M arg`.
#[derive(Parser, Debug)]
#[command(
    name = "file",
    about = "Describe filesystem entries by type",
    override_usage = "file [-hi] ...",
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct Args {
    /// Follow symbolic links
    #[arg(short = 'h')]
    pub follow_symlinks: bool,

    /// Report "regular file" instead of "data file"
    #[arg(short = 'i')]
    pub ignore_magic: bool,

    /// Accepted for compatibility; no effect
    #[arg(short = 'd')]
    pub debug_magic: bool,

    /// Accepted for compatibility; no effect
    #[arg(short = 'm', value_name = "MAGIC", allow_hyphen_values = true)]
    pub magic_file: Option<OsString>,

    /// Accepted for compatibility; no effect
    #[arg(short = 'M', value_name = "MAGIC", allow_hyphen_values = true)]
    pub magic_file_override: Option<OsString>,

    /// Entries to describe, in output order. Option parsing stops at the
    /// first entry.
    #[arg(required = true, num_args = 1.., trailing_var_arg = true, value_name = "FILE")]
    pub paths: Vec<OsString>,
}

/// Parse an argument vector (program name first).
///
/// # Errors
/// Returns [`AppError::Usage`](crate::error::AppError::Usage) for unknown
/// flags, a missing `-m`/`-M` value, or no paths.
pub fn parse_args<I, T>(argv: I) -> Result<Args>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Ok(Args::try_parse_from(argv)?)
}
