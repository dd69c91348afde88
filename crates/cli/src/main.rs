use anyhow::{Context, Result};
use file_kind_cli::app;
use file_kind_cli::args::{Args, USAGE, parse_args};
use file_kind_cli::config::Config;
use log::debug;
use std::io::{self, BufWriter};
use std::process::ExitCode;

fn main() -> ExitCode {
    init_logging();

    let args = match parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => {
            debug!("{e}");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("file: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::try_from(args).context("failed to build configuration")?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    app::run(&config, &mut out).context("failed to write report")
}

// Diagnostics only; stdout and exit codes never depend on RUST_LOG.
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off"))
        .format_timestamp(None)
        .init();
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
    })
}
