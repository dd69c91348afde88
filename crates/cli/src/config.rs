// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::AppError;
use file_kind_engine::config::{ClassifyOptions, ClassifyOptionsBuilder};
use log::debug;
use std::ffi::OsString;

/// Everything a run needs: the paths in argument order and how to classify them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub paths: Vec<OsString>,
    pub classify: ClassifyOptions,
}

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        // -d, -m and -M only exist for interface compatibility
        if args.debug_magic {
            debug!("ignoring -d");
        }
        if let Some(magic) = &args.magic_file {
            debug!("ignoring -m {}", magic.to_string_lossy());
        }
        if let Some(magic) = &args.magic_file_override {
            debug!("ignoring -M {}", magic.to_string_lossy());
        }

        let classify = ClassifyOptionsBuilder::default()
            .follow_symlinks(args.follow_symlinks)
            .ignore_magic(args.ignore_magic)
            .build()?;

        Ok(Self {
            paths: args.paths,
            classify,
        })
    }
}
