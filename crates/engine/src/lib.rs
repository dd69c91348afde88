// crates/engine/src/lib.rs
//! Classification of filesystem entries by type, in the manner of `file(1)`
//! without any content inspection.

pub mod classification;
pub mod classifier;
pub mod config;
pub mod error;
pub mod options;
pub mod platform;

pub use crate::classification::{Classification, LinkTarget, MAX_LINK_TARGET};
pub use crate::classifier::{classify, classify_entry, try_classify};
pub use crate::config::{ClassifyOptions, ClassifyOptionsBuilder};
pub use crate::error::{ClassifyError, Result};
pub use crate::options::LookupMode;
