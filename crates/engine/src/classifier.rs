use crate::classification::{Classification, LinkTarget};
use crate::config::ClassifyOptions;
use crate::error::{ClassifyError, Result};
use crate::options::LookupMode;
use crate::platform::EntryKind;
use log::{debug, trace};
use std::fs::Metadata;
use std::path::Path;

/// Describe `path` as a plain string.
///
/// Never fails: every lookup or read error is reported as `"cannot open"`.
#[must_use]
pub fn classify(path: &Path, follow_symlinks: bool, ignore_magic: bool) -> String {
    classify_entry(path, ClassifyOptions::new(follow_symlinks, ignore_magic)).to_string()
}

/// Typed form of [`classify`]; errors collapse to [`Classification::CannotOpen`].
#[must_use]
pub fn classify_entry(path: &Path, options: ClassifyOptions) -> Classification {
    match try_classify(path, options) {
        Ok(classification) => {
            trace!("{}: {classification}", path.display());
            classification
        }
        Err(e) => {
            debug!("{e}");
            Classification::CannotOpen
        }
    }
}

/// Classify `path`, keeping the reason when it cannot be described.
///
/// The first lookup follows links only when `options.follow_symlinks` is set.
/// A failed lookup is retried once in the opposite mode, so a dangling link
/// queried with following still reports its target.
///
/// # Errors
/// Returns [`ClassifyError::Metadata`] when both lookups fail,
/// [`ClassifyError::ReadLink`] when a link target cannot be read, and
/// [`ClassifyError::UnsupportedType`] for entry types with no description.
pub fn try_classify(path: &Path, options: ClassifyOptions) -> Result<Classification> {
    let meta = lookup(path, options.initial_lookup())?;

    match EntryKind::of(meta.file_type()) {
        EntryKind::BlockDevice => Ok(Classification::BlockSpecial),
        EntryKind::CharDevice => Ok(Classification::CharacterSpecial),
        EntryKind::Directory => Ok(Classification::Directory),
        EntryKind::Fifo => Ok(Classification::Fifo),
        EntryKind::Symlink => read_link_target(path).map(Classification::SymbolicLink),
        EntryKind::Regular if options.ignore_magic => Ok(Classification::RegularFile),
        EntryKind::Regular => Ok(Classification::DataFile),
        EntryKind::Socket => Ok(Classification::Socket),
        EntryKind::Unknown => Err(ClassifyError::UnsupportedType {
            path: path.to_path_buf(),
        }),
    }
}

fn lookup(path: &Path, mode: LookupMode) -> Result<Metadata> {
    mode.metadata(path).or_else(|first| {
        let retry = mode.fallback();
        debug!("{}: {mode} lookup failed ({first}), retrying {retry}", path.display());
        retry.metadata(path).map_err(|source| ClassifyError::Metadata {
            path: path.to_path_buf(),
            mode: retry,
            source,
        })
    })
}

fn read_link_target(path: &Path) -> Result<LinkTarget> {
    std::fs::read_link(path)
        .map(LinkTarget::from_path)
        .map_err(|source| ClassifyError::ReadLink {
            path: path.to_path_buf(),
            source,
        })
}
