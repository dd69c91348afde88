use std::fmt;
use std::fs::Metadata;
use std::path::Path;

/// How a metadata query treats a symbolic link at the queried path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupMode {
    /// Resolve links and describe the final target (`stat`).
    Follow,
    /// Describe the entry itself (`lstat`).
    NoFollow,
}

impl LookupMode {
    #[must_use]
    pub const fn from_follow(follow_symlinks: bool) -> Self {
        if follow_symlinks {
            Self::Follow
        } else {
            Self::NoFollow
        }
    }

    /// The mode used for the single retry after a failed lookup.
    #[must_use]
    pub const fn fallback(self) -> Self {
        match self {
            Self::Follow => Self::NoFollow,
            Self::NoFollow => Self::Follow,
        }
    }

    /// Query metadata for `path` in this mode.
    ///
    /// # Errors
    /// Returns the underlying I/O error from `stat`/`lstat`.
    pub fn metadata(self, path: &Path) -> std::io::Result<Metadata> {
        match self {
            Self::Follow => std::fs::metadata(path),
            Self::NoFollow => std::fs::symlink_metadata(path),
        }
    }
}

impl fmt::Display for LookupMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Follow => "follow",
            Self::NoFollow => "no-follow",
        })
    }
}
