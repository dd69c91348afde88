use crate::options::LookupMode;
use derive_builder::Builder;

/// Per-query switches for the classifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct ClassifyOptions {
    /// Resolve symbolic links before looking at the entry type (`-h`).
    #[builder(default)]
    pub follow_symlinks: bool,
    /// Label regular files "regular file" instead of "data file" (`-i`).
    #[builder(default)]
    pub ignore_magic: bool,
}

impl ClassifyOptions {
    #[must_use]
    pub const fn new(follow_symlinks: bool, ignore_magic: bool) -> Self {
        Self {
            follow_symlinks,
            ignore_magic,
        }
    }

    /// Lookup mode for the first metadata attempt.
    #[must_use]
    pub const fn initial_lookup(&self) -> LookupMode {
        LookupMode::from_follow(self.follow_symlinks)
    }
}
