// crates/engine/src/platform.rs
//! Platform-specific pieces of entry classification.
//!
//! Device, FIFO and socket detection only exist on Unix. Elsewhere those
//! entries fall through to [`EntryKind::Unknown`].

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fs::FileType;

/// Raw entry type as reported by the filesystem, before any labelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    BlockDevice,
    CharDevice,
    Directory,
    Fifo,
    Symlink,
    Regular,
    Socket,
    Unknown,
}

impl EntryKind {
    /// Map a [`FileType`], checking types in a fixed priority order.
    #[cfg(unix)]
    #[must_use]
    pub fn of(file_type: FileType) -> Self {
        use std::os::unix::fs::FileTypeExt;

        if file_type.is_block_device() {
            Self::BlockDevice
        } else if file_type.is_char_device() {
            Self::CharDevice
        } else if file_type.is_dir() {
            Self::Directory
        } else if file_type.is_fifo() {
            Self::Fifo
        } else if file_type.is_symlink() {
            Self::Symlink
        } else if file_type.is_file() {
            Self::Regular
        } else if file_type.is_socket() {
            Self::Socket
        } else {
            Self::Unknown
        }
    }

    #[cfg(not(unix))]
    #[must_use]
    pub fn of(file_type: FileType) -> Self {
        if file_type.is_dir() {
            Self::Directory
        } else if file_type.is_symlink() {
            Self::Symlink
        } else if file_type.is_file() {
            Self::Regular
        } else {
            Self::Unknown
        }
    }
}

/// Bytes of an OS string, exact on Unix and lossy UTF-8 elsewhere.
#[cfg(unix)]
#[must_use]
pub fn os_str_bytes(s: &OsStr) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(s.as_bytes())
}

#[cfg(not(unix))]
#[must_use]
pub fn os_str_bytes(s: &OsStr) -> Cow<'_, [u8]> {
    match s.to_string_lossy() {
        Cow::Borrowed(text) => Cow::Borrowed(text.as_bytes()),
        Cow::Owned(text) => Cow::Owned(text.into_bytes()),
    }
}

#[cfg(unix)]
#[must_use]
pub fn into_bytes(s: OsString) -> Vec<u8> {
    use std::os::unix::ffi::OsStringExt;
    s.into_vec()
}

#[cfg(not(unix))]
#[must_use]
pub fn into_bytes(s: OsString) -> Vec<u8> {
    s.to_string_lossy().into_owned().into_bytes()
}
