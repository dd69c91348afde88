use crate::platform;
use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;

/// Longest link target reported; anything past this is dropped.
pub const MAX_LINK_TARGET: usize = 1023;

/// Raw bytes of a symbolic link target, capped at [`MAX_LINK_TARGET`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget(Vec<u8>);

impl LinkTarget {
    #[must_use]
    pub fn new(mut bytes: Vec<u8>) -> Self {
        bytes.truncate(MAX_LINK_TARGET);
        Self(bytes)
    }

    #[must_use]
    pub fn from_path(target: PathBuf) -> Self {
        Self::new(platform::into_bytes(target.into_os_string()))
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for LinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

/// Description of a single filesystem entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    BlockSpecial,
    CharacterSpecial,
    Directory,
    Fifo,
    SymbolicLink(LinkTarget),
    RegularFile,
    DataFile,
    Socket,
    CannotOpen,
}

impl Classification {
    /// Fixed part of the description. For links this is the prefix that
    /// precedes the target.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::BlockSpecial => "block special",
            Self::CharacterSpecial => "character special",
            Self::Directory => "directory",
            Self::Fifo => "FIFO",
            Self::SymbolicLink(_) => "symbolic link to ",
            Self::RegularFile => "regular file",
            Self::DataFile => "data file",
            Self::Socket => "socket",
            Self::CannotOpen => "cannot open",
        }
    }

    /// Write the description without re-encoding the link target.
    ///
    /// # Errors
    /// Propagates write failures from `out`.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.label().as_bytes())?;
        if let Self::SymbolicLink(target) = self {
            out.write_all(target.as_bytes())?;
        }
        Ok(())
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())?;
        if let Self::SymbolicLink(target) = self {
            write!(f, "{target}")?;
        }
        Ok(())
    }
}
