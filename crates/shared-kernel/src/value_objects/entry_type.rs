// crates/shared-kernel/src/value_objects/entry_type.rs
use std::fmt;

/// Kind of a directory entry as reported by the walker (links are not resolved).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryType {
    File,
    Dir,
    Symlink,
    Socket,
    BlockDevice,
    CharDevice,
    Fifo,
}

impl EntryType {
    #[inline]
    pub const fn is_dir(self) -> bool {
        matches!(self, Self::Dir)
    }

    /// Type token used in the include/exclude type parameters.
    pub const fn token(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Dir => "dir",
            Self::Symlink => "sym",
            Self::Socket => "sock",
            Self::BlockDevice => "bdev",
            Self::CharDevice => "cdev",
            Self::Fifo => "fifo",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
