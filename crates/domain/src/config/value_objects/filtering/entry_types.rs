use bitflags::bitflags;
use dir_count_shared_kernel::EntryType;

bitflags! {
    /// Set of entry types named by an include/exclude type parameter.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EntryTypes: u8 {
        const FILE = 1 << 0;
        const DIR = 1 << 1;
        const SYMLINK = 1 << 2;
        const SOCKET = 1 << 3;
        const BLOCK_DEVICE = 1 << 4;
        const CHAR_DEVICE = 1 << 5;
        const FIFO = 1 << 6;
        const DEVICE = Self::BLOCK_DEVICE.bits() | Self::CHAR_DEVICE.bits();
    }
}

impl EntryTypes {
    pub const fn of(entry_type: EntryType) -> Self {
        match entry_type {
            EntryType::File => Self::FILE,
            EntryType::Dir => Self::DIR,
            EntryType::Symlink => Self::SYMLINK,
            EntryType::Socket => Self::SOCKET,
            EntryType::BlockDevice => Self::BLOCK_DEVICE,
            EntryType::CharDevice => Self::CHAR_DEVICE,
            EntryType::Fifo => Self::FIFO,
        }
    }

    /// Single type token, `dev` expanding to both device kinds.
    pub fn from_token(token: &str) -> Option<Self> {
        let types = match token {
            "file" => Self::FILE,
            "dir" => Self::DIR,
            "sym" => Self::SYMLINK,
            "sock" => Self::SOCKET,
            "bdev" => Self::BLOCK_DEVICE,
            "cdev" => Self::CHAR_DEVICE,
            "dev" => Self::DEVICE,
            "fifo" => Self::FIFO,
            _ => return None,
        };
        Some(types)
    }

    #[inline]
    pub fn matches(self, entry_type: EntryType) -> bool {
        self.contains(Self::of(entry_type))
    }
}
