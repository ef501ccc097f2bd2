// crates/shared-kernel/src/value_objects/param_slot.rs
use std::fmt;

/// Position of a metric parameter, one-based on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParamSlot {
    Path,
    IncludeName,
    ExcludeName,
    IncludeTypes,
    ExcludeTypes,
    MaxDepth,
    MinSize,
    MaxSize,
    MinAge,
    MaxAge,
    ExcludeDirName,
}

impl ParamSlot {
    /// Slots in wire order.
    pub const ALL: [Self; 11] = [
        Self::Path,
        Self::IncludeName,
        Self::ExcludeName,
        Self::IncludeTypes,
        Self::ExcludeTypes,
        Self::MaxDepth,
        Self::MinSize,
        Self::MaxSize,
        Self::MinAge,
        Self::MaxAge,
        Self::ExcludeDirName,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// One-based position of the slot.
    #[inline]
    pub const fn position(self) -> usize {
        self as usize + 1
    }

    /// Zero-based index into the parameter list.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn ordinal(self) -> &'static str {
        match self {
            Self::Path => "first",
            Self::IncludeName => "second",
            Self::ExcludeName => "third",
            Self::IncludeTypes => "fourth",
            Self::ExcludeTypes => "fifth",
            Self::MaxDepth => "sixth",
            Self::MinSize => "seventh",
            Self::MaxSize => "eighth",
            Self::MinAge => "ninth",
            Self::MaxAge => "tenth",
            Self::ExcludeDirName => "eleventh",
        }
    }
}

impl fmt::Display for ParamSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ordinal())
    }
}
