/// Deepest level below the root that is counted or descended into.
///
/// Direct children of the root are at depth 1, so `Limited(0)` matches
/// nothing: every child is skipped and every subdirectory pruned.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MaxDepth {
    #[default]
    Unlimited,
    Limited(usize),
}

impl MaxDepth {
    /// Wire value meaning "no limit".
    pub const UNLIMITED_RAW: i64 = -1;

    /// Maps the wire value; anything below `-1` is rejected.
    pub fn from_raw(raw: i64) -> Option<Self> {
        match raw {
            Self::UNLIMITED_RAW => Some(Self::Unlimited),
            n if n < Self::UNLIMITED_RAW => None,
            n => usize::try_from(n).ok().map(Self::Limited),
        }
    }

    pub fn as_raw(self) -> i64 {
        match self {
            Self::Unlimited => Self::UNLIMITED_RAW,
            Self::Limited(n) => i64::try_from(n).unwrap_or(i64::MAX),
        }
    }

    #[inline]
    pub fn is_exceeded_by(self, depth: usize) -> bool {
        matches!(self, Self::Limited(max) if depth > max)
    }
}
