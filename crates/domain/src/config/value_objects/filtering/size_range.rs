/// Inclusive byte bounds; an absent bound places no constraint on that side.
///
/// Bounds are signed as parsed: a negative minimum admits every size and a
/// negative maximum admits none.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SizeRange {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl SizeRange {
    pub fn new(min: Option<i64>, max: Option<i64>) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    #[inline]
    pub fn contains(&self, size: u64) -> bool {
        let v = i64::try_from(size).unwrap_or(i64::MAX);
        self.min.is_none_or(|m| v >= m) && self.max.is_none_or(|x| v <= x)
    }
}
