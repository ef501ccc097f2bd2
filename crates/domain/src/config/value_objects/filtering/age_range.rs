use chrono::{DateTime, Local, Utc};

/// Modification-time cutoffs computed once from "now" minus the parsed ages.
///
/// `min_age` rejects entries modified after its cutoff (too young);
/// `max_age` rejects entries modified before its cutoff (too old).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AgeRange {
    pub min_age_cutoff: Option<DateTime<Local>>,
    pub max_age_cutoff: Option<DateTime<Local>>,
}

impl AgeRange {
    pub fn new(
        min_age_cutoff: Option<DateTime<Local>>,
        max_age_cutoff: Option<DateTime<Local>>,
    ) -> Self {
        Self {
            min_age_cutoff,
            max_age_cutoff,
        }
    }

    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.min_age_cutoff.is_none() && self.max_age_cutoff.is_none()
    }

    pub fn contains(&self, modified: DateTime<Utc>) -> bool {
        if let Some(cutoff) = self.min_age_cutoff
            && modified > cutoff.with_timezone(&Utc)
        {
            return false;
        }
        if let Some(cutoff) = self.max_age_cutoff
            && modified < cutoff.with_timezone(&Utc)
        {
            return false;
        }
        true
    }
}
