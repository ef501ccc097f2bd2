// crates/domain/src/params.rs
use chrono::{DateTime, Local, TimeDelta};
use dir_count_shared_kernel::{DirCountError, ParamError, ParamResult, ParamSlot, Result};

use crate::{
    config::FilterSpec,
    parsers::{parse_byte, parse_depth, parse_optional, parse_pattern, parse_time, parse_types},
};

/// Build a [`FilterSpec`] from the positional metric parameters, with age
/// cutoffs relative to the current local time.
///
/// # Errors
/// See [`parse_params_at`].
pub fn parse_params<S: AsRef<str>>(params: &[S]) -> Result<FilterSpec> {
    parse_params_at(params, Local::now())
}

/// Build a [`FilterSpec`] with age cutoffs relative to `now`.
///
/// Supplying slot N means slots 1..N are all consulted; slots past the end of
/// the list keep their defaults. Slots are validated in order, so the lowest
/// invalid slot is the one reported.
///
/// # Errors
/// - [`DirCountError::TooFewParameters`] for an empty list or an empty path
/// - [`DirCountError::TooManyParameters`] for more than eleven parameters
/// - [`DirCountError::InvalidParameters`] naming the first malformed slot
pub fn parse_params_at<S: AsRef<str>>(params: &[S], now: DateTime<Local>) -> Result<FilterSpec> {
    if params.len() > ParamSlot::COUNT {
        return Err(DirCountError::TooManyParameters);
    }
    let Some(path) = params.first().map(AsRef::as_ref) else {
        return Err(DirCountError::TooFewParameters);
    };
    if path.is_empty() {
        return Err(DirCountError::TooFewParameters);
    }

    let mut spec = FilterSpec::new(path);
    for slot in ParamSlot::ALL.into_iter().take(params.len()).skip(1) {
        let value = params[slot.index()].as_ref();
        apply_slot(&mut spec, slot, value, now).map_err(|source| DirCountError::invalid(slot, source))?;
    }
    Ok(spec)
}

fn apply_slot(spec: &mut FilterSpec, slot: ParamSlot, value: &str, now: DateTime<Local>) -> ParamResult<()> {
    match slot {
        ParamSlot::Path => {}
        ParamSlot::IncludeName => spec.include_name = parse_pattern(value)?,
        ParamSlot::ExcludeName => spec.exclude_name = parse_pattern(value)?,
        ParamSlot::IncludeTypes => spec.include_types = parse_types(value)?,
        ParamSlot::ExcludeTypes => spec.exclude_types = parse_types(value)?,
        ParamSlot::MaxDepth => spec.max_depth = parse_depth(value)?,
        ParamSlot::MinSize => spec.size.min = parse_optional(value, parse_byte)?,
        ParamSlot::MaxSize => spec.size.max = parse_optional(value, parse_byte)?,
        ParamSlot::MinAge => spec.age.min_age_cutoff = parse_cutoff(value, now)?,
        ParamSlot::MaxAge => spec.age.max_age_cutoff = parse_cutoff(value, now)?,
        ParamSlot::ExcludeDirName => spec.exclude_dir_name = parse_pattern(value)?,
    }
    Ok(())
}

fn parse_cutoff(value: &str, now: DateTime<Local>) -> ParamResult<Option<DateTime<Local>>> {
    parse_optional(value, parse_time)?
        .map(|age: TimeDelta| {
            now.checked_sub_signed(age)
                .ok_or_else(|| ParamError::Overflow(value.to_string()))
        })
        .transpose()
}
