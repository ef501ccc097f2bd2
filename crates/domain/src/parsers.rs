// crates/domain/src/parsers.rs
use chrono::TimeDelta;
use dir_count_shared_kernel::{ParamError, ParamResult};

use crate::config::{EntryTypes, MaxDepth, NamePattern};

const KB: i64 = 1000;
const MB: i64 = KB * 1000;
const GB: i64 = MB * 1000;
const TB: i64 = GB * 1000;

const MINUTE: i64 = 60;
const HOUR: i64 = MINUTE * 60;
const DAY: i64 = HOUR * 24;
const WEEK: i64 = DAY * 7;

/// Literal that selects every entry type in a type list.
pub const ALL_TYPES: &str = "all";

/// Parse a byte count: plain integer, or integer followed by `K`, `M`, `G`
/// or `T` (decimal factors of 1000). Negative values are kept as given.
///
/// # Errors
/// Returns an error for a malformed number, an unknown suffix or a product
/// that does not fit in 64 bits.
pub fn parse_byte(input: &str) -> ParamResult<i64> {
    parse_with_suffix(input, |suffix| match suffix {
        'K' => Ok(KB),
        'M' => Ok(MB),
        'G' => Ok(GB),
        'T' => Ok(TB),
        other => Err(ParamError::UnknownSizeSuffix(other)),
    })
}

/// Parse an age: plain integer seconds, or integer followed by `s`, `m`,
/// `h`, `d` or `w`.
///
/// # Errors
/// Returns an error for a malformed number, an unknown suffix or an age that
/// does not fit in a [`TimeDelta`].
pub fn parse_time(input: &str) -> ParamResult<TimeDelta> {
    let seconds = parse_with_suffix(input, |suffix| match suffix {
        's' => Ok(1),
        'm' => Ok(MINUTE),
        'h' => Ok(HOUR),
        'd' => Ok(DAY),
        'w' => Ok(WEEK),
        other => Err(ParamError::UnknownTimeSuffix(other)),
    })?;
    TimeDelta::try_seconds(seconds).ok_or_else(|| ParamError::Overflow(input.to_string()))
}

/// Whole string as an integer first; failing that, the last character is a
/// unit suffix and the rest is the integer.
fn parse_with_suffix<F>(input: &str, factor: F) -> ParamResult<i64>
where
    F: FnOnce(char) -> ParamResult<i64>,
{
    let whole = match input.parse::<i64>() {
        Ok(value) => return Ok(value),
        Err(source) => source,
    };

    let Some((split, suffix)) = input.char_indices().next_back() else {
        return Err(ParamError::Integer {
            input: input.to_string(),
            source: whole,
        });
    };
    let value = input[..split]
        .parse::<i64>()
        .map_err(|source| ParamError::Integer {
            input: input.to_string(),
            source,
        })?;
    let factor = factor(suffix)?;
    value
        .checked_mul(factor)
        .ok_or_else(|| ParamError::Overflow(input.to_string()))
}

/// Parse a depth limit; empty means unlimited, as does `-1`.
///
/// # Errors
/// Returns an error for a malformed number or a value below `-1`.
pub fn parse_depth(input: &str) -> ParamResult<MaxDepth> {
    if input.is_empty() {
        return Ok(MaxDepth::Unlimited);
    }
    let raw = input.parse::<i64>().map_err(|source| ParamError::Integer {
        input: input.to_string(),
        source,
    })?;
    MaxDepth::from_raw(raw).ok_or(ParamError::DepthOutOfRange(raw))
}

/// Parse a comma-separated type list. `all` anywhere in the list selects
/// every type; an empty string selects none.
///
/// # Errors
/// Returns an error naming the first token outside the type vocabulary.
pub fn parse_types(input: &str) -> ParamResult<EntryTypes> {
    if input.is_empty() {
        return Ok(EntryTypes::empty());
    }

    let tokens: Vec<&str> = input.split(',').map(str::trim).collect();
    if tokens.contains(&ALL_TYPES) {
        return Ok(EntryTypes::all());
    }

    tokens.into_iter().try_fold(EntryTypes::empty(), |acc, token| {
        EntryTypes::from_token(token)
            .map(|types| acc | types)
            .ok_or_else(|| ParamError::InvalidType(token.to_string()))
    })
}

/// Compile a name pattern; empty means "no pattern".
///
/// # Errors
/// Returns an error when the regular expression does not compile.
pub fn parse_pattern(input: &str) -> ParamResult<Option<NamePattern>> {
    if input.is_empty() {
        return Ok(None);
    }
    Ok(Some(NamePattern::new(input)?))
}

/// Parse an optional slot: empty means "no bound", which is not the same as zero.
///
/// # Errors
/// Propagates the error of `parse` for non-empty input.
pub fn parse_optional<T, F>(input: &str, parse: F) -> ParamResult<Option<T>>
where
    F: FnOnce(&str) -> ParamResult<T>,
{
    if input.is_empty() {
        Ok(None)
    } else {
        parse(input).map(Some)
    }
}
