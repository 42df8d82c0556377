use chrono::{DateTime, Utc};

use crate::dto::conversion::ValidatedConversion;
use crate::error::{Result, ScoringError};
use crate::models::{ConversionRecord, RangeTable};
use crate::repository::history::RecentHistory;

/// Maps `score`, read on `from_country`'s scale, to the same relative position
/// on `to_country`'s scale.
///
/// Scores outside the source range are extrapolated linearly, not clamped.
/// The result is rounded half up, so `2.5` becomes `3` and `-2.5` becomes `-2`.
/// A result too large for an `i64` is reported as [`ScoringError::OutOfRange`].
pub fn convert(table: &RangeTable, score: f64, from_country: &str, to_country: &str) -> Result<i64> {
    let from = table.lookup(from_country);
    let to = table.lookup(to_country);

    if !from.is_well_formed() {
        return Err(ScoringError::Configuration(format!(
            "source range for '{}' [{}, {}] must satisfy max > min",
            from_country, from.min, from.max
        )));
    }

    let normalized = (score - from.min) / from.span();
    let converted = normalized * to.span() + to.min;

    round_half_up(converted)
}

// 2^63; `i64::MAX as f64` rounds up to this value, so the upper bound is exclusive.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

fn round_half_up(value: f64) -> Result<i64> {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };

    if !(-I64_LIMIT..I64_LIMIT).contains(&rounded) {
        return Err(ScoringError::OutOfRange(value));
    }

    Ok(rounded as i64)
}

/// Converts a validated request, stores the resulting record in `history` and
/// returns it. Nothing is stored when the conversion fails.
pub fn record_conversion(
    table: &RangeTable,
    history: &RecentHistory,
    request: ValidatedConversion,
    timestamp: DateTime<Utc>,
) -> Result<ConversionRecord> {
    // Without serde_json's arbitrary_precision every number has an f64 value;
    // a NaN here would surface as OutOfRange rather than a bogus score.
    let score = request.score.as_f64().unwrap_or(f64::NAN);
    let converted_score = convert(table, score, &request.from_country, &request.to_country)?;

    let record = ConversionRecord {
        score: request.score,
        from_country: request.from_country,
        to_country: request.to_country,
        converted_score,
        user: request.user,
        timestamp,
    };

    history.append(record.clone());

    Ok(record)
}
