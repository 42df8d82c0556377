use chrono::Utc;
use scoring::{
    ConversionRecord,
    dto::conversion::ValidatedConversion,
    error::Result,
    services::conversion::record_conversion,
};

use crate::state::AppState;

/// Convert a validated request and remember it in the recent history
pub fn convert(state: &AppState, request: ValidatedConversion) -> Result<ConversionRecord> {
    let record = record_conversion(&state.ranges, &state.history, request, Utc::now())?;

    tracing::info!(
        from = %record.from_country,
        to = %record.to_country,
        score = %record.score,
        converted = record.converted_score,
        user = %record.user,
        "Score converted"
    );

    Ok(record)
}

/// Most recent conversions, newest first
pub fn list_recent(state: &AppState) -> Vec<ConversionRecord> {
    state.history.snapshot()
}
