use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use thiserror::Error;
use utoipa::ToSchema;

use crate::models::conversion_record::ANONYMOUS_USER;

/// Request payload for `POST /api/convert`.
///
/// Fields are kept as raw JSON so that a wrong type (a string score, a numeric
/// country) is reported as the matching [`InvalidInput`] rather than as a
/// generic body error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConvertRequest {
    #[schema(value_type = f64, example = 700)]
    pub score: Option<Value>,
    #[schema(value_type = String, example = "USA")]
    pub from_country: Option<Value>,
    #[schema(value_type = String, example = "UK")]
    pub to_country: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub user: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("Invalid score: must be a non-negative number")]
    Score,
    #[error("Invalid fromCountry: must be a string")]
    FromCountry,
    #[error("Invalid toCountry: must be a string")]
    ToCountry,
}

/// A conversion request that passed validation.
///
/// `score` keeps the number exactly as sent so it can be echoed back unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedConversion {
    pub score: Number,
    pub from_country: String,
    pub to_country: String,
    pub user: String,
}

impl ConvertRequest {
    /// Checks `score`, then `fromCountry`, then `toCountry`, reporting the
    /// first failure. A missing, empty or non-string `user` becomes
    /// `"Anonymous"`.
    pub fn validate(self) -> Result<ValidatedConversion, InvalidInput> {
        let score = match self.score {
            Some(Value::Number(score)) if score.as_f64().is_some_and(|v| v >= 0.0) => score,
            _ => return Err(InvalidInput::Score),
        };

        let from_country = non_empty_string(self.from_country).ok_or(InvalidInput::FromCountry)?;
        let to_country = non_empty_string(self.to_country).ok_or(InvalidInput::ToCountry)?;
        let user = non_empty_string(self.user).unwrap_or_else(|| ANONYMOUS_USER.to_string());

        Ok(ValidatedConversion {
            score,
            from_country,
            to_country,
            user,
        })
    }
}

fn non_empty_string(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    }
}
