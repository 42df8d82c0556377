use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{RangeTable, ScoreRange};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CountryRange {
    pub country: String,
    pub min: f64,
    pub max: f64,
}

/// Response for `GET /api/countries`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CountriesResponse {
    pub countries: Vec<CountryRange>,
    pub default: ScoreRange,
}

impl From<&RangeTable> for CountriesResponse {
    fn from(table: &RangeTable) -> Self {
        let countries = table
            .countries()
            .into_iter()
            .map(|country| {
                let range = table.lookup(country);
                CountryRange {
                    country: country.to_string(),
                    min: range.min,
                    max: range.max,
                }
            })
            .collect();

        Self {
            countries,
            default: table.default_range(),
        }
    }
}
