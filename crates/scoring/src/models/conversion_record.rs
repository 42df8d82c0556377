use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Number;
use utoipa::ToSchema;

pub const ANONYMOUS_USER: &str = "Anonymous";

/// One completed conversion, as returned by `POST /api/convert` and listed by
/// `GET /api/recent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRecord {
    /// The submitted score, echoed as sent (`700` stays `700`).
    #[schema(value_type = f64)]
    pub score: Number,
    pub from_country: String,
    pub to_country: String,
    pub converted_score: i64,
    pub user: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: DateTime<Utc>,
}

// ISO-8601 in UTC with millisecond precision, e.g. `2024-05-01T12:00:00.123Z`.
fn serialize_timestamp<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_serializes_camel_case_with_millisecond_timestamp() {
        let record = ConversionRecord {
            score: Number::from(700),
            from_country: "USA".to_string(),
            to_country: "UK".to_string(),
            converted_score: 727,
            user: ANONYMOUS_USER.to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "score": 700,
                "fromCountry": "USA",
                "toCountry": "UK",
                "convertedScore": 727,
                "user": "Anonymous",
                "timestamp": "2024-05-01T12:00:00.000Z"
            })
        );
    }

    #[test]
    fn test_timestamp_parses_back() {
        let json = r#"{"score":650,"fromCountry":"Germany","toCountry":"Japan","convertedScore":620,"user":"TestUser2","timestamp":"2024-05-01T12:00:00.250Z"}"#;
        let record: ConversionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.converted_score, 620);
        assert_eq!(record.score, Number::from(650));
        assert_eq!(record.timestamp.timestamp_subsec_millis(), 250);
    }
}
