pub mod conversion_record;
pub mod score_range;

pub use conversion_record::ConversionRecord;
pub use score_range::{RangeTable, ScoreRange};
