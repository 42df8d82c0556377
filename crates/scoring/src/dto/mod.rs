pub mod conversion;
pub mod country;
