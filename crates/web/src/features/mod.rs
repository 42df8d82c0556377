pub mod conversions;
pub mod countries;
