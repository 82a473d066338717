/// Error type formatting and conversions.
pub mod error;
