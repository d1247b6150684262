// Validation errors for dataset records
use thiserror::Error;

/// A fetched record does not have the shape the aggregations need.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("record {index}: amount is missing")]
    MissingAmount { index: usize },

    #[error("record {index}: amount {value} is not a number")]
    NonNumericAmount { index: usize, value: String },

    #[error("record {index}: amount {value} must be a finite, non-negative number")]
    InvalidAmount { index: usize, value: f64 },

    #[error("record {index}: date is missing")]
    MissingDate { index: usize },

    #[error("record {index}: date {value} is not a calendar date")]
    InvalidDate { index: usize, value: String },
}
