use thiserror::Error;

use crate::booking::fields::FormField;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BookingError {
    #[error("Please fill in all required fields.")]
    MissingFields(Vec<FormField>),

    #[error("Please choose a valid date (got {0:?}).")]
    InvalidDate(String),

    #[error("No email address is configured for bookings.")]
    NoRecipients,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("site config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("site config rejected: {0}")]
    Invalid(String),
}
