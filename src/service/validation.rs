//! Field rules for inbound payloads beyond what deserialization already enforces.
//! Checked before any storage access.

use crate::error::AppError;

/// Implemented by request models that carry rules of their own; handlers call it right after extraction.
pub trait Validate {
    fn validate(&self) -> Result<(), AppError>;
}

pub struct RequestValidator;

impl RequestValidator {
    pub fn positive(field: &str, value: i64) -> Result<(), AppError> {
        if value <= 0 {
            return Err(AppError::Validation(format!("{} must be greater than 0", field)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_must_be_positive() {
        assert!(RequestValidator::positive("quantity", 0).is_err());
        assert!(RequestValidator::positive("quantity", -3).is_err());
        assert!(RequestValidator::positive("quantity", 1).is_ok());
    }

    #[test]
    fn validation_message_names_the_field() {
        let err = RequestValidator::positive("quantity", 0).unwrap_err();
        assert_eq!(err.to_string(), "validation: quantity must be greater than 0");
    }
}
