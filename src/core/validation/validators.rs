//! Reusable field validators
//!
//! Custom functions plugged into `#[validate(custom(function = "..."))]` on
//! the request drafts.

use chrono::{Local, NaiveDate};
use crate::entities::{max_salary, min_salary, money};
use rust_decimal::Decimal;
use validator::ValidationError;

fn rejection(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

/// Validator: string must contain something other than whitespace
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(rejection("not_blank", "must not be blank"))
    } else {
        Ok(())
    }
}

/// Validator: date must not be after the current local date
pub fn not_in_future(value: &NaiveDate) -> Result<(), ValidationError> {
    if *value > Local::now().date_naive() {
        Err(rejection("not_in_future", "must not be in the future"))
    } else {
        Ok(())
    }
}

/// Validator: salary, once rounded to cents, must lie within
/// [`min_salary`, `max_salary`]
pub fn salary_amount(value: &Decimal) -> Result<(), ValidationError> {
    let amount = money(*value);
    if amount < min_salary() {
        Err(rejection("salary_amount", "must be at least 0.01"))
    } else if amount > max_salary() {
        Err(rejection("salary_amount", "must be at most 99999999.99"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    // === not_blank() ===

    #[test]
    fn test_not_blank_rejects_empty() {
        assert!(not_blank("").is_err());
    }

    #[test]
    fn test_not_blank_rejects_whitespace() {
        let err = not_blank("   \t").unwrap_err();
        assert_eq!(err.code, "not_blank");
        assert_eq!(err.message.as_deref(), Some("must not be blank"));
    }

    #[test]
    fn test_not_blank_accepts_text() {
        assert!(not_blank(" IT ").is_ok());
    }

    // === not_in_future() ===

    #[test]
    fn test_not_in_future_accepts_today() {
        assert!(not_in_future(&Local::now().date_naive()).is_ok());
    }

    #[test]
    fn test_not_in_future_accepts_past() {
        let last_year = Local::now().date_naive() - Duration::days(365);
        assert!(not_in_future(&last_year).is_ok());
    }

    #[test]
    fn test_not_in_future_rejects_tomorrow() {
        let tomorrow = Local::now().date_naive() + Duration::days(1);
        assert!(not_in_future(&tomorrow).is_err());
    }

    // === salary_amount() ===

    #[test]
    fn test_salary_amount_rejects_zero_and_negative() {
        assert!(salary_amount(&Decimal::ZERO).is_err());
        assert!(salary_amount(&Decimal::new(-100, 2)).is_err());
    }

    #[test]
    fn test_salary_amount_rejects_amounts_rounding_to_zero() {
        let err = salary_amount(&Decimal::new(4, 3)).unwrap_err();
        assert_eq!(err.message.as_deref(), Some("must be at least 0.01"));
    }

    #[test]
    fn test_salary_amount_accepts_one_cent_and_half_cent() {
        assert!(salary_amount(&Decimal::new(1, 2)).is_ok());
        assert!(salary_amount(&Decimal::new(5, 3)).is_ok());
    }

    #[test]
    fn test_salary_amount_caps_at_column_precision() {
        assert!(salary_amount(&Decimal::new(9_999_999_999, 2)).is_ok());
        let err = salary_amount(&Decimal::new(100_000_000, 0)).unwrap_err();
        assert_eq!(err.message.as_deref(), Some("must be at most 99999999.99"));
        // Rounds up past the cap
        assert!(salary_amount(&Decimal::new(99_999_999_995, 3)).is_err());
    }
}
