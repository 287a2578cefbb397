//! Domain entities and their request drafts

pub mod assignment;
pub mod department;
pub mod employee;
pub mod project;

pub use assignment::Assignment;
pub use department::{Department, DepartmentDraft};
pub use employee::{Employee, EmployeeDraft};
pub use project::{Project, ProjectDraft};

use rust_decimal::{Decimal, RoundingStrategy};

/// Normalize a monetary amount to exactly two fractional digits
pub fn money(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Smallest salary that survives rounding to cents
pub fn min_salary() -> Decimal {
    Decimal::new(1, 2)
}

/// Largest salary a `NUMERIC(10, 2)` column holds
pub fn max_salary() -> Decimal {
    Decimal::new(9_999_999_999, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_pads_and_rounds() {
        assert_eq!(money(Decimal::new(50_000, 0)).to_string(), "50000.00");
        assert_eq!(money(Decimal::new(12_345, 3)).to_string(), "12.35");
        assert_eq!(money(Decimal::new(47_500, 0)).to_string(), "47500.00");
    }

    #[test]
    fn test_salary_bounds() {
        assert_eq!(min_salary().to_string(), "0.01");
        assert_eq!(max_salary().to_string(), "99999999.99");
    }
}
