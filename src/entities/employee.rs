//! Employee entity and its request draft

use super::money;
use crate::core::entity::Entity;
use crate::core::error::{WorkforceError, WorkforceResult};
use crate::core::validation::validators::{not_blank, not_in_future, salary_amount};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A person on the payroll
///
/// `department_id` is the many-to-one reference; project memberships live in
/// the assignment set and are looked up on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub hire_date: NaiveDate,
    pub salary: Decimal,
    pub department_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Build a new employee with a fresh id; salary is normalized to cents
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        hire_date: NaiveDate,
        salary: Decimal,
        department_id: Option<Uuid>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            hire_date,
            salary: money(salary),
            department_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Overwrite the mutable fields from a draft.
    ///
    /// The department is only replaced when the draft names one.
    pub fn apply(&mut self, draft: &EmployeeDraft, hire_date: NaiveDate, salary: Decimal) {
        self.first_name = draft.first_name.clone();
        self.last_name = draft.last_name.clone();
        self.email = draft.email.clone();
        self.hire_date = hire_date;
        self.salary = money(salary);
        if let Some(department_id) = draft.department_id {
            self.department_id = Some(department_id);
        }
        self.touch();
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Entity for Employee {
    fn resource_name() -> &'static str {
        "employees"
    }

    fn resource_name_singular() -> &'static str {
        "employee"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// Payload for creating or replacing an employee
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EmployeeDraft {
    #[validate(
        length(min = 2, max = 100, message = "must be between 2 and 100 characters"),
        custom(function = "not_blank")
    )]
    pub first_name: String,

    #[validate(
        length(min = 2, max = 100, message = "must be between 2 and 100 characters"),
        custom(function = "not_blank")
    )]
    pub last_name: String,

    #[validate(email(message = "must be a valid email address"))]
    pub email: String,

    #[validate(required(message = "is required"), custom(function = "not_in_future"))]
    pub hire_date: Option<NaiveDate>,

    #[validate(required(message = "is required"), custom(function = "salary_amount"))]
    pub salary: Option<Decimal>,

    #[serde(default)]
    pub department_id: Option<Uuid>,
}

impl EmployeeDraft {
    /// Hire date and salary, both of which must be present
    pub fn hire_date_and_salary(&self) -> WorkforceResult<(NaiveDate, Decimal)> {
        let hire_date = self
            .hire_date
            .ok_or_else(|| WorkforceError::invalid_argument("hire_date: is required"))?;
        let salary = self
            .salary
            .ok_or_else(|| WorkforceError::invalid_argument("salary: is required"))?;
        Ok((hire_date, salary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Local};

    fn draft() -> EmployeeDraft {
        EmployeeDraft {
            first_name: "Juan".to_string(),
            last_name: "Perez".to_string(),
            email: "juan.perez@example.com".to_string(),
            hire_date: Some(Local::now().date_naive() - Duration::days(365)),
            salary: Some(Decimal::new(5_000_000, 2)),
            department_id: None,
        }
    }

    #[test]
    fn test_new_employee_rounds_salary() {
        let employee = Employee::new(
            "Juan",
            "Perez",
            "juan@example.com",
            NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
            Decimal::new(1_234_567, 3),
            None,
        );
        assert_eq!(employee.salary.to_string(), "1234.57");
        assert_eq!(employee.full_name(), "Juan Perez");
        assert_eq!(employee.created_at, employee.updated_at);
    }

    #[test]
    fn test_valid_draft() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn test_draft_rejects_short_and_blank_names() {
        let mut d = draft();
        d.first_name = "J".to_string();
        d.last_name = "   ".to_string();
        let errors = d.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("first_name"));
        assert!(fields.contains_key("last_name"));
    }

    #[test]
    fn test_draft_rejects_missing_salary_and_future_hire_date() {
        let mut d = draft();
        d.salary = None;
        d.hire_date = Some(Local::now().date_naive() + Duration::days(2));
        let errors = d.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("salary"));
        assert!(fields.contains_key("hire_date"));
    }

    #[test]
    fn test_draft_rejects_zero_salary_and_bad_email() {
        let mut d = draft();
        d.salary = Some(Decimal::ZERO);
        d.email = "not-an-email".to_string();
        let errors = d.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("salary"));
        assert!(fields.contains_key("email"));
    }

    #[test]
    fn test_apply_keeps_department_when_draft_has_none() {
        let department = Uuid::new_v4();
        let mut employee = Employee::new(
            "Ana",
            "Lopez",
            "ana@example.com",
            NaiveDate::from_ymd_opt(2022, 1, 10).unwrap(),
            Decimal::new(4_000_000, 2),
            Some(department),
        );
        let d = draft();
        let (hire_date, salary) = d.hire_date_and_salary().unwrap();
        employee.apply(&d, hire_date, salary);
        assert_eq!(employee.first_name, "Juan");
        assert_eq!(employee.department_id, Some(department));
    }

    #[test]
    fn test_salary_serializes_as_string_with_cents() {
        let employee = Employee::new(
            "Juan",
            "Perez",
            "juan@example.com",
            NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
            Decimal::new(50_000, 0),
            None,
        );
        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json["salary"], "50000.00");
        assert_eq!(json["hire_date"], "2023-05-01");
    }
}
