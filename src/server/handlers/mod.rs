//! HTTP handlers, one module per resource
//!
//! Handlers only translate between HTTP and the services: every rule lives
//! in the service layer.

pub mod departments;
pub mod employees;
pub mod projects;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

/// `?min=&max=`
#[derive(Debug, Deserialize)]
pub struct SalaryRange {
    pub min: Decimal,
    pub max: Decimal,
}

/// `?term=`
#[derive(Debug, Deserialize)]
pub struct SearchTerm {
    pub term: String,
}

/// `?date=`
#[derive(Debug, Deserialize)]
pub struct DateParam {
    pub date: NaiveDate,
}

/// `?amount=`
#[derive(Debug, Deserialize)]
pub struct AmountParam {
    pub amount: Decimal,
}

/// `?from=&to=`
#[derive(Debug, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// `?count=`
#[derive(Debug, Deserialize)]
pub struct CountParam {
    pub count: u64,
}
