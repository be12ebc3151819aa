//! Employee records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i32,
    pub employee_code: String,
    pub full_name: String,
    pub department: Option<String>,
    pub role: String,
    pub email: String,
    pub start_date: NaiveDate,
    pub is_active: bool,
}
