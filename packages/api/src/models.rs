//! # Wire models for the HR backend
//!
//! Request and response bodies for the REST endpoints in [`crate::ApiClient`].
//! Everything here is `Serialize + Deserialize + PartialEq` plain data; ids
//! are strings so the types work unchanged in WASM. The user projection
//! ([`session::UserInfo`]) lives in the `session` crate and is re-exported
//! from the crate root.
//!
//! | Struct | Endpoint family |
//! |--------|-----------------|
//! | [`Token`] | credential exchange |
//! | [`Employee`], [`EmployeeCreate`], [`EmployeeUpdate`] | `/employees` |
//! | [`Department`], [`DepartmentCreate`], [`DepartmentUpdate`] | `/departments` |
//! | [`LeaveRequest`], [`LeaveRequestCreate`], [`LeaveAssign`] | `/leaverequests` |
//! | [`UserCreate`], [`UserUpdateMe`], [`UpdatePassword`], [`UsersPage`] | `/users` |

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use session::{UserInfo, UserRole};

/// Access token returned by the credential exchange.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Token {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Generic `{"message": ...}` acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub message: String,
}

/// An employee record within a department.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    pub id: String,
    pub user_id: String,
    pub department_id: String,
    pub position: String,
    pub hire_date: NaiveDate,
    pub phone: Option<String>,
    pub salary: Option<f64>,
    pub is_active: bool,
    /// Display name the list endpoint denormalizes onto each row.
    #[serde(default)]
    pub user_name: Option<String>,
}

impl Employee {
    /// Name to show in tables, falling back to the user id.
    pub fn display_name(&self) -> &str {
        self.user_name.as_deref().unwrap_or(&self.user_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmployeeCreate {
    pub user_id: String,
    pub department_id: String,
    pub position: String,
    pub hire_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
}

/// Partial employee update; only set fields are sent.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct EmployeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Department {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub manager_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DepartmentCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Defaults to the calling manager on the backend when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct DepartmentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    Vacation,
    SickLeave,
}

impl LeaveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::Vacation => "vacation",
            LeaveType::SickLeave => "sick_leave",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeaveType::Vacation => "Vacation",
            LeaveType::SickLeave => "Sick leave",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
        }
    }
}

/// A vacation or sick-leave request filed by (or assigned to) an employee.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaveRequest {
    pub id: String,
    pub employee_id: String,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: LeaveStatus,
    /// Naive because the backend writes timestamps without an offset.
    pub created_at: NaiveDateTime,
    pub approved_by_manager_id: Option<String>,
}

/// Body for an employee filing their own request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaveRequestCreate {
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Body for a manager assigning leave to an employee.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaveAssign {
    pub employee_id: String,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserCreate {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub role: UserRole,
    /// Required when a manager (not an admin) creates the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<String>,
}

/// Profile fields the current user may change about themselves.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct UserUpdateMe {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UpdatePassword {
    pub current_password: String,
    pub new_password: String,
}

/// One page of the user listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UsersPage {
    pub data: Vec<UserInfo>,
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leave_enums_use_snake_case_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&LeaveType::SickLeave).unwrap(),
            "\"sick_leave\""
        );
        assert_eq!(
            serde_json::from_str::<LeaveStatus>("\"approved\"").unwrap(),
            LeaveStatus::Approved
        );
    }

    #[test]
    fn employee_row_tolerates_missing_user_name() {
        let employee: Employee = serde_json::from_str(
            r#"{
                "id": "e-1",
                "user_id": "u-1",
                "department_id": "d-1",
                "position": "Engineer",
                "hire_date": "2024-03-01",
                "phone": null,
                "salary": null,
                "is_active": true
            }"#,
        )
        .unwrap();
        assert!(employee.user_name.is_none());
        assert_eq!(employee.display_name(), "u-1");
    }

    #[test]
    fn token_defaults_to_bearer() {
        let token: Token = serde_json::from_str(r#"{"access_token": "abc"}"#).unwrap();
        assert_eq!(token.token_type, "bearer");
    }

    #[test]
    fn partial_updates_omit_unset_fields() {
        let update = EmployeeUpdate {
            position: Some("Lead".to_string()),
            ..EmployeeUpdate::default()
        };
        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"position":"Lead"}"#
        );
    }

    #[test]
    fn leave_request_parses_naive_created_at() {
        let request: LeaveRequest = serde_json::from_str(
            r#"{
                "id": "l-1",
                "employee_id": "e-1",
                "leave_type": "vacation",
                "start_date": "2025-06-01",
                "end_date": "2025-06-14",
                "status": "pending",
                "created_at": "2025-05-20T09:30:00",
                "approved_by_manager_id": null
            }"#,
        )
        .unwrap();
        assert_eq!(request.leave_type, LeaveType::Vacation);
        assert_eq!(request.status, LeaveStatus::Pending);
    }
}
