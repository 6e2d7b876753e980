//! # HTTP client for the StaffDesk backend
//!
//! [`ApiClient`] wraps a [`reqwest::Client`] (fetch-backed on WASM) and
//! exposes one method per backend endpoint: the credential exchange, the
//! current-user lookup, and the employees / departments / leave-requests /
//! users resources. The client carries a [`session::TokenStore`] clone and
//! attaches the persisted bearer token to every request that has one. This is
//! the single place where storage meets the wire.
//!
//! The client also implements [`session::AuthApi`], which is how the session
//! store reaches the two endpoints it cares about without depending on this
//! crate.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::Serialize;
use session::{AuthApi, AuthError, TokenStore, UserInfo};

pub mod config;
mod error;
pub mod models;

pub use config::ApiConfig;
pub use error::ApiError;
pub use session::UserRole;

use models::{
    Department, DepartmentCreate, DepartmentUpdate, Employee, EmployeeCreate, EmployeeUpdate,
    LeaveAssign, LeaveRequest, LeaveRequestCreate, LeaveStatus, Message, Token, UpdatePassword,
    UserCreate, UserUpdateMe, UsersPage,
};

/// REST client bound to a base URL and the platform token store.
#[derive(Clone)]
pub struct ApiClient<T: TokenStore> {
    base_url: String,
    http: reqwest::Client,
    tokens: T,
}

impl<T: TokenStore> ApiClient<T> {
    pub fn new(config: ApiConfig, tokens: T) -> Self {
        Self {
            base_url: config.base_url,
            http: reqwest::Client::new(),
            tokens,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Attach the persisted bearer token, when present.
    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.tokens.get() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn request<R: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<R, ApiError> {
        let response = self.authorized(builder).send().await?;
        let response = error::check(response).await?;
        Ok(response.json().await?)
    }

    /// Like [`Self::request`] for endpoints whose response body we ignore.
    async fn discard(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        let response = self.authorized(builder).send().await?;
        error::check(response).await?;
        Ok(())
    }

    async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request(self.http.get(self.url(path))).await
    }

    async fn post_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        self.request(self.http.post(self.url(path)).json(body)).await
    }

    async fn patch_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        self.request(self.http.patch(self.url(path)).json(body)).await
    }

    // --- auth ---

    /// Exchange form-encoded credentials for an access token. Deliberately
    /// unauthenticated: this is the one call made without a bearer header.
    pub async fn login_access_token(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Token, ApiError> {
        let response = self
            .http
            .post(self.url("/login/access-token"))
            .form(&[("username", username), ("password", password)])
            .send()
            .await?;
        let response = error::check(response).await?;
        Ok(response.json().await?)
    }

    // --- users ---

    pub async fn update_me(&self, update: &UserUpdateMe) -> Result<UserInfo, ApiError> {
        self.patch_json("/users/me", update).await
    }

    pub async fn update_my_password(&self, update: &UpdatePassword) -> Result<Message, ApiError> {
        self.patch_json("/users/me/password", update).await
    }

    pub async fn list_users(&self, skip: u32, limit: u32) -> Result<UsersPage, ApiError> {
        let builder = self
            .http
            .get(self.url("/users/"))
            .query(&[("skip", skip), ("limit", limit)]);
        self.request(builder).await
    }

    pub async fn create_user(&self, user: &UserCreate) -> Result<UserInfo, ApiError> {
        self.post_json("/users/", user).await
    }

    // --- employees ---

    pub async fn list_employees(
        &self,
        department_id: Option<&str>,
        position: Option<&str>,
    ) -> Result<Vec<Employee>, ApiError> {
        let mut builder = self.http.get(self.url("/employees"));
        if let Some(department_id) = department_id {
            builder = builder.query(&[("department_id", department_id)]);
        }
        if let Some(position) = position {
            builder = builder.query(&[("position", position)]);
        }
        self.request(builder).await
    }

    /// The employee record backing the current user, if one exists.
    pub async fn my_employee(&self) -> Result<Employee, ApiError> {
        self.get("/employees/me").await
    }

    pub async fn create_employee(&self, employee: &EmployeeCreate) -> Result<Employee, ApiError> {
        self.post_json("/employees", employee).await
    }

    pub async fn update_employee(
        &self,
        id: &str,
        update: &EmployeeUpdate,
    ) -> Result<Employee, ApiError> {
        self.patch_json(&format!("/employees/{id}"), update).await
    }

    /// Terminate (deactivate) an employee.
    pub async fn terminate_employee(&self, id: &str) -> Result<(), ApiError> {
        self.discard(self.http.delete(self.url(&format!("/employees/{id}"))))
            .await
    }

    // --- departments ---

    pub async fn list_departments(&self) -> Result<Vec<Department>, ApiError> {
        self.get("/departments").await
    }

    pub async fn get_department(&self, id: &str) -> Result<Department, ApiError> {
        self.get(&format!("/departments/{id}")).await
    }

    pub async fn create_department(
        &self,
        department: &DepartmentCreate,
    ) -> Result<Department, ApiError> {
        self.post_json("/departments", department).await
    }

    pub async fn update_department(
        &self,
        id: &str,
        update: &DepartmentUpdate,
    ) -> Result<Department, ApiError> {
        self.patch_json(&format!("/departments/{id}"), update).await
    }

    pub async fn delete_department(&self, id: &str) -> Result<(), ApiError> {
        self.discard(self.http.delete(self.url(&format!("/departments/{id}"))))
            .await
    }

    // --- leave requests ---

    pub async fn list_leave_requests(
        &self,
        status: Option<LeaveStatus>,
    ) -> Result<Vec<LeaveRequest>, ApiError> {
        let mut builder = self.http.get(self.url("/leaverequests"));
        if let Some(status) = status {
            builder = builder.query(&[("status", status.as_str())]);
        }
        self.request(builder).await
    }

    /// File a leave request for the current user's employee record.
    pub async fn create_leave_request(
        &self,
        request: &LeaveRequestCreate,
    ) -> Result<LeaveRequest, ApiError> {
        self.post_json("/leaverequests", request).await
    }

    /// Approve or reject a pending request.
    pub async fn set_leave_status(
        &self,
        id: &str,
        status: LeaveStatus,
    ) -> Result<LeaveRequest, ApiError> {
        let builder = self
            .http
            .patch(self.url(&format!("/leaverequests/{id}")))
            .query(&[("status", status.as_str())]);
        self.request(builder).await
    }

    /// Assign leave to an employee directly (manager action).
    pub async fn assign_leave(&self, assignment: &LeaveAssign) -> Result<LeaveRequest, ApiError> {
        self.post_json("/leaverequests/assign", assignment).await
    }

    pub async fn delete_leave_request(&self, id: &str) -> Result<(), ApiError> {
        self.discard(self.http.delete(self.url(&format!("/leaverequests/{id}"))))
            .await
    }
}

impl<T: TokenStore> AuthApi for ApiClient<T> {
    async fn current_user(&self) -> Result<UserInfo, AuthError> {
        Ok(self.get::<UserInfo>("/users/me").await?)
    }

    async fn exchange_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<String, AuthError> {
        let token = self.login_access_token(username, password).await?;
        Ok(token.access_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use session::MemoryTokenStore;

    #[test]
    fn base_url_joining_tolerates_trailing_slash() {
        let client = ApiClient::new(
            ApiConfig::new("http://localhost:8000/api/v1/"),
            MemoryTokenStore::new(),
        );
        assert_eq!(
            client.url("/users/me"),
            "http://localhost:8000/api/v1/users/me"
        );
    }
}
