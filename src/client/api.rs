//! Student Records API Client
//!
//! Async functions for every backend endpoint, one method per operation.
//! The session is a cookie, so the underlying `reqwest::Client` is built
//! with a cookie store and must live for the whole page lifecycle.
//!
//! Status interpretation: fetch endpoints map 401/403 to typed errors;
//! mutation endpoints parse the `{success, error}` envelope whatever the
//! HTTP status, since the backend puts its message in the body either way.

use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::client::config::Config;
use crate::shared::{
    ApiError, ApiOutcome, AuthStatus, Credentials, Registration, Student, StudentDraft,
    StudentUpdate,
};

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the student-records backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: Config,
    client: Client,
}

impl ApiClient {
    pub fn new(config: Config) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .cookie_store(true)
            .build()?;
        Ok(Self { config, client })
    }

    /// Query the session status.
    ///
    /// The backend answers 401 with an `{"authenticated": false}` body, so
    /// the body is parsed regardless of the status code.
    pub async fn check_auth(&self) -> Result<AuthStatus, ApiError> {
        let url = self.config.api_url("/auth/check");
        let response = self.client.get(&url).send().await?;
        debug!("auth check: {}", response.status());
        Ok(response.json().await?)
    }

    pub async fn register(&self, form: &Registration) -> Result<ApiOutcome, ApiError> {
        self.post_outcome("/auth/register", form).await
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<ApiOutcome, ApiError> {
        self.post_outcome("/auth/login", credentials).await
    }

    pub async fn logout(&self) -> Result<ApiOutcome, ApiError> {
        let url = self.config.api_url("/auth/logout");
        let response = self.client.post(&url).send().await?;
        Ok(response.json().await?)
    }

    /// Fetch all student records
    pub async fn list_students(&self) -> Result<Vec<Student>, ApiError> {
        let url = self.config.api_url("/students");
        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        let students: Vec<Student> = response.json().await?;
        debug!("loaded {} students", students.len());
        Ok(students)
    }

    /// Fetch a single student by id
    pub async fn student(&self, id: i64) -> Result<Student, ApiError> {
        let url = self.config.api_url(&format!("/students/{id}"));
        let response = self.client.get(&url).send().await?;
        match response.status() {
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
            StatusCode::FORBIDDEN => Err(ApiError::Forbidden),
            _ => Ok(response.json().await?),
        }
    }

    pub async fn create_student(&self, draft: &StudentDraft) -> Result<ApiOutcome, ApiError> {
        self.post_outcome("/students", draft).await
    }

    pub async fn update_student(&self, student: &StudentUpdate) -> Result<ApiOutcome, ApiError> {
        let url = self.config.api_url("/students");
        let response = self.client.put(&url).json(student).send().await?;
        debug!("update student {}: {}", student.id, response.status());
        Ok(response.json().await?)
    }

    pub async fn delete_student(&self, id: i64) -> Result<ApiOutcome, ApiError> {
        let url = self.config.api_url(&format!("/students/{id}"));
        let response = self.client.delete(&url).send().await?;
        debug!("delete student {}: {}", id, response.status());
        Ok(response.json().await?)
    }

    async fn post_outcome<T: serde::Serialize>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<ApiOutcome, ApiError> {
        let url = self.config.api_url(endpoint);
        let response = self.client.post(&url).json(body).send().await?;
        debug!("POST {}: {}", endpoint, response.status());
        Ok(response.json().await?)
    }
}
