use reqwest::Method;

use crate::error::ApiError;
use crate::http::to_body;
use crate::models::{ListParams, Registration, RegistrationStatus};
use crate::session::ApiClient;

/// Admin-facing CRUD over `/registrations`. The denormalized display
/// fields (student name, course code/title) come back filled in by the
/// server.
pub struct Registrations<'a> {
    api: &'a ApiClient,
}

impl ApiClient {
    pub fn registrations(&self) -> Registrations<'_> {
        Registrations { api: self }
    }
}

impl Registrations<'_> {
    pub async fn list(&self, params: &ListParams) -> Result<Vec<Registration>, ApiError> {
        self.api
            .send(Method::GET, "/registrations", params.to_query(), None)
            .await
    }

    pub async fn get(&self, id: i64) -> Result<Registration, ApiError> {
        self.api
            .send(
                Method::GET,
                &format!("/registrations/{id}"),
                Vec::new(),
                None,
            )
            .await
    }

    pub async fn by_student(&self, student_id: i64) -> Result<Vec<Registration>, ApiError> {
        self.api
            .send(
                Method::GET,
                &format!("/registrations/student/{student_id}"),
                Vec::new(),
                None,
            )
            .await
    }

    pub async fn by_course(&self, course_id: i64) -> Result<Vec<Registration>, ApiError> {
        self.api
            .send(
                Method::GET,
                &format!("/registrations/course/{course_id}"),
                Vec::new(),
                None,
            )
            .await
    }

    pub async fn by_status(
        &self,
        status: RegistrationStatus,
    ) -> Result<Vec<Registration>, ApiError> {
        self.api
            .send(
                Method::GET,
                &format!("/registrations/status/{status}"),
                Vec::new(),
                None,
            )
            .await
    }

    pub async fn create(&self, registration: &Registration) -> Result<Registration, ApiError> {
        let body = to_body("/registrations", registration)?;
        self.api
            .send(Method::POST, "/registrations", Vec::new(), Some(body))
            .await
    }

    pub async fn update(
        &self,
        id: i64,
        registration: &Registration,
    ) -> Result<Registration, ApiError> {
        let endpoint = format!("/registrations/{id}");
        let body = to_body(&endpoint, registration)?;
        self.api
            .send(Method::PUT, &endpoint, Vec::new(), Some(body))
            .await
    }

    pub async fn save(&self, registration: &Registration) -> Result<Registration, ApiError> {
        match registration.id {
            Some(id) => self.update(id, registration).await,
            None => self.create(registration).await,
        }
    }

    /// Status-only transition without resending the whole record.
    pub async fn update_status(
        &self,
        id: i64,
        status: RegistrationStatus,
    ) -> Result<Registration, ApiError> {
        self.api
            .send(
                Method::PUT,
                &format!("/registrations/{id}/status"),
                vec![("status", status.as_str().to_string())],
                None,
            )
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.api
            .send(
                Method::DELETE,
                &format!("/registrations/{id}"),
                Vec::new(),
                None,
            )
            .await
    }

    /// How many students are currently enrolled in a course.
    pub async fn enrolled_count(&self, course_id: i64) -> Result<i64, ApiError> {
        self.api
            .send(
                Method::GET,
                &format!("/registrations/course/{course_id}/count"),
                Vec::new(),
                None,
            )
            .await
    }
}
