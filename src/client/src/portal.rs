use reqwest::Method;

use crate::error::ApiError;
use crate::models::{Course, ExamResult, Registration};
use crate::session::ApiClient;

/// Self-service reads and mutations under `/student`. The backend resolves
/// "which student" from the session token; no explicit student id is ever
/// passed.
pub struct Portal<'a> {
    api: &'a ApiClient,
}

impl ApiClient {
    pub fn portal(&self) -> Portal<'_> {
        Portal { api: self }
    }
}

impl Portal<'_> {
    /// Courses the student can still enroll in.
    pub async fn available_courses(&self) -> Result<Vec<Course>, ApiError> {
        self.api
            .send(Method::GET, "/student/courses/available", Vec::new(), None)
            .await
    }

    pub async fn enrolled_courses(&self) -> Result<Vec<Course>, ApiError> {
        self.api
            .send(Method::GET, "/student/courses/enrolled", Vec::new(), None)
            .await
    }

    pub async fn my_registrations(&self) -> Result<Vec<Registration>, ApiError> {
        self.api
            .send(Method::GET, "/student/registrations", Vec::new(), None)
            .await
    }

    pub async fn my_results(&self) -> Result<Vec<ExamResult>, ApiError> {
        self.api
            .send(Method::GET, "/student/results", Vec::new(), None)
            .await
    }

    /// Capacity checks happen server-side; a full course surfaces as a
    /// plain HTTP error.
    pub async fn enroll(&self, course_id: i64) -> Result<Registration, ApiError> {
        self.api
            .send(
                Method::POST,
                &format!("/student/courses/{course_id}/enroll"),
                Vec::new(),
                None,
            )
            .await
    }

    pub async fn unenroll(&self, course_id: i64) -> Result<(), ApiError> {
        self.api
            .send(
                Method::POST,
                &format!("/student/courses/{course_id}/unenroll"),
                Vec::new(),
                None,
            )
            .await
    }
}
