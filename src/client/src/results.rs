use reqwest::Method;

use crate::error::ApiError;
use crate::http::to_body;
use crate::models::{ExamResult, ListParams};
use crate::session::ApiClient;

/// Admin-facing CRUD over `/results`, plus the server-computed aggregates.
/// Grades and GPA points are derived by the server from the marks; this
/// client never recomputes them.
pub struct Results<'a> {
    api: &'a ApiClient,
}

impl ApiClient {
    pub fn results(&self) -> Results<'_> {
        Results { api: self }
    }
}

impl Results<'_> {
    pub async fn list(&self, params: &ListParams) -> Result<Vec<ExamResult>, ApiError> {
        self.api
            .send(Method::GET, "/results", params.to_query(), None)
            .await
    }

    pub async fn get(&self, id: i64) -> Result<ExamResult, ApiError> {
        self.api
            .send(Method::GET, &format!("/results/{id}"), Vec::new(), None)
            .await
    }

    pub async fn by_registration(&self, registration_id: i64) -> Result<ExamResult, ApiError> {
        self.api
            .send(
                Method::GET,
                &format!("/results/registration/{registration_id}"),
                Vec::new(),
                None,
            )
            .await
    }

    pub async fn by_student(&self, student_id: i64) -> Result<Vec<ExamResult>, ApiError> {
        self.api
            .send(
                Method::GET,
                &format!("/results/student/{student_id}"),
                Vec::new(),
                None,
            )
            .await
    }

    pub async fn by_course(&self, course_id: i64) -> Result<Vec<ExamResult>, ApiError> {
        self.api
            .send(
                Method::GET,
                &format!("/results/course/{course_id}"),
                Vec::new(),
                None,
            )
            .await
    }

    pub async fn create(&self, result: &ExamResult) -> Result<ExamResult, ApiError> {
        let body = to_body("/results", result)?;
        self.api
            .send(Method::POST, "/results", Vec::new(), Some(body))
            .await
    }

    pub async fn update(&self, id: i64, result: &ExamResult) -> Result<ExamResult, ApiError> {
        let endpoint = format!("/results/{id}");
        let body = to_body(&endpoint, result)?;
        self.api
            .send(Method::PUT, &endpoint, Vec::new(), Some(body))
            .await
    }

    pub async fn save(&self, result: &ExamResult) -> Result<ExamResult, ApiError> {
        match result.id {
            Some(id) => self.update(id, result).await,
            None => self.create(result).await,
        }
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.api
            .send(Method::DELETE, &format!("/results/{id}"), Vec::new(), None)
            .await
    }

    /// Server-computed grade-point average across a student's results.
    pub async fn student_gpa(&self, student_id: i64) -> Result<f64, ApiError> {
        self.api
            .send(
                Method::GET,
                &format!("/results/student/{student_id}/gpa"),
                Vec::new(),
                None,
            )
            .await
    }

    /// Server-computed average marks across a course's results.
    pub async fn course_average(&self, course_id: i64) -> Result<f64, ApiError> {
        self.api
            .send(
                Method::GET,
                &format!("/results/course/{course_id}/average"),
                Vec::new(),
                None,
            )
            .await
    }

    pub async fn search_by_marks(
        &self,
        min_marks: f64,
        max_marks: f64,
    ) -> Result<Vec<ExamResult>, ApiError> {
        self.api
            .send(
                Method::GET,
                "/results/search",
                vec![
                    ("minMarks", min_marks.to_string()),
                    ("maxMarks", max_marks.to_string()),
                ],
                None,
            )
            .await
    }
}
