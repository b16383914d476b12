use reqwest::Method;

use crate::error::ApiError;
use crate::http::to_body;
use crate::models::{ListParams, Student};
use crate::session::ApiClient;

/// Admin-facing CRUD over `/students`.
pub struct Students<'a> {
    api: &'a ApiClient,
}

impl ApiClient {
    pub fn students(&self) -> Students<'_> {
        Students { api: self }
    }
}

impl Students<'_> {
    pub async fn list(&self, params: &ListParams) -> Result<Vec<Student>, ApiError> {
        self.api
            .send(Method::GET, "/students", params.to_query(), None)
            .await
    }

    pub async fn get(&self, id: i64) -> Result<Student, ApiError> {
        self.api
            .send(Method::GET, &format!("/students/{id}"), Vec::new(), None)
            .await
    }

    /// Looks a student up by the external student code rather than the
    /// numeric id.
    pub async fn by_code(&self, code: &str) -> Result<Student, ApiError> {
        self.api
            .send(
                Method::GET,
                &format!("/students/studentId/{code}"),
                Vec::new(),
                None,
            )
            .await
    }

    pub async fn create(&self, student: &Student) -> Result<Student, ApiError> {
        let body = to_body("/students", student)?;
        self.api
            .send(Method::POST, "/students", Vec::new(), Some(body))
            .await
    }

    /// Full replace.
    pub async fn update(&self, id: i64, student: &Student) -> Result<Student, ApiError> {
        let endpoint = format!("/students/{id}");
        let body = to_body(&endpoint, student)?;
        self.api
            .send(Method::PUT, &endpoint, Vec::new(), Some(body))
            .await
    }

    /// Create or update depending on whether the record has an id yet.
    pub async fn save(&self, student: &Student) -> Result<Student, ApiError> {
        match student.id {
            Some(id) => self.update(id, student).await,
            None => self.create(student).await,
        }
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.api
            .send(Method::DELETE, &format!("/students/{id}"), Vec::new(), None)
            .await
    }

    /// Server-side search; all criteria optional and combined.
    pub async fn search(
        &self,
        name: Option<&str>,
        department: Option<&str>,
        enrollment_year: Option<i32>,
    ) -> Result<Vec<Student>, ApiError> {
        let mut query = Vec::new();
        if let Some(name) = name {
            query.push(("name", name.to_string()));
        }
        if let Some(department) = department {
            query.push(("department", department.to_string()));
        }
        if let Some(year) = enrollment_year {
            query.push(("enrollmentYear", year.to_string()));
        }
        self.api
            .send(Method::GET, "/students/search", query, None)
            .await
    }

    pub async fn departments(&self) -> Result<Vec<String>, ApiError> {
        self.api
            .send(Method::GET, "/students/departments", Vec::new(), None)
            .await
    }

    pub async fn enrollment_years(&self) -> Result<Vec<i32>, ApiError> {
        self.api
            .send(Method::GET, "/students/enrollment-years", Vec::new(), None)
            .await
    }
}
