use reqwest::Method;

use crate::error::ApiError;
use crate::http::to_body;
use crate::models::{Course, ListParams};
use crate::session::ApiClient;

/// Admin-facing CRUD over `/courses`. Enrollment counts on the returned
/// records are server aggregates and are never sent back.
pub struct Courses<'a> {
    api: &'a ApiClient,
}

impl ApiClient {
    pub fn courses(&self) -> Courses<'_> {
        Courses { api: self }
    }
}

impl Courses<'_> {
    pub async fn list(&self, params: &ListParams) -> Result<Vec<Course>, ApiError> {
        self.api
            .send(Method::GET, "/courses", params.to_query(), None)
            .await
    }

    pub async fn get(&self, id: i64) -> Result<Course, ApiError> {
        self.api
            .send(Method::GET, &format!("/courses/{id}"), Vec::new(), None)
            .await
    }

    pub async fn by_code(&self, code: &str) -> Result<Course, ApiError> {
        self.api
            .send(Method::GET, &format!("/courses/code/{code}"), Vec::new(), None)
            .await
    }

    pub async fn create(&self, course: &Course) -> Result<Course, ApiError> {
        let body = to_body("/courses", course)?;
        self.api
            .send(Method::POST, "/courses", Vec::new(), Some(body))
            .await
    }

    pub async fn update(&self, id: i64, course: &Course) -> Result<Course, ApiError> {
        let endpoint = format!("/courses/{id}");
        let body = to_body(&endpoint, course)?;
        self.api
            .send(Method::PUT, &endpoint, Vec::new(), Some(body))
            .await
    }

    pub async fn save(&self, course: &Course) -> Result<Course, ApiError> {
        match course.id {
            Some(id) => self.update(id, course).await,
            None => self.create(course).await,
        }
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.api
            .send(Method::DELETE, &format!("/courses/{id}"), Vec::new(), None)
            .await
    }

    pub async fn search(
        &self,
        title: Option<&str>,
        department: Option<&str>,
        min_credits: Option<i32>,
        max_credits: Option<i32>,
    ) -> Result<Vec<Course>, ApiError> {
        let mut query = Vec::new();
        if let Some(title) = title {
            query.push(("title", title.to_string()));
        }
        if let Some(department) = department {
            query.push(("department", department.to_string()));
        }
        if let Some(min) = min_credits {
            query.push(("minCredits", min.to_string()));
        }
        if let Some(max) = max_credits {
            query.push(("maxCredits", max.to_string()));
        }
        self.api
            .send(Method::GET, "/courses/search", query, None)
            .await
    }

    pub async fn departments(&self) -> Result<Vec<String>, ApiError> {
        self.api
            .send(Method::GET, "/courses/departments", Vec::new(), None)
            .await
    }
}
