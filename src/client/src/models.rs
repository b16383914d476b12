//! Wire records exchanged verbatim with the backend. Field names follow the
//! backend DTOs (camelCase); an entity without an `id` has not been
//! persisted yet, and saving it creates rather than updates.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// External student code, e.g. `STU-2024-001`. Distinct from the
    /// numeric database id.
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    pub department: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub code: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub credits: i32,
    pub department: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_enrollment: Option<i32>,
    /// Server-maintained aggregate; never sent on create/update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_enrollment: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RegistrationStatus {
    Enrolled,
    Dropped,
    Completed,
}

impl RegistrationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationStatus::Enrolled => "ENROLLED",
            RegistrationStatus::Dropped => "DROPPED",
            RegistrationStatus::Completed => "COMPLETED",
        }
    }
}

impl std::fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RegistrationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ENROLLED" => Ok(RegistrationStatus::Enrolled),
            "DROPPED" => Ok(RegistrationStatus::Dropped),
            "COMPLETED" => Ok(RegistrationStatus::Completed),
            other => Err(format!(
                "unknown registration status {other:?}, expected ENROLLED, DROPPED or COMPLETED"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub student_id: i64,
    /// Denormalized display field, supplied by the server only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    pub course_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<String>,
    pub status: RegistrationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub registration_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_title: Option<String>,
    /// 0 to 100.
    pub marks: f64,
    /// Computed by the server from `marks`; read-only here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa_points: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Student,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Student => "STUDENT",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signed-in identity as reported by `GET /auth/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
    /// Linked student record, present for STUDENT accounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<i64>,
}

/// Signup payload. Every optional field is spelled out; which ones are
/// required depends on the requested role, checked by [`validate`].
///
/// [`validate`]: RegisterRequest::validate
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment_year: Option<i32>,
}

impl RegisterRequest {
    /// Returns the list of problems that would make the backend reject the
    /// signup. Empty means good to send.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.username.trim().is_empty() {
            problems.push("username is required".to_string());
        }
        if self.password.is_empty() {
            problems.push("password is required".to_string());
        }
        if self.email.trim().is_empty() {
            problems.push("email is required".to_string());
        }
        if self.role == Role::Student {
            let required = [
                ("studentId", &self.student_id),
                ("firstName", &self.first_name),
                ("lastName", &self.last_name),
                ("department", &self.department),
            ];
            for (name, value) in required {
                if value.as_deref().map_or(true, |v| v.trim().is_empty()) {
                    problems.push(format!("{name} is required for student registration"));
                }
            }
        }
        problems
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }
}

/// Optional paging/sorting passed through to list endpoints. Absent fields
/// fall back to the server defaults (page 0, size 10, sort by id asc).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort_by: Option<String>,
    pub sort_dir: Option<SortDir>,
}

impl ListParams {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(size) = self.size {
            query.push(("size", size.to_string()));
        }
        if let Some(sort_by) = &self.sort_by {
            query.push(("sortBy", sort_by.clone()));
        }
        if let Some(sort_dir) = self.sort_dir {
            query.push(("sortDir", sort_dir.as_str().to_string()));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(role: Role) -> RegisterRequest {
        RegisterRequest {
            username: "alice".to_string(),
            password: "pw".to_string(),
            email: "alice@example.edu".to_string(),
            role,
            student_id: None,
            first_name: None,
            last_name: None,
            phone_number: None,
            date_of_birth: None,
            department: None,
            enrollment_year: None,
        }
    }

    #[test]
    fn admin_signup_needs_no_profile() {
        assert!(signup(Role::Admin).validate().is_empty());
    }

    #[test]
    fn student_signup_requires_profile_fields() {
        let problems = signup(Role::Student).validate();
        assert_eq!(problems.len(), 4);
        assert!(problems.iter().any(|p| p.contains("studentId")));
        assert!(problems.iter().any(|p| p.contains("department")));

        let mut req = signup(Role::Student);
        req.student_id = Some("STU-1".to_string());
        req.first_name = Some("Alice".to_string());
        req.last_name = Some("Doe".to_string());
        req.department = Some("CS".to_string());
        assert!(req.validate().is_empty());
    }

    #[test]
    fn blank_profile_fields_do_not_count() {
        let mut req = signup(Role::Student);
        req.student_id = Some("  ".to_string());
        assert!(req
            .validate()
            .iter()
            .any(|p| p.contains("studentId")));
    }

    #[test]
    fn new_student_serializes_without_id() {
        let student = Student {
            id: None,
            student_id: "STU-1".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Doe".to_string(),
            email: "alice@example.edu".to_string(),
            phone_number: None,
            date_of_birth: None,
            department: "CS".to_string(),
            enrollment_year: None,
            created_at: None,
            updated_at: None,
        };
        let value = serde_json::to_value(&student).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["studentId"], "STU-1");
        assert_eq!(value["firstName"], "Alice");
    }

    #[test]
    fn status_round_trips_as_uppercase() {
        let json = serde_json::to_string(&RegistrationStatus::Enrolled).unwrap();
        assert_eq!(json, "\"ENROLLED\"");
        assert_eq!(
            "dropped".parse::<RegistrationStatus>().unwrap(),
            RegistrationStatus::Dropped
        );
        assert!("PAUSED".parse::<RegistrationStatus>().is_err());
    }

    #[test]
    fn default_params_add_no_query() {
        assert!(ListParams::default().to_query().is_empty());
        let params = ListParams {
            page: Some(2),
            size: Some(5),
            sort_by: Some("lastName".to_string()),
            sort_dir: Some(SortDir::Desc),
        };
        assert_eq!(
            params.to_query(),
            vec![
                ("page", "2".to_string()),
                ("size", "5".to_string()),
                ("sortBy", "lastName".to_string()),
                ("sortDir", "desc".to_string()),
            ]
        );
    }
}
