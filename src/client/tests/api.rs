//! Resource-client tests against a mock backend: CRUD shapes, paging
//! passthrough, aggregate reads and the student portal flows.

use std::sync::Arc;

use client::{
    ApiClient, Course, ListParams, MemoryTokenStore, RegistrationStatus, SortDir, Student,
};
use httpmock::prelude::*;
use serde_json::json;

fn api(server: &MockServer) -> ApiClient {
    ApiClient::new(server.base_url(), Arc::new(MemoryTokenStore::new()))
        .expect("mock server url must be valid")
}

fn new_student() -> Student {
    Student {
        id: None,
        student_id: "STU-2024-001".to_string(),
        first_name: "Alice".to_string(),
        last_name: "Johnson".to_string(),
        email: "alice@example.edu".to_string(),
        phone_number: None,
        date_of_birth: None,
        department: "CS".to_string(),
        enrollment_year: Some(2024),
        created_at: None,
        updated_at: None,
    }
}

fn stored_student() -> serde_json::Value {
    json!({
        "id": 3,
        "studentId": "STU-2024-001",
        "firstName": "Alice",
        "lastName": "Johnson",
        "email": "alice@example.edu",
        "department": "CS",
        "enrollmentYear": 2024
    })
}

#[tokio::test]
async fn create_then_get_round_trip() {
    let server = MockServer::start_async().await;
    let create = server
        .mock_async(|when, then| {
            when.method(POST).path("/students").json_body(json!({
                "studentId": "STU-2024-001",
                "firstName": "Alice",
                "lastName": "Johnson",
                "email": "alice@example.edu",
                "department": "CS",
                "enrollmentYear": 2024
            }));
            then.status(201).json_body(stored_student());
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/students/3");
            then.status(200).json_body(stored_student());
        })
        .await;

    let api = api(&server);
    let draft = new_student();
    let created = api.students().create(&draft).await.unwrap();
    create.assert_async().await;
    assert_eq!(created.id, Some(3));

    let fetched = api.students().get(3).await.unwrap();
    // equal on every caller-supplied field
    assert_eq!(fetched.student_id, draft.student_id);
    assert_eq!(fetched.first_name, draft.first_name);
    assert_eq!(fetched.last_name, draft.last_name);
    assert_eq!(fetched.email, draft.email);
    assert_eq!(fetched.department, draft.department);
    assert_eq!(fetched.enrollment_year, draft.enrollment_year);
}

#[tokio::test]
async fn save_dispatches_on_id_presence() {
    let server = MockServer::start_async().await;
    let create = server
        .mock_async(|when, then| {
            when.method(POST).path("/students");
            then.status(201).json_body(stored_student());
        })
        .await;
    let update = server
        .mock_async(|when, then| {
            when.method(PUT).path("/students/3");
            then.status(200).json_body(stored_student());
        })
        .await;

    let api = api(&server);
    api.students().save(&new_student()).await.unwrap();
    assert_eq!(create.hits_async().await, 1);
    assert_eq!(update.hits_async().await, 0);

    let mut existing = new_student();
    existing.id = Some(3);
    api.students().save(&existing).await.unwrap();
    assert_eq!(create.hits_async().await, 1);
    assert_eq!(update.hits_async().await, 1);
}

#[tokio::test]
async fn delete_maps_no_content_to_ok() {
    let server = MockServer::start_async().await;
    let delete = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/students/3");
            then.status(204);
        })
        .await;

    let api = api(&server);
    api.students().delete(3).await.unwrap();
    delete.assert_async().await;
}

#[tokio::test]
async fn missing_record_is_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/students/999");
            then.status(404);
        })
        .await;

    let api = api(&server);
    let err = api.students().get(999).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn empty_listing_is_a_valid_outcome() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/courses");
            then.status(200).json_body(json!([]));
        })
        .await;

    let api = api(&server);
    let courses = api.courses().list(&ListParams::default()).await.unwrap();
    assert!(courses.is_empty());
}

#[tokio::test]
async fn paging_params_are_passed_through() {
    let server = MockServer::start_async().await;
    let list = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/students")
                .query_param("page", "2")
                .query_param("size", "5")
                .query_param("sortBy", "lastName")
                .query_param("sortDir", "desc");
            then.status(200).json_body(json!([]));
        })
        .await;

    let api = api(&server);
    let params = ListParams {
        page: Some(2),
        size: Some(5),
        sort_by: Some("lastName".to_string()),
        sort_dir: Some(SortDir::Desc),
    };
    api.students().list(&params).await.unwrap();
    list.assert_async().await;
}

#[tokio::test]
async fn aggregates_come_from_the_server() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/results/student/7/gpa");
            then.status(200).json_body(json!(3.42));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/results/course/42/average");
            then.status(200).json_body(json!(71.5));
        })
        .await;

    let api = api(&server);
    assert_eq!(api.results().student_gpa(7).await.unwrap(), 3.42);
    assert_eq!(api.results().course_average(42).await.unwrap(), 71.5);
}

#[tokio::test]
async fn enrolled_count_and_status_transition() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/registrations/course/42/count");
            then.status(200).json_body(json!(17));
        })
        .await;
    let set_status = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/registrations/9/status")
                .query_param("status", "DROPPED");
            then.status(200).json_body(json!({
                "id": 9,
                "studentId": 7,
                "courseId": 42,
                "status": "DROPPED"
            }));
        })
        .await;

    let api = api(&server);
    assert_eq!(api.registrations().enrolled_count(42).await.unwrap(), 17);

    let updated = api
        .registrations()
        .update_status(9, RegistrationStatus::Dropped)
        .await
        .unwrap();
    set_status.assert_async().await;
    assert_eq!(updated.status, RegistrationStatus::Dropped);
}

fn course_42() -> serde_json::Value {
    json!({
        "id": 42,
        "code": "CS-401",
        "title": "Distributed Systems",
        "credits": 4,
        "department": "CS",
        "maxEnrollment": 30,
        "currentEnrollment": 18
    })
}

#[tokio::test]
async fn enroll_then_enrolled_courses_contains_it() {
    let server = MockServer::start_async().await;
    let enroll = server
        .mock_async(|when, then| {
            when.method(POST).path("/student/courses/42/enroll");
            then.status(200).json_body(json!({
                "id": 9,
                "studentId": 7,
                "courseId": 42,
                "courseCode": "CS-401",
                "status": "ENROLLED"
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/student/courses/enrolled");
            then.status(200).json_body(json!([course_42()]));
        })
        .await;

    let api = api(&server);
    let registration = api.portal().enroll(42).await.unwrap();
    enroll.assert_async().await;
    assert_eq!(registration.course_id, 42);
    assert_eq!(registration.status, RegistrationStatus::Enrolled);

    let enrolled: Vec<Course> = api.portal().enrolled_courses().await.unwrap();
    assert!(enrolled.iter().any(|course| course.id == Some(42)));
}

#[tokio::test]
async fn unenroll_tolerates_an_empty_body() {
    let server = MockServer::start_async().await;
    let unenroll = server
        .mock_async(|when, then| {
            when.method(POST).path("/student/courses/42/unenroll");
            then.status(200);
        })
        .await;

    let api = api(&server);
    api.portal().unenroll(42).await.unwrap();
    unenroll.assert_async().await;
}

#[tokio::test]
async fn token_validation_is_a_plain_query() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/auth/validate")
                .query_param("token", "t1");
            then.status(200).json_body(json!(true));
        })
        .await;

    let api = api(&server);
    assert!(api.validate_token("t1").await.unwrap());
}
