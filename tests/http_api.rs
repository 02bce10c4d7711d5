//! 基于真实路由配置的 HTTP 接口测试

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use rust_attendance_next::routes;
use rust_attendance_next::runtime::lifetime::startup::seed_demo_users;
use rust_attendance_next::storage::{MemoryStorage, Storage};
use rust_attendance_next::utils::jwt::JwtUtils;
use rust_attendance_next::utils::{json_error_handler, query_error_handler};

const DEMO_PASSWORD: &str = "demo1234";

// 演示账号的编号按写入顺序固定
const ADMIN_ID: i64 = 1;
const TEACHER_ID: i64 = 3;

async fn demo_storage() -> Arc<dyn Storage> {
    let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
    seed_demo_users(&storage, DEMO_PASSWORD).await.unwrap();
    storage
}

fn bearer(user_id: i64, role: &str) -> (&'static str, String) {
    let token = JwtUtils::generate_access_token(user_id, role).unwrap();
    ("Authorization", format!("Bearer {token}"))
}

macro_rules! init_app {
    ($storage:expr) => {
        test::init_service(
            App::new()
                .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(web::Data::new($storage.clone()))
                .configure(routes::configure_api_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_login_then_fetch_profile() {
    let storage = demo_storage().await;
    let app = init_app!(storage);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({"username": "admin", "password": DEMO_PASSWORD}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let token = body["data"]["access_token"].as_str().unwrap().to_string();
    assert!(body["data"]["user"].get("password_hash").is_none());

    let req = test::TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["user"]["username"], "admin");
    assert_eq!(body["data"]["user"]["role"], "admin");

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({"username": "admin@attendance.local", "password": "wrong-pass1"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 2000);
}

#[actix_web::test]
async fn test_requests_without_token_are_rejected() {
    let storage = demo_storage().await;
    let app = init_app!(storage);

    let req = test::TestRequest::get().uri("/api/v1/students").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/api/v1/students")
        .insert_header(("Authorization", "Bearer not-a-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_teacher_reads_but_cannot_manage_structure() {
    let storage = demo_storage().await;
    let app = init_app!(storage);
    let teacher = bearer(TEACHER_ID, "teacher");

    let req = test::TestRequest::get()
        .uri("/api/v1/departments")
        .insert_header(teacher.clone())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/api/v1/departments")
        .insert_header(teacher.clone())
        .set_json(json!({"name": "Mathematics"}))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::FORBIDDEN
    );

    let req = test::TestRequest::get()
        .uri("/api/v1/users")
        .insert_header(teacher)
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::FORBIDDEN
    );
}

#[actix_web::test]
async fn test_attendance_flow_over_http() {
    let storage = demo_storage().await;
    let app = init_app!(storage);
    let admin = bearer(ADMIN_ID, "admin");
    let teacher = bearer(TEACHER_ID, "teacher");

    // 院系与课程
    let req = test::TestRequest::post()
        .uri("/api/v1/departments")
        .insert_header(admin.clone())
        .set_json(json!({"name": "Computer Science"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let department_id = body["data"]["department"]["id"].as_i64().unwrap();

    let course = json!({
        "name": "Software Engineering",
        "code": "SE-L3",
        "department_id": department_id,
        "absence_threshold": 1
    });
    let req = test::TestRequest::post()
        .uri("/api/v1/courses")
        .insert_header(admin.clone())
        .set_json(&course)
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let course_id = body["data"]["course"]["id"].as_i64().unwrap();

    // 课程代码重复
    let req = test::TestRequest::post()
        .uri("/api/v1/courses")
        .insert_header(admin.clone())
        .set_json(&course)
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CONFLICT
    );

    // 引用不存在的院系
    let req = test::TestRequest::post()
        .uri("/api/v1/courses")
        .insert_header(admin.clone())
        .set_json(json!({"name": "Physics", "code": "PH-L1", "department_id": 99}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 4000);

    // 模块与模块单元
    let req = test::TestRequest::post()
        .uri("/api/v1/modules")
        .insert_header(admin.clone())
        .set_json(json!({"name": "Databases", "code": "DB1", "course_id": course_id}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let module_id = body["data"]["module"]["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/v1/module-elements")
        .insert_header(admin.clone())
        .set_json(json!({"name": "SQL lab", "code": "DB1-TP", "module_id": module_id}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let element_id = body["data"]["module_element"]["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/module-elements/{element_id}/teachers"))
        .insert_header(admin.clone())
        .set_json(json!({"teacher_id": TEACHER_ID}))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );

    // 只有教师角色可以被分配
    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/module-elements/{element_id}/teachers"))
        .insert_header(admin.clone())
        .set_json(json!({"teacher_id": ADMIN_ID}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 3006);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/teachers/{TEACHER_ID}/module-elements"))
        .insert_header(teacher.clone())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["items"][0]["id"], element_id);

    // 学生
    let mut student_ids = Vec::new();
    for (code, first_name) in [("S001", "Alice"), ("S002", "Bruno")] {
        let req = test::TestRequest::post()
            .uri("/api/v1/students")
            .insert_header(admin.clone())
            .set_json(json!({
                "student_id": code,
                "first_name": first_name,
                "last_name": "Martin",
                "email": format!("{}@students.example.edu", code.to_lowercase()),
                "course_id": course_id
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        student_ids.push(body["data"]["student"]["id"].as_i64().unwrap());
    }

    let req = test::TestRequest::get()
        .uri("/api/v1/students/999")
        .insert_header(teacher.clone())
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );

    // 教师记录课次与考勤
    let req = test::TestRequest::post()
        .uri("/api/v1/sessions")
        .insert_header(teacher.clone())
        .set_json(json!({
            "date": "2024-03-12T08:30:00Z",
            "session_type": "TP",
            "module_element_id": element_id,
            "teacher_id": TEACHER_ID
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let session_id = body["data"]["session"]["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/v1/sessions")
        .insert_header(teacher.clone())
        .set_json(json!({
            "date": "2024-03-13T08:30:00Z",
            "session_type": "TD",
            "module_element_id": element_id,
            "teacher_id": ADMIN_ID
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 3006);

    let req = test::TestRequest::post()
        .uri("/api/v1/absences/batch")
        .insert_header(teacher.clone())
        .set_json(json!({"absences": [
            {"session_id": session_id, "student_id": student_ids[0], "status": "absent"},
            {"session_id": session_id, "student_id": student_ids[0], "status": "absent"},
            {"session_id": session_id, "student_id": student_ids[1], "status": "absent"}
        ]}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["total"], 3);

    // 任意一条引用不存在时整批拒绝
    let req = test::TestRequest::post()
        .uri("/api/v1/absences/batch")
        .insert_header(teacher.clone())
        .set_json(json!({"absences": [
            {"session_id": session_id, "student_id": student_ids[1], "status": "present"},
            {"session_id": session_id, "student_id": 404, "status": "absent"}
        ]}))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/sessions/{session_id}/absences"))
        .insert_header(teacher.clone())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["total"], 3);

    // 统计
    let req = test::TestRequest::get()
        .uri("/api/v1/statistics/top-absentees?limit=5")
        .insert_header(teacher.clone())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["student_id"], student_ids[0]);
    assert_eq!(items[0]["absence_count"], 2);
    assert_eq!(items[1]["absence_count"], 1);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/courses/{course_id}/threshold-report"))
        .insert_header(teacher.clone())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["flagged_count"], 1);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/students/{}/absence-summary", student_ids[1]))
        .insert_header(teacher)
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["absent"], 1);
    assert_eq!(body["data"]["exceeds_threshold"], false);
}

#[actix_web::test]
async fn test_parallel_duplicate_usernames_store_one_user() {
    let storage = demo_storage().await;
    let app = init_app!(storage);
    let admin = bearer(ADMIN_ID, "admin");

    let create = |email: &str| {
        test::TestRequest::post()
            .uri("/api/v1/users")
            .insert_header(admin.clone())
            .set_json(json!({
                "username": "bob",
                "password": "secret123",
                "full_name": "Bob Martin",
                "email": email,
                "role": "teacher"
            }))
            .to_request()
    };
    let (first, second) = futures_util::future::join(
        test::call_service(&app, create("bob@example.edu")),
        test::call_service(&app, create("bob.martin@example.edu")),
    )
    .await;

    let mut statuses = vec![first.status(), second.status()];
    statuses.sort_by_key(|s| s.as_u16());
    assert_eq!(statuses, vec![StatusCode::CREATED, StatusCode::CONFLICT]);
    // 三个演示账号加一个新用户
    assert_eq!(storage.count_users().await.unwrap(), 4);
}

#[actix_web::test]
async fn test_malformed_input_is_bad_request() {
    let storage = demo_storage().await;
    let app = init_app!(storage);
    let admin = bearer(ADMIN_ID, "admin");

    let req = test::TestRequest::get()
        .uri("/api/v1/courses/abc")
        .insert_header(admin.clone())
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );

    let req = test::TestRequest::get()
        .uri("/api/v1/statistics/top-absentees?limit=many")
        .insert_header(admin.clone())
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );

    let req = test::TestRequest::post()
        .uri("/api/v1/absences")
        .insert_header(admin.clone())
        .set_json(json!({"session_id": 1, "student_id": 1, "status": "late"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 1000);

    // 不能删除自己
    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/users/{ADMIN_ID}"))
        .insert_header(admin)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 3005);
}
