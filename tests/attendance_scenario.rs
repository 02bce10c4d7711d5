//! 通过公开的存储与统计接口跑一遍完整的考勤流程

use chrono::{TimeZone, Utc};
use rust_attendance_next::models::absences::entities::AbsenceStatus;
use rust_attendance_next::models::absences::requests::CreateAbsenceRequest;
use rust_attendance_next::models::courses::requests::{CreateCourseRequest, UpdateCourseRequest};
use rust_attendance_next::models::departments::requests::CreateDepartmentRequest;
use rust_attendance_next::models::module_elements::requests::CreateModuleElementRequest;
use rust_attendance_next::models::modules::requests::CreateModuleRequest;
use rust_attendance_next::models::sessions::entities::SessionType;
use rust_attendance_next::models::sessions::requests::CreateSessionRequest;
use rust_attendance_next::models::student_groups::entities::GroupType;
use rust_attendance_next::models::student_groups::requests::CreateStudentGroupRequest;
use rust_attendance_next::models::students::requests::CreateStudentRequest;
use rust_attendance_next::models::users::entities::UserRole;
use rust_attendance_next::models::users::requests::CreateUserRequest;
use rust_attendance_next::services::statistics::{
    collect_overview, collect_recent_activities, collect_threshold_report, collect_top_absentees,
};
use rust_attendance_next::storage::{MemoryStorage, Storage};

struct Seeded {
    storage: MemoryStorage,
    course_id: i64,
    student_ids: [i64; 2],
    session_id: i64,
}

fn new_student(code: &str, first: &str, course_id: i64) -> CreateStudentRequest {
    CreateStudentRequest {
        student_id: code.to_string(),
        first_name: first.to_string(),
        last_name: "Martin".to_string(),
        email: format!("{}@students.example.edu", code.to_lowercase()),
        course_id,
    }
}

fn absent(session_id: i64, student_id: i64) -> CreateAbsenceRequest {
    CreateAbsenceRequest {
        session_id,
        student_id,
        status: AbsenceStatus::Absent,
        notes: None,
    }
}

// 一个课程（阈值 2）、两个学生、一个课次
async fn seed() -> Seeded {
    let storage = MemoryStorage::new();

    let department = storage
        .create_department(CreateDepartmentRequest {
            name: "Computer Science".into(),
            description: None,
        })
        .await
        .unwrap();
    let course = storage
        .create_course(CreateCourseRequest {
            name: "Software Engineering".into(),
            code: "SE-L3".into(),
            description: None,
            department_id: department.id,
            absence_threshold: 2,
        })
        .await
        .unwrap();
    let module = storage
        .create_module(CreateModuleRequest {
            name: "Databases".into(),
            code: "DB1".into(),
            description: None,
            course_id: course.id,
        })
        .await
        .unwrap();
    let element = storage
        .create_module_element(CreateModuleElementRequest {
            name: "SQL lab".into(),
            code: "DB1-TP".into(),
            description: None,
            module_id: module.id,
        })
        .await
        .unwrap();
    let teacher = storage
        .create_user(CreateUserRequest {
            username: "lbernard".into(),
            password: "not-a-real-hash".into(),
            full_name: "Lucie Bernard".into(),
            email: "lbernard@example.edu".into(),
            role: UserRole::Teacher,
            department_id: Some(department.id),
        })
        .await
        .unwrap();

    let first = storage
        .create_student(new_student("S001", "Alice", course.id))
        .await
        .unwrap();
    let second = storage
        .create_student(new_student("S002", "Bruno", course.id))
        .await
        .unwrap();

    let session = storage
        .create_session(CreateSessionRequest {
            date: Utc.with_ymd_and_hms(2024, 3, 12, 8, 30, 0).unwrap(),
            session_type: SessionType::Tp,
            module_element_id: element.id,
            teacher_id: teacher.id,
            group_id: None,
            notes: None,
        })
        .await
        .unwrap();

    Seeded {
        storage,
        course_id: course.id,
        student_ids: [first.id, second.id],
        session_id: session.id,
    }
}

#[tokio::test]
async fn test_top_absentees_and_threshold_report() {
    let Seeded {
        storage,
        course_id,
        student_ids: [first, second],
        session_id,
    } = seed().await;

    let created = storage
        .batch_create_absences(vec![
            absent(session_id, first),
            absent(session_id, first),
            absent(session_id, second),
        ])
        .await
        .unwrap();
    assert_eq!(created.len(), 3);

    let top = collect_top_absentees(&storage, 5).await.unwrap();
    let ranked: Vec<(i64, i64)> = top.iter().map(|r| (r.student_id, r.absence_count)).collect();
    assert_eq!(ranked, vec![(first, 2), (second, 1)]);
    assert_eq!(top[0].student_code.as_deref(), Some("S001"));
    assert_eq!(top[0].student_name, "Alice Martin");

    // 阈值为 2 时，恰好 2 次不算超过
    let report = collect_threshold_report(&storage, course_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(report.absence_threshold, 2);
    assert_eq!(report.flagged_count, 0);

    storage
        .update_course(
            course_id,
            UpdateCourseRequest {
                absence_threshold: Some(1),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let report = collect_threshold_report(&storage, course_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(report.flagged_count, 1);
    let flagged: Vec<i64> = report
        .students
        .iter()
        .filter(|row| row.exceeds_threshold)
        .map(|row| row.student_id)
        .collect();
    assert_eq!(flagged, vec![first]);
}

#[tokio::test]
async fn test_recent_activity_counts_only_absent_status() {
    let Seeded {
        storage,
        student_ids: [first, second],
        session_id,
        ..
    } = seed().await;

    storage
        .batch_create_absences(vec![
            absent(session_id, first),
            CreateAbsenceRequest {
                status: AbsenceStatus::Justified,
                ..absent(session_id, second)
            },
        ])
        .await
        .unwrap();

    let recent = collect_recent_activities(&storage, 5).await.unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].session_id, session_id);
    assert_eq!(recent[0].teacher_name, "Lucie Bernard");
    assert_eq!(recent[0].module_element_name, "SQL lab");
    assert_eq!(recent[0].absence_count, 1);

    let overview = collect_overview(&storage).await.unwrap();
    assert_eq!(overview.total_students, 2);
    assert_eq!(overview.total_teachers, 1);
    assert_eq!(overview.total_absences, 2);
}

#[tokio::test]
async fn test_group_membership_follows_student_order() {
    let Seeded {
        storage,
        course_id,
        student_ids: [first, second],
        ..
    } = seed().await;

    let group = storage
        .create_student_group(CreateStudentGroupRequest {
            name: "TP A".into(),
            group_type: GroupType::Tp,
            course_id,
        })
        .await
        .unwrap();

    // 先加第二个学生，结果仍按学生编号顺序
    storage.assign_student_to_group(second, group.id).await.unwrap();
    storage.assign_student_to_group(first, group.id).await.unwrap();

    let members: Vec<i64> = storage
        .list_students_in_group(group.id)
        .await
        .unwrap()
        .iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(members, vec![first, second]);

    assert!(storage.remove_student_from_group(second, group.id).await.unwrap());
    let members = storage.list_students_in_group(group.id).await.unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id, first);

    let groups = storage.list_groups_of_student(first).await.unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].name, "TP A");
}

#[tokio::test]
async fn test_deleting_course_leaves_students_dangling() {
    let Seeded {
        storage,
        course_id,
        student_ids: [first, _],
        ..
    } = seed().await;

    assert!(storage.delete_course(course_id).await.unwrap());
    assert!(!storage.delete_course(course_id).await.unwrap());

    let student = storage.get_student_by_id(first).await.unwrap().unwrap();
    assert_eq!(student.course_id, course_id);
    assert!(
        collect_threshold_report(&storage, course_id)
            .await
            .unwrap()
            .is_none()
    );
}
