//! 统计与报表查询
//!
//! 全部在读取时根据当前数据计算，不缓存也不产生副作用。
//! 外键指向的记录不存在时使用占位名称，而不是让整个统计失败。

use std::collections::HashMap;

use crate::errors::Result;
use crate::models::{
    absences::{entities::AbsenceStatus, requests::AbsenceListQuery},
    courses::requests::CourseListQuery,
    modules::requests::ModuleListQuery,
    sessions::requests::SessionListQuery,
    statistics::responses::{
        CourseThresholdReport, RecentActivity, StatisticsOverview, StudentAbsenceSummary,
        StudentThresholdRow, TopAbsentee,
    },
    students::requests::StudentListQuery,
    users::{entities::UserRole, requests::UserListQuery},
};
use crate::storage::Storage;

pub const UNKNOWN_STUDENT: &str = "Unknown student";
pub const UNKNOWN_TEACHER: &str = "Unknown teacher";
pub const UNKNOWN_MODULE_ELEMENT: &str = "Unknown module element";

/// 仪表盘总览计数
pub async fn collect_overview(storage: &dyn Storage) -> Result<StatisticsOverview> {
    let total_students = storage.list_students(StudentListQuery::default()).await?.len();
    let total_departments = storage.list_departments().await?.len();
    let total_courses = storage.list_courses(CourseListQuery::default()).await?.len();
    let total_teachers = storage
        .list_users(UserListQuery {
            role: Some(UserRole::Teacher),
            ..Default::default()
        })
        .await?
        .len();
    let total_modules = storage.list_modules(ModuleListQuery::default()).await?.len();
    let total_absences = storage.list_absences(AbsenceListQuery::default()).await?.len();

    Ok(StatisticsOverview {
        total_students: total_students as i64,
        total_departments: total_departments as i64,
        total_courses: total_courses as i64,
        total_teachers: total_teachers as i64,
        total_modules: total_modules as i64,
        total_absences: total_absences as i64,
    })
}

// 按学生统计 absent 状态的记录数
async fn absent_counts(storage: &dyn Storage) -> Result<HashMap<i64, i64>> {
    let absences = storage
        .list_absences(AbsenceListQuery {
            status: Some(AbsenceStatus::Absent),
            ..Default::default()
        })
        .await?;

    let mut counts: HashMap<i64, i64> = HashMap::new();
    for absence in absences {
        *counts.entry(absence.student_id).or_insert(0) += 1;
    }
    Ok(counts)
}

/// 缺勤次数排行
///
/// 次数降序，次数相同时学生编号小的在前。
pub async fn collect_top_absentees(storage: &dyn Storage, limit: usize) -> Result<Vec<TopAbsentee>> {
    let mut ranked: Vec<(i64, i64)> = absent_counts(storage).await?.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked.truncate(limit);

    let mut items = Vec::with_capacity(ranked.len());
    for (student_id, absence_count) in ranked {
        let student = storage.get_student_by_id(student_id).await?;
        items.push(TopAbsentee {
            student_id,
            student_code: student.as_ref().map(|s| s.student_id.clone()),
            student_name: student
                .as_ref()
                .map(|s| s.full_name())
                .unwrap_or_else(|| UNKNOWN_STUDENT.to_string()),
            absence_count,
        });
    }
    Ok(items)
}

/// 最近的课次
///
/// 日期降序，同一时间的课次编号大的在前。
pub async fn collect_recent_activities(
    storage: &dyn Storage,
    limit: usize,
) -> Result<Vec<RecentActivity>> {
    let mut sessions = storage.list_sessions(SessionListQuery::default()).await?;
    sessions.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    sessions.truncate(limit);

    let mut items = Vec::with_capacity(sessions.len());
    for session in sessions {
        let teacher_name = storage
            .get_user_by_id(session.teacher_id)
            .await?
            .map(|u| u.full_name)
            .unwrap_or_else(|| UNKNOWN_TEACHER.to_string());
        let module_element_name = storage
            .get_module_element_by_id(session.module_element_id)
            .await?
            .map(|e| e.name)
            .unwrap_or_else(|| UNKNOWN_MODULE_ELEMENT.to_string());
        let absence_count = storage
            .list_absences_by_session(session.id)
            .await?
            .iter()
            .filter(|a| a.is_absent())
            .count() as i64;

        items.push(RecentActivity {
            session_id: session.id,
            date: session.date,
            session_type: session.session_type,
            teacher_name,
            module_element_name,
            absence_count,
        });
    }
    Ok(items)
}

/// 课程缺勤阈值报表，课程不存在时返回 None
///
/// 只是派生视图：超过阈值不会触发任何通知或锁定。
pub async fn collect_threshold_report(
    storage: &dyn Storage,
    course_id: i64,
) -> Result<Option<CourseThresholdReport>> {
    let Some(course) = storage.get_course_by_id(course_id).await? else {
        return Ok(None);
    };

    let students = storage
        .list_students(StudentListQuery {
            course_id: Some(course_id),
        })
        .await?;
    let counts = absent_counts(storage).await?;

    let rows: Vec<StudentThresholdRow> = students
        .into_iter()
        .map(|student| {
            let absence_count = counts.get(&student.id).copied().unwrap_or(0);
            StudentThresholdRow {
                student_id: student.id,
                student_name: student.full_name(),
                student_code: student.student_id,
                absence_count,
                exceeds_threshold: course.exceeds_threshold(absence_count),
            }
        })
        .collect();
    let flagged_count = rows.iter().filter(|r| r.exceeds_threshold).count() as i64;

    Ok(Some(CourseThresholdReport {
        course_id: course.id,
        course_name: course.name,
        absence_threshold: course.absence_threshold,
        flagged_count,
        students: rows,
    }))
}

/// 单个学生按状态汇总的考勤，学生不存在时返回 None
pub async fn collect_student_absence_summary(
    storage: &dyn Storage,
    student_id: i64,
) -> Result<Option<StudentAbsenceSummary>> {
    let Some(student) = storage.get_student_by_id(student_id).await? else {
        return Ok(None);
    };

    let mut summary = StudentAbsenceSummary {
        student_id,
        present: 0,
        absent: 0,
        justified: 0,
        unjustified: 0,
        absence_threshold: None,
        exceeds_threshold: false,
    };
    for absence in storage.list_absences_by_student(student_id).await? {
        match absence.status {
            AbsenceStatus::Present => summary.present += 1,
            AbsenceStatus::Absent => summary.absent += 1,
            AbsenceStatus::Justified => summary.justified += 1,
            AbsenceStatus::Unjustified => summary.unjustified += 1,
        }
    }

    // 课程已被删除时不给出阈值
    if let Some(course) = storage.get_course_by_id(student.course_id).await? {
        summary.absence_threshold = Some(course.absence_threshold);
        summary.exceeds_threshold = course.exceeds_threshold(summary.absent);
    }

    Ok(Some(summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        absences::requests::CreateAbsenceRequest,
        courses::requests::CreateCourseRequest,
        departments::requests::CreateDepartmentRequest,
        module_elements::requests::CreateModuleElementRequest,
        modules::requests::CreateModuleRequest,
        sessions::{entities::SessionType, requests::CreateSessionRequest},
        students::{entities::Student, requests::CreateStudentRequest},
        users::requests::CreateUserRequest,
    };
    use crate::storage::MemoryStorage;
    use chrono::{TimeZone, Utc};

    async fn course(storage: &MemoryStorage, code: &str, threshold: i64) -> i64 {
        storage
            .create_course(CreateCourseRequest {
                name: format!("Course {code}"),
                code: code.to_string(),
                description: None,
                department_id: 1,
                absence_threshold: threshold,
            })
            .await
            .unwrap()
            .id
    }

    async fn student(storage: &MemoryStorage, code: &str, course_id: i64) -> Student {
        storage
            .create_student(CreateStudentRequest {
                student_id: code.to_string(),
                first_name: "First".to_string(),
                last_name: code.to_string(),
                email: format!("{code}@school.test"),
                course_id,
            })
            .await
            .unwrap()
    }

    async fn session_on(storage: &MemoryStorage, day: u32, teacher_id: i64, element_id: i64) -> i64 {
        storage
            .create_session(CreateSessionRequest {
                date: Utc.with_ymd_and_hms(2024, 3, day, 9, 0, 0).unwrap(),
                session_type: SessionType::Course,
                module_element_id: element_id,
                teacher_id,
                group_id: None,
                notes: None,
            })
            .await
            .unwrap()
            .id
    }

    fn absent(session_id: i64, student_id: i64) -> CreateAbsenceRequest {
        CreateAbsenceRequest {
            session_id,
            student_id,
            status: AbsenceStatus::Absent,
            notes: None,
        }
    }

    async fn record_absent(storage: &MemoryStorage, student_id: i64, times: usize) {
        let batch = (0..times).map(|_| absent(1, student_id)).collect();
        storage.batch_create_absences(batch).await.unwrap();
    }

    #[tokio::test]
    async fn test_top_absentees_breaks_ties_by_student_id() {
        let storage = MemoryStorage::new();
        let course_id = course(&storage, "C1", 3).await;
        let s1 = student(&storage, "S1", course_id).await;
        let s2 = student(&storage, "S2", course_id).await;
        let s3 = student(&storage, "S3", course_id).await;

        record_absent(&storage, s1.id, 3).await;
        record_absent(&storage, s3.id, 5).await;
        record_absent(&storage, s2.id, 5).await;

        let top = collect_top_absentees(&storage, 2).await.unwrap();
        let ids: Vec<(i64, i64)> = top.iter().map(|t| (t.student_id, t.absence_count)).collect();
        assert_eq!(ids, vec![(s2.id, 5), (s3.id, 5)]);
    }

    #[tokio::test]
    async fn test_top_absentees_counts_only_absent_status() {
        let storage = MemoryStorage::new();
        let course_id = course(&storage, "C1", 3).await;
        let s1 = student(&storage, "S1", course_id).await;

        let mut batch = vec![absent(1, s1.id)];
        for status in [
            AbsenceStatus::Present,
            AbsenceStatus::Justified,
            AbsenceStatus::Unjustified,
        ] {
            batch.push(CreateAbsenceRequest {
                status,
                ..absent(1, s1.id)
            });
        }
        storage.batch_create_absences(batch).await.unwrap();

        let top = collect_top_absentees(&storage, 5).await.unwrap();
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].absence_count, 1);
        assert_eq!(top[0].student_code.as_deref(), Some("S1"));
    }

    #[tokio::test]
    async fn test_top_absentees_keeps_deleted_students_as_unknown() {
        let storage = MemoryStorage::new();
        let course_id = course(&storage, "C1", 3).await;
        let s1 = student(&storage, "S1", course_id).await;
        record_absent(&storage, s1.id, 1).await;
        storage.delete_student(s1.id).await.unwrap();

        let top = collect_top_absentees(&storage, 5).await.unwrap();
        assert_eq!(top[0].student_name, UNKNOWN_STUDENT);
        assert_eq!(top[0].student_code, None);
    }

    #[tokio::test]
    async fn test_threshold_report_is_strict() {
        let storage = MemoryStorage::new();
        let course_id = course(&storage, "C1", 3).await;
        let a = student(&storage, "A", course_id).await;
        let b = student(&storage, "B", course_id).await;
        record_absent(&storage, a.id, 4).await;
        record_absent(&storage, b.id, 3).await;

        let report = collect_threshold_report(&storage, course_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(report.flagged_count, 1);
        let flagged: Vec<i64> = report
            .students
            .iter()
            .filter(|r| r.exceeds_threshold)
            .map(|r| r.student_id)
            .collect();
        assert_eq!(flagged, vec![a.id]);
    }

    #[tokio::test]
    async fn test_threshold_report_missing_course() {
        let storage = MemoryStorage::new();
        assert!(collect_threshold_report(&storage, 99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_recent_activities_order_and_fallback_names() {
        let storage = MemoryStorage::new();
        let teacher = storage
            .create_user(CreateUserRequest {
                username: "teacher".to_string(),
                password: "hash".to_string(),
                full_name: "Jane Teacher".to_string(),
                email: "teacher@school.test".to_string(),
                role: UserRole::Teacher,
                department_id: None,
            })
            .await
            .unwrap();
        let element = storage
            .create_module_element(CreateModuleElementRequest {
                name: "Lecture 1".to_string(),
                code: "L1".to_string(),
                description: None,
                module_id: 1,
            })
            .await
            .unwrap();

        let older = session_on(&storage, 1, teacher.id, element.id).await;
        let same_day_first = session_on(&storage, 5, teacher.id, element.id).await;
        let same_day_second = session_on(&storage, 5, 42, 42).await;
        storage
            .create_absence(absent(same_day_first, 1))
            .await
            .unwrap();

        let recent = collect_recent_activities(&storage, 5).await.unwrap();
        let ids: Vec<i64> = recent.iter().map(|r| r.session_id).collect();
        assert_eq!(ids, vec![same_day_second, same_day_first, older]);

        assert_eq!(recent[0].teacher_name, UNKNOWN_TEACHER);
        assert_eq!(recent[0].module_element_name, UNKNOWN_MODULE_ELEMENT);
        assert_eq!(recent[1].teacher_name, "Jane Teacher");
        assert_eq!(recent[1].module_element_name, "Lecture 1");
        assert_eq!(recent[1].absence_count, 1);

        let limited = collect_recent_activities(&storage, 1).await.unwrap();
        assert_eq!(limited.len(), 1);
    }

    #[tokio::test]
    async fn test_overview_counts() {
        let storage = MemoryStorage::new();
        storage
            .create_department(CreateDepartmentRequest {
                name: "Sciences".to_string(),
                description: None,
            })
            .await
            .unwrap();
        let course_id = course(&storage, "C1", 3).await;
        storage
            .create_module(CreateModuleRequest {
                name: "Algebra".to_string(),
                code: "ALG".to_string(),
                description: None,
                course_id,
            })
            .await
            .unwrap();
        for (name, role) in [("admin", UserRole::Admin), ("teach", UserRole::Teacher)] {
            storage
                .create_user(CreateUserRequest {
                    username: name.to_string(),
                    password: "hash".to_string(),
                    full_name: name.to_string(),
                    email: format!("{name}@school.test"),
                    role,
                    department_id: None,
                })
                .await
                .unwrap();
        }
        let s1 = student(&storage, "S1", course_id).await;
        record_absent(&storage, s1.id, 2).await;

        let overview = collect_overview(&storage).await.unwrap();
        assert_eq!(
            overview,
            StatisticsOverview {
                total_students: 1,
                total_departments: 1,
                total_courses: 1,
                total_teachers: 1,
                total_modules: 1,
                total_absences: 2,
            }
        );
    }

    #[tokio::test]
    async fn test_student_summary_by_status() {
        let storage = MemoryStorage::new();
        let course_id = course(&storage, "C1", 1).await;
        let s1 = student(&storage, "S1", course_id).await;
        storage
            .batch_create_absences(vec![
                absent(1, s1.id),
                absent(2, s1.id),
                CreateAbsenceRequest {
                    status: AbsenceStatus::Justified,
                    ..absent(3, s1.id)
                },
            ])
            .await
            .unwrap();

        let summary = collect_student_absence_summary(&storage, s1.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(summary.absent, 2);
        assert_eq!(summary.justified, 1);
        assert_eq!(summary.present, 0);
        assert_eq!(summary.absence_threshold, Some(1));
        assert!(summary.exceeds_threshold);

        storage.delete_course(course_id).await.unwrap();
        let orphaned = collect_student_absence_summary(&storage, s1.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(orphaned.absence_threshold, None);
        assert!(!orphaned.exceeds_threshold);
    }
}
