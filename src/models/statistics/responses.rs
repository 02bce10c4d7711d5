use crate::models::sessions::entities::SessionType;
use serde::Serialize;
use ts_rs::TS;

/// 仪表盘总览
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/statistics.ts")]
pub struct StatisticsOverview {
    pub total_students: i64,
    pub total_departments: i64,
    pub total_courses: i64,
    pub total_teachers: i64,
    pub total_modules: i64,
    pub total_absences: i64,
}

/// 缺勤排行中的一行
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/statistics.ts")]
pub struct TopAbsentee {
    pub student_id: i64,
    pub student_code: Option<String>,
    pub student_name: String,
    pub absence_count: i64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/statistics.ts")]
pub struct TopAbsenteesResponse {
    pub items: Vec<TopAbsentee>,
}

/// 最近课次
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/statistics.ts")]
pub struct RecentActivity {
    pub session_id: i64,
    pub date: chrono::DateTime<chrono::Utc>,
    pub session_type: SessionType,
    pub teacher_name: String,
    pub module_element_name: String,
    pub absence_count: i64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/statistics.ts")]
pub struct RecentActivitiesResponse {
    pub items: Vec<RecentActivity>,
}

/// 课程内单个学生的缺勤情况
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/statistics.ts")]
pub struct StudentThresholdRow {
    pub student_id: i64,
    pub student_code: String,
    pub student_name: String,
    pub absence_count: i64,
    pub exceeds_threshold: bool,
}

/// 课程缺勤阈值报表（只读视图）
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/statistics.ts")]
pub struct CourseThresholdReport {
    pub course_id: i64,
    pub course_name: String,
    pub absence_threshold: i64,
    pub flagged_count: i64,
    pub students: Vec<StudentThresholdRow>,
}

/// 单个学生按状态汇总的考勤
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/statistics.ts")]
pub struct StudentAbsenceSummary {
    pub student_id: i64,
    pub present: i64,
    pub absent: i64,
    pub justified: i64,
    pub unjustified: i64,
    pub absence_threshold: Option<i64>,
    pub exceeds_threshold: bool,
}
