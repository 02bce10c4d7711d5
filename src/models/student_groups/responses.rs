use super::entities::{StudentGroup, StudentGroupAssignment};
use crate::models::students::entities::Student;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student-group.ts")]
pub struct StudentGroupResponse {
    pub group: StudentGroup,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student-group.ts")]
pub struct StudentGroupListResponse {
    pub items: Vec<StudentGroup>,
    pub total: i64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student-group.ts")]
pub struct GroupAssignmentResponse {
    pub assignment: StudentGroupAssignment,
}

// 分组内的学生
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student-group.ts")]
pub struct GroupStudentsResponse {
    pub group_id: i64,
    pub items: Vec<Student>,
}
