use super::entities::GroupType;
use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student-group.ts")]
pub struct StudentGroupListQuery {
    pub course_id: Option<i64>,
    pub group_type: Option<GroupType>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student-group.ts")]
pub struct CreateStudentGroupRequest {
    pub name: String,
    pub group_type: GroupType,
    pub course_id: i64,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student-group.ts")]
pub struct UpdateStudentGroupRequest {
    pub name: Option<String>,
    pub group_type: Option<GroupType>,
    pub course_id: Option<i64>,
}

// 把学生加入分组
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student-group.ts")]
pub struct AssignStudentRequest {
    pub student_id: i64,
}

// 分组关系过滤条件（存储层）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student-group.ts")]
pub struct GroupAssignmentQuery {
    pub student_id: Option<i64>,
    pub group_id: Option<i64>,
}
