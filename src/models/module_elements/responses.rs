use super::entities::{ModuleElement, TeacherModuleElement};
use crate::models::users::entities::User;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/module-element.ts")]
pub struct ModuleElementResponse {
    pub module_element: ModuleElement,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/module-element.ts")]
pub struct ModuleElementListResponse {
    pub items: Vec<ModuleElement>,
    pub total: i64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/module-element.ts")]
pub struct TeacherAssignmentResponse {
    pub assignment: TeacherModuleElement,
}

// 某个模块单元的授课教师
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/module-element.ts")]
pub struct ModuleElementTeachersResponse {
    pub module_element_id: i64,
    pub items: Vec<User>,
}
