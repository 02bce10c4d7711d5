use crate::models::deserialize_some;
use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/module-element.ts")]
pub struct ModuleElementListQuery {
    pub module_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/module-element.ts")]
pub struct CreateModuleElementRequest {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    pub module_id: i64,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/module-element.ts")]
pub struct UpdateModuleElementRequest {
    pub name: Option<String>,
    pub code: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub description: Option<Option<String>>,
    pub module_id: Option<i64>,
}

// 分配教师到模块单元
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/module-element.ts")]
pub struct AssignTeacherRequest {
    pub teacher_id: i64,
}

// 教师分配关系过滤条件（存储层）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/module-element.ts")]
pub struct TeacherModuleElementQuery {
    pub teacher_id: Option<i64>,
    pub module_element_id: Option<i64>,
}
