use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 模块单元：课次与教师分配都挂在这一层
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/module-element.ts")]
pub struct ModuleElement {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub module_id: i64,
}

// 教师与模块单元的多对多关联
//
// (teacher_id, module_element_id) 不保证唯一，移除时只删除第一条匹配记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/module-element.ts")]
pub struct TeacherModuleElement {
    pub id: i64,
    pub teacher_id: i64,
    pub module_element_id: i64,
}
