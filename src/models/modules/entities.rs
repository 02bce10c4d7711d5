use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 模块实体，隶属于课程
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/module.ts")]
pub struct Module {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub course_id: i64,
}
