use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 院系实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/department.ts")]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}
