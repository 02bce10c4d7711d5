use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 课程默认的缺勤阈值
pub const DEFAULT_ABSENCE_THRESHOLD: i64 = 3;

// 课程实体
//
// absence_threshold 只用于报表标记，不会触发任何通知或限制
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub department_id: i64,
    pub absence_threshold: i64,
}

impl Course {
    /// 缺勤次数严格大于阈值才算超标
    pub fn exceeds_threshold(&self, absent_count: i64) -> bool {
        absent_count > self.absence_threshold
    }
}
