use super::entities::SessionType;
use crate::models::deserialize_some;
use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/session.ts")]
pub struct SessionListQuery {
    pub module_element_id: Option<i64>,
    pub teacher_id: Option<i64>,
    pub group_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/session.ts")]
pub struct CreateSessionRequest {
    pub date: chrono::DateTime<chrono::Utc>,
    pub session_type: SessionType,
    pub module_element_id: i64,
    pub teacher_id: i64,
    #[serde(default)]
    pub group_id: Option<i64>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/session.ts")]
pub struct UpdateSessionRequest {
    pub date: Option<chrono::DateTime<chrono::Utc>>,
    pub session_type: Option<SessionType>,
    pub module_element_id: Option<i64>,
    pub teacher_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub group_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub notes: Option<Option<String>>,
}
