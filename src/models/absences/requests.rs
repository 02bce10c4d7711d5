use super::entities::AbsenceStatus;
use crate::models::deserialize_some;
use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/absence.ts")]
pub struct AbsenceListQuery {
    pub session_id: Option<i64>,
    pub student_id: Option<i64>,
    pub status: Option<AbsenceStatus>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/absence.ts")]
pub struct CreateAbsenceRequest {
    pub session_id: i64,
    pub student_id: i64,
    pub status: AbsenceStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/absence.ts")]
pub struct UpdateAbsenceRequest {
    pub session_id: Option<i64>,
    pub student_id: Option<i64>,
    pub status: Option<AbsenceStatus>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub notes: Option<Option<String>>,
}

// 批量录入一个或多个课次的考勤
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/absence.ts")]
pub struct BatchCreateAbsencesRequest {
    pub absences: Vec<CreateAbsenceRequest>,
}
