use super::entities::Absence;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/absence.ts")]
pub struct AbsenceResponse {
    pub absence: Absence,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/absence.ts")]
pub struct AbsenceListResponse {
    pub items: Vec<Absence>,
    pub total: i64,
}
