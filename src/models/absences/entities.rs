use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 考勤状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/absence.ts")]
pub enum AbsenceStatus {
    Present,     // 出勤
    Absent,      // 缺勤
    Justified,   // 已请假
    Unjustified, // 无故缺勤（已核实）
}

impl AbsenceStatus {
    pub const PRESENT: &'static str = "present";
    pub const ABSENT: &'static str = "absent";
    pub const JUSTIFIED: &'static str = "justified";
    pub const UNJUSTIFIED: &'static str = "unjustified";
}

impl<'de> Deserialize<'de> for AbsenceStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的考勤状态: '{s}'. 支持的状态: present, absent, justified, unjustified"
            ))
        })
    }
}

impl std::fmt::Display for AbsenceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AbsenceStatus::Present => write!(f, "{}", AbsenceStatus::PRESENT),
            AbsenceStatus::Absent => write!(f, "{}", AbsenceStatus::ABSENT),
            AbsenceStatus::Justified => write!(f, "{}", AbsenceStatus::JUSTIFIED),
            AbsenceStatus::Unjustified => write!(f, "{}", AbsenceStatus::UNJUSTIFIED),
        }
    }
}

impl std::str::FromStr for AbsenceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            AbsenceStatus::PRESENT => Ok(AbsenceStatus::Present),
            AbsenceStatus::ABSENT => Ok(AbsenceStatus::Absent),
            AbsenceStatus::JUSTIFIED => Ok(AbsenceStatus::Justified),
            AbsenceStatus::UNJUSTIFIED => Ok(AbsenceStatus::Unjustified),
            _ => Err(format!("Invalid absence status: {s}")),
        }
    }
}

// 考勤记录：某个学生在某个课次的出勤情况
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/absence.ts")]
pub struct Absence {
    pub id: i64,
    pub session_id: i64,
    pub student_id: i64,
    pub status: AbsenceStatus,
    pub notes: Option<String>,
}

impl Absence {
    /// 统计口径：只有 absent 计入缺勤次数
    pub fn is_absent(&self) -> bool {
        self.status == AbsenceStatus::Absent
    }
}
