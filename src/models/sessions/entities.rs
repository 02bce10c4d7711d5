use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课次类型
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/session.ts")]
pub enum SessionType {
    #[serde(rename = "course")]
    Course, // 大课
    #[serde(rename = "TD")]
    Td, // 习题课
    #[serde(rename = "TP")]
    Tp, // 实验课
}

impl<'de> Deserialize<'de> for SessionType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的课次类型: '{s}'. 支持的类型: course, TD, TP"
            ))
        })
    }
}

impl std::fmt::Display for SessionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionType::Course => write!(f, "course"),
            SessionType::Td => write!(f, "TD"),
            SessionType::Tp => write!(f, "TP"),
        }
    }
}

impl std::str::FromStr for SessionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "course" => Ok(SessionType::Course),
            "TD" => Ok(SessionType::Td),
            "TP" => Ok(SessionType::Tp),
            _ => Err(format!("Invalid session type: {s}")),
        }
    }
}

// 课次：某个模块单元在某一时间的一次授课
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/session.ts")]
pub struct Session {
    pub id: i64,
    pub date: chrono::DateTime<chrono::Utc>,
    pub session_type: SessionType,
    pub module_element_id: i64,
    pub teacher_id: i64,
    pub group_id: Option<i64>,
    pub notes: Option<String>,
}
