use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 分组类型：TD（习题课）/ TP（实验课）
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student-group.ts")]
pub enum GroupType {
    #[serde(rename = "TD")]
    Td,
    #[serde(rename = "TP")]
    Tp,
}

impl<'de> Deserialize<'de> for GroupType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!("无效的分组类型: '{s}'. 支持的类型: TD, TP"))
        })
    }
}

impl std::fmt::Display for GroupType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupType::Td => write!(f, "TD"),
            GroupType::Tp => write!(f, "TP"),
        }
    }
}

impl std::str::FromStr for GroupType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TD" => Ok(GroupType::Td),
            "TP" => Ok(GroupType::Tp),
            _ => Err(format!("Invalid group type: {s}")),
        }
    }
}

// 学生分组
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student-group.ts")]
pub struct StudentGroup {
    pub id: i64,
    pub name: String,
    pub group_type: GroupType,
    pub course_id: i64,
}

// 学生与分组的多对多关联
//
// (student_id, group_id) 不保证唯一，移除时只删除第一条匹配记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student-group.ts")]
pub struct StudentGroupAssignment {
    pub id: i64,
    pub student_id: i64,
    pub group_id: i64,
}
