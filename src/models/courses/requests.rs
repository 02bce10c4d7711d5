use super::entities::DEFAULT_ABSENCE_THRESHOLD;
use crate::models::deserialize_some;
use serde::Deserialize;
use ts_rs::TS;

// 课程列表查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseListQuery {
    pub department_id: Option<i64>,
}

// 课程创建请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CreateCourseRequest {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    pub department_id: i64,
    #[serde(default = "default_absence_threshold")]
    pub absence_threshold: i64,
}

fn default_absence_threshold() -> i64 {
    DEFAULT_ABSENCE_THRESHOLD
}

// 课程更新请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct UpdateCourseRequest {
    pub name: Option<String>,
    pub code: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub description: Option<Option<String>>,
    pub department_id: Option<i64>,
    pub absence_threshold: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_defaults_to_three() {
        let req: CreateCourseRequest = serde_json::from_str(
            r#"{"name": "Databases", "code": "CS310", "department_id": 2}"#,
        )
        .unwrap();
        assert_eq!(req.absence_threshold, 3);
        assert_eq!(req.description, None);
    }
}
