use serde::{Deserialize, Deserializer};

/// 区分“字段缺省”与“显式为 null”
///
/// 配合 `#[serde(default, deserialize_with = "deserialize_some")]` 用在
/// `Option<Option<T>>` 字段上：缺省得到 `None`，`null` 得到 `Some(None)`。
pub fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "deserialize_some")]
        notes: Option<Option<String>>,
    }

    #[test]
    fn test_missing_field_is_none() {
        let patch: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(patch.notes, None);
    }

    #[test]
    fn test_null_field_is_some_none() {
        let patch: Patch = serde_json::from_str(r#"{"notes": null}"#).unwrap();
        assert_eq!(patch.notes, Some(None));
    }

    #[test]
    fn test_value_field_is_some_some() {
        let patch: Patch = serde_json::from_str(r#"{"notes": "late"}"#).unwrap();
        assert_eq!(patch.notes, Some(Some("late".to_string())));
    }
}
