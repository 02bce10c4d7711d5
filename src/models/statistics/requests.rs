use serde::Deserialize;
use ts_rs::TS;

// 排行/最近活动的条数参数，缺省时使用配置中的默认值
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/statistics.ts")]
pub struct LimitQuery {
    pub limit: Option<usize>,
}
