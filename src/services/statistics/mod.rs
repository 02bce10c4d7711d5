pub mod aggregate;
pub mod overview;
pub mod recent_activities;
pub mod top_absentees;

pub use aggregate::{
    collect_overview, collect_recent_activities, collect_student_absence_summary,
    collect_threshold_report, collect_top_absentees,
};

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::statistics::requests::LimitQuery;
use crate::storage::Storage;

pub struct StatisticsService {
    storage: Option<Arc<dyn Storage>>,
}

impl StatisticsService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    // 仪表盘总览
    pub async fn get_overview(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        overview::get_overview(self, request).await
    }

    // 缺勤排行
    pub async fn get_top_absentees(
        &self,
        query: LimitQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        top_absentees::get_top_absentees(self, query, request).await
    }

    // 最近课次
    pub async fn get_recent_activities(
        &self,
        query: LimitQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        recent_activities::get_recent_activities(self, query, request).await
    }
}
