//! 课次存储操作

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::sessions::{
    entities::Session,
    requests::{CreateSessionRequest, SessionListQuery, UpdateSessionRequest},
};
use tracing::debug;

impl MemoryStorage {
    pub async fn create_session_impl(&self, req: CreateSessionRequest) -> Result<Session> {
        let session = self.sessions.write().await.insert_with(|id| Session {
            id,
            date: req.date,
            session_type: req.session_type,
            module_element_id: req.module_element_id,
            teacher_id: req.teacher_id,
            group_id: req.group_id,
            notes: req.notes,
        });
        debug!("Created session {} on {}", session.id, session.date);
        Ok(session)
    }

    pub async fn get_session_by_id_impl(&self, id: i64) -> Result<Option<Session>> {
        Ok(self.sessions.read().await.get(id))
    }

    pub async fn list_sessions_impl(&self, query: SessionListQuery) -> Result<Vec<Session>> {
        Ok(self.sessions.read().await.filter(|s| {
            query
                .module_element_id
                .is_none_or(|e| s.module_element_id == e)
                && query.teacher_id.is_none_or(|t| s.teacher_id == t)
                && query.group_id.is_none_or(|g| s.group_id == Some(g))
        }))
    }

    pub async fn update_session_impl(
        &self,
        id: i64,
        update: UpdateSessionRequest,
    ) -> Result<Option<Session>> {
        Ok(self.sessions.write().await.update_with(id, |session| {
            if let Some(date) = update.date {
                session.date = date;
            }
            if let Some(session_type) = update.session_type {
                session.session_type = session_type;
            }
            if let Some(module_element_id) = update.module_element_id {
                session.module_element_id = module_element_id;
            }
            if let Some(teacher_id) = update.teacher_id {
                session.teacher_id = teacher_id;
            }
            if let Some(group_id) = update.group_id {
                session.group_id = group_id;
            }
            if let Some(notes) = update.notes {
                session.notes = notes;
            }
        }))
    }

    /// 删除课次，已有考勤记录保留
    pub async fn delete_session_impl(&self, id: i64) -> Result<bool> {
        let removed = self.sessions.write().await.remove(id);
        debug!("Delete session {}: {}", id, removed);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::models::sessions::entities::SessionType;
    use crate::models::sessions::requests::{
        CreateSessionRequest, SessionListQuery, UpdateSessionRequest,
    };
    use crate::storage::{MemoryStorage, Storage};

    fn new_session(teacher_id: i64, group_id: Option<i64>) -> CreateSessionRequest {
        CreateSessionRequest {
            date: Utc.with_ymd_and_hms(2024, 3, 4, 8, 30, 0).unwrap(),
            session_type: SessionType::Td,
            module_element_id: 1,
            teacher_id,
            group_id,
            notes: Some("Room B12".into()),
        }
    }

    #[tokio::test]
    async fn test_filter_sessions_by_teacher_and_group() {
        let storage = MemoryStorage::new();
        storage.create_session(new_session(1, Some(10))).await.unwrap();
        storage.create_session(new_session(2, Some(10))).await.unwrap();
        storage.create_session(new_session(1, None)).await.unwrap();

        let by_teacher = storage
            .list_sessions(SessionListQuery {
                teacher_id: Some(1),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(by_teacher.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 3]);

        let by_group = storage
            .list_sessions(SessionListQuery {
                group_id: Some(10),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(by_group.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_clear_notes_keeps_date() {
        let storage = MemoryStorage::new();
        let session = storage.create_session(new_session(1, Some(3))).await.unwrap();

        let updated = storage
            .update_session(
                session.id,
                UpdateSessionRequest {
                    notes: Some(None),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.notes, None);
        assert_eq!(updated.date, session.date);
        assert_eq!(updated.group_id, Some(3));
    }

    #[tokio::test]
    async fn test_update_missing_session_is_none() {
        let storage = MemoryStorage::new();
        let result = storage
            .update_session(5, UpdateSessionRequest::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
