//! 考勤记录存储操作

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::absences::{
    entities::Absence,
    requests::{AbsenceListQuery, CreateAbsenceRequest, UpdateAbsenceRequest},
};
use tracing::debug;

fn build_absence(id: i64, req: CreateAbsenceRequest) -> Absence {
    Absence {
        id,
        session_id: req.session_id,
        student_id: req.student_id,
        status: req.status,
        notes: req.notes,
    }
}

impl MemoryStorage {
    pub async fn create_absence_impl(&self, req: CreateAbsenceRequest) -> Result<Absence> {
        let absence = self
            .absences
            .write()
            .await
            .insert_with(|id| build_absence(id, req));
        debug!(
            "Recorded absence {} (session {}, student {}, {})",
            absence.id, absence.session_id, absence.student_id, absence.status
        );
        Ok(absence)
    }

    /// 逐条插入；同一批次持有写锁，但不会在失败时回滚已写入的记录
    pub async fn batch_create_absences_impl(
        &self,
        reqs: Vec<CreateAbsenceRequest>,
    ) -> Result<Vec<Absence>> {
        let mut absences = self.absences.write().await;
        let created: Vec<Absence> = reqs
            .into_iter()
            .map(|req| absences.insert_with(|id| build_absence(id, req)))
            .collect();
        debug!("Batch recorded {} absences", created.len());
        Ok(created)
    }

    pub async fn get_absence_by_id_impl(&self, id: i64) -> Result<Option<Absence>> {
        Ok(self.absences.read().await.get(id))
    }

    pub async fn list_absences_impl(&self, query: AbsenceListQuery) -> Result<Vec<Absence>> {
        Ok(self.absences.read().await.filter(|a| {
            query.session_id.is_none_or(|s| a.session_id == s)
                && query.student_id.is_none_or(|s| a.student_id == s)
                && query.status.is_none_or(|status| a.status == status)
        }))
    }

    pub async fn update_absence_impl(
        &self,
        id: i64,
        update: UpdateAbsenceRequest,
    ) -> Result<Option<Absence>> {
        Ok(self.absences.write().await.update_with(id, |absence| {
            if let Some(session_id) = update.session_id {
                absence.session_id = session_id;
            }
            if let Some(student_id) = update.student_id {
                absence.student_id = student_id;
            }
            if let Some(status) = update.status {
                absence.status = status;
            }
            if let Some(notes) = update.notes {
                absence.notes = notes;
            }
        }))
    }

    pub async fn delete_absence_impl(&self, id: i64) -> Result<bool> {
        let removed = self.absences.write().await.remove(id);
        debug!("Delete absence {}: {}", id, removed);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use crate::models::absences::entities::AbsenceStatus;
    use crate::models::absences::requests::{
        AbsenceListQuery, CreateAbsenceRequest, UpdateAbsenceRequest,
    };
    use crate::storage::{MemoryStorage, Storage};

    fn record(session_id: i64, student_id: i64, status: AbsenceStatus) -> CreateAbsenceRequest {
        CreateAbsenceRequest {
            session_id,
            student_id,
            status,
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_batch_preserves_order_and_count() {
        let storage = MemoryStorage::new();
        // 先占用一个编号，确认批量插入继续递增
        storage
            .create_absence(record(9, 9, AbsenceStatus::Present))
            .await
            .unwrap();

        let inputs = vec![
            record(1, 10, AbsenceStatus::Absent),
            record(1, 11, AbsenceStatus::Justified),
            CreateAbsenceRequest {
                notes: Some("arrived 20 min late".into()),
                ..record(1, 12, AbsenceStatus::Present)
            },
        ];
        let created = storage.batch_create_absences(inputs.clone()).await.unwrap();

        assert_eq!(created.len(), 3);
        for (absence, input) in created.iter().zip(inputs.iter()) {
            assert_eq!(absence.session_id, input.session_id);
            assert_eq!(absence.student_id, input.student_id);
            assert_eq!(absence.status, input.status);
            assert_eq!(absence.notes, input.notes);
        }
        let ids: Vec<i64> = created.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[tokio::test]
    async fn test_empty_batch_creates_nothing() {
        let storage = MemoryStorage::new();
        let created = storage.batch_create_absences(Vec::new()).await.unwrap();
        assert!(created.is_empty());
        assert!(
            storage
                .list_absences(AbsenceListQuery::default())
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_absences_by_session_and_student() {
        let storage = MemoryStorage::new();
        storage
            .batch_create_absences(vec![
                record(1, 1, AbsenceStatus::Absent),
                record(1, 2, AbsenceStatus::Present),
                record(2, 1, AbsenceStatus::Unjustified),
            ])
            .await
            .unwrap();

        let session_one = storage.list_absences_by_session(1).await.unwrap();
        assert_eq!(session_one.len(), 2);
        let student_one = storage.list_absences_by_student(1).await.unwrap();
        assert_eq!(
            student_one.iter().map(|a| a.session_id).collect::<Vec<_>>(),
            vec![1, 2]
        );

        let absent_only = storage
            .list_absences(AbsenceListQuery {
                status: Some(AbsenceStatus::Absent),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(absent_only.len(), 1);
    }

    #[tokio::test]
    async fn test_status_change_keeps_notes() {
        let storage = MemoryStorage::new();
        let absence = storage
            .create_absence(CreateAbsenceRequest {
                notes: Some("medical certificate pending".into()),
                ..record(1, 1, AbsenceStatus::Absent)
            })
            .await
            .unwrap();

        let updated = storage
            .update_absence(
                absence.id,
                UpdateAbsenceRequest {
                    status: Some(AbsenceStatus::Justified),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, AbsenceStatus::Justified);
        assert_eq!(updated.notes, absence.notes);
        assert_eq!(updated.session_id, absence.session_id);
    }
}
