//! In-process `ResumeStore` used by handler and router tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{ResumeDraft, SavedResume};
use crate::resumes::store::ResumeStore;

#[derive(Default)]
pub struct InMemoryResumeStore {
    records: Mutex<Vec<SavedResume>>,
}

impl InMemoryResumeStore {
    pub fn count(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl ResumeStore for InMemoryResumeStore {
    async fn create(&self, owner: Uuid, draft: &ResumeDraft) -> Result<SavedResume, AppError> {
        let saved = SavedResume {
            id: Uuid::new_v4(),
            user_id: owner,
            title: draft.title.clone(),
            original_resume: draft.original_resume.clone(),
            job_description: draft.job_description.clone(),
            tailored_resume: draft.tailored_resume.clone(),
            created_at: Utc::now(),
        };
        self.records.lock().unwrap().push(saved.clone());
        Ok(saved)
    }

    async fn list(&self, owner: Uuid) -> Result<Vec<SavedResume>, AppError> {
        let mut owned: Vec<SavedResume> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|r| r.user_id == owner)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn get(&self, owner: Uuid, id: Uuid) -> Result<Option<SavedResume>, AppError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id && r.user_id == owner)
            .cloned())
    }

    async fn update(
        &self,
        owner: Uuid,
        id: Uuid,
        draft: &ResumeDraft,
    ) -> Result<Option<SavedResume>, AppError> {
        let mut records = self.records.lock().unwrap();
        let Some(record) = records
            .iter_mut()
            .find(|r| r.id == id && r.user_id == owner)
        else {
            return Ok(None);
        };
        record.title = draft.title.clone();
        record.original_resume = draft.original_resume.clone();
        record.job_description = draft.job_description.clone();
        record.tailored_resume = draft.tailored_resume.clone();
        Ok(Some(record.clone()))
    }

    async fn delete(&self, owner: Uuid, id: Uuid) -> Result<bool, AppError> {
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| !(r.id == id && r.user_id == owner));
        Ok(records.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> ResumeDraft {
        ResumeDraft {
            title: title.to_string(),
            original_resume: "original".to_string(),
            job_description: "job".to_string(),
            tailored_resume: "tailored".to_string(),
        }
    }

    #[tokio::test]
    async fn test_saved_record_visible_only_to_owner() {
        let store = InMemoryResumeStore::default();
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();

        let saved = store.create(owner, &draft("Backend")).await.unwrap();

        let mine = store.list(owner).await.unwrap();
        assert!(mine.contains(&saved));
        let theirs = store.list(stranger).await.unwrap();
        assert!(!theirs.iter().any(|r| r.id == saved.id));
        assert!(store.get(stranger, saved.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let store = InMemoryResumeStore::default();
        let owner = Uuid::new_v4();
        store.create(owner, &draft("first")).await.unwrap();
        store.create(owner, &draft("second")).await.unwrap();

        let titles: Vec<_> = store
            .list(owner)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(titles, vec!["second", "first"]);
    }

    #[tokio::test]
    async fn test_update_and_delete_respect_owner() {
        let store = InMemoryResumeStore::default();
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        let saved = store.create(owner, &draft("mine")).await.unwrap();

        assert!(store
            .update(stranger, saved.id, &draft("hijacked"))
            .await
            .unwrap()
            .is_none());
        assert!(!store.delete(stranger, saved.id).await.unwrap());

        let updated = store
            .update(owner, saved.id, &draft("renamed"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.title, "renamed");
        assert_eq!(updated.created_at, saved.created_at);

        assert!(store.delete(owner, saved.id).await.unwrap());
        assert_eq!(store.count(), 0);
    }
}
