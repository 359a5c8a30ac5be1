use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{ResumeDraft, SavedResume};

/// Owner-scoped storage for saved resumes.
///
/// Carried in `AppState` as `Arc<dyn ResumeStore>`.
#[async_trait]
pub trait ResumeStore: Send + Sync {
    async fn create(&self, owner: Uuid, draft: &ResumeDraft) -> Result<SavedResume, AppError>;

    /// Newest first.
    async fn list(&self, owner: Uuid) -> Result<Vec<SavedResume>, AppError>;

    async fn get(&self, owner: Uuid, id: Uuid) -> Result<Option<SavedResume>, AppError>;

    /// Replaces every editable field. `None` if no such record belongs to `owner`.
    async fn update(
        &self,
        owner: Uuid,
        id: Uuid,
        draft: &ResumeDraft,
    ) -> Result<Option<SavedResume>, AppError>;

    /// `false` if no such record belongs to `owner`.
    async fn delete(&self, owner: Uuid, id: Uuid) -> Result<bool, AppError>;
}

/// PostgreSQL-backed store over the `saved_resumes` table.
#[derive(Clone)]
pub struct PgResumeStore {
    pool: PgPool,
}

impl PgResumeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResumeStore for PgResumeStore {
    async fn create(&self, owner: Uuid, draft: &ResumeDraft) -> Result<SavedResume, AppError> {
        let saved = sqlx::query_as::<_, SavedResume>(
            r#"
            INSERT INTO saved_resumes
                (id, user_id, title, original_resume, job_description, tailored_resume)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(owner)
        .bind(&draft.title)
        .bind(&draft.original_resume)
        .bind(&draft.job_description)
        .bind(&draft.tailored_resume)
        .fetch_one(&self.pool)
        .await?;

        info!("Saved resume {} for user {owner}", saved.id);
        Ok(saved)
    }

    async fn list(&self, owner: Uuid) -> Result<Vec<SavedResume>, AppError> {
        Ok(sqlx::query_as::<_, SavedResume>(
            "SELECT * FROM saved_resumes WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn get(&self, owner: Uuid, id: Uuid) -> Result<Option<SavedResume>, AppError> {
        Ok(sqlx::query_as::<_, SavedResume>(
            "SELECT * FROM saved_resumes WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn update(
        &self,
        owner: Uuid,
        id: Uuid,
        draft: &ResumeDraft,
    ) -> Result<Option<SavedResume>, AppError> {
        Ok(sqlx::query_as::<_, SavedResume>(
            r#"
            UPDATE saved_resumes
            SET title = $3, original_resume = $4, job_description = $5, tailored_resume = $6
            WHERE id = $1 AND user_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(owner)
        .bind(&draft.title)
        .bind(&draft.original_resume)
        .bind(&draft.job_description)
        .bind(&draft.tailored_resume)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn delete(&self, owner: Uuid, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM saved_resumes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            info!("Deleted resume {id} for user {owner}");
        }
        Ok(deleted)
    }
}
