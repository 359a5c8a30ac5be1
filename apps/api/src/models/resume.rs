use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A saved resume / job description / tailored output triple, owned by one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SavedResume {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub original_resume: String,
    pub job_description: String,
    pub tailored_resume: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating or replacing a saved resume.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeDraft {
    pub title: String,
    pub original_resume: String,
    pub job_description: String,
    pub tailored_resume: String,
}

impl ResumeDraft {
    /// Every field is required and must contain more than whitespace.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("title", &self.title),
            ("originalResume", &self.original_resume),
            ("jobDescription", &self.job_description),
            ("tailoredResume", &self.tailored_resume),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_draft_reads_camel_case_and_tolerates_missing_fields() {
        let draft: ResumeDraft = serde_json::from_value(json!({
            "title": "Backend role",
            "originalResume": "resume"
        }))
        .unwrap();

        assert_eq!(draft.title, "Backend role");
        assert_eq!(draft.original_resume, "resume");
        assert_eq!(draft.missing_fields(), vec!["jobDescription", "tailoredResume"]);
    }

    #[test]
    fn test_complete_draft_has_no_missing_fields() {
        let draft = ResumeDraft {
            title: "t".to_string(),
            original_resume: "o".to_string(),
            job_description: "j".to_string(),
            tailored_resume: "r".to_string(),
        };
        assert!(draft.missing_fields().is_empty());
    }

    #[test]
    fn test_whitespace_title_is_missing() {
        let draft = ResumeDraft {
            title: "  ".to_string(),
            original_resume: "o".to_string(),
            job_description: "j".to_string(),
            tailored_resume: "r".to_string(),
        };
        assert_eq!(draft.missing_fields(), vec!["title"]);
    }

    #[test]
    fn test_saved_resume_serializes_camel_case() {
        let resume = SavedResume {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "t".to_string(),
            original_resume: "o".to_string(),
            job_description: "j".to_string(),
            tailored_resume: "r".to_string(),
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&resume).unwrap();
        assert_eq!(value["tailoredResume"], "r");
        assert_eq!(value["userId"], json!(resume.user_id));
        assert!(value.get("created_at").is_none());
    }
}
