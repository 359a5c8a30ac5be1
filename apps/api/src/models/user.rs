use serde::Deserialize;
use uuid::Uuid;

/// The authenticated caller, as reported by the identity service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Identity {
    #[serde(rename = "id")]
    pub user_id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
}
