//! Core data types for tracker-lib.
//!
//! Wire format is camelCase JSON; `assignee` is always present and
//! serialized as `null` when unset.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Status applied when a new issue supplies none.
pub const DEFAULT_STATUS: &str = "Open";

/// Priority applied when a new issue supplies none.
pub const DEFAULT_PRIORITY: &str = "Medium";

/// The primary issue entity.
///
/// `status` and `priority` are open text fields, not closed enums: the
/// API accepts any string for either. This is a documented weak
/// invariant, kept rather than silently tightened.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Unique ID (e.g., "it-4fa9c2"). Immutable after creation.
    pub id: String,

    /// Title. Non-empty after creation.
    pub title: String,

    /// Detailed description. Defaults to empty.
    #[serde(default)]
    pub description: String,

    /// Workflow status. Defaults to "Open".
    pub status: String,

    /// Priority label. Defaults to "Medium".
    pub priority: String,

    /// Assigned user.
    pub assignee: Option<String>,

    /// Creation timestamp. Never changes.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp. Refreshed on every update.
    pub updated_at: DateTime<Utc>,
}

/// Input for creating an issue.
///
/// Only `title` is required; the store applies documented defaults for
/// everything else.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIssue {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub assignee: Option<String>,
}

/// Fields to update on an issue. Absent fields retain their value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIssue {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,

    /// Double-Option: an absent key keeps the assignee, an explicit
    /// JSON `null` clears it.
    #[serde(default, deserialize_with = "double_option")]
    pub assignee: Option<Option<String>>,
}

fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_serializes_camel_case_with_null_assignee() {
        let issue = Issue {
            id: "it-abc123".to_string(),
            title: "T".to_string(),
            description: String::new(),
            status: DEFAULT_STATUS.to_string(),
            priority: DEFAULT_PRIORITY.to_string(),
            assignee: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let value = serde_json::to_value(&issue).unwrap();
        assert_eq!(value["status"], "Open");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        // assignee must be present even when unset
        assert!(value["assignee"].is_null());
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn new_issue_accepts_title_only() {
        let input: NewIssue = serde_json::from_str(r#"{"title":"T"}"#).unwrap();
        assert_eq!(input.title.as_deref(), Some("T"));
        assert!(input.description.is_none());
        assert!(input.assignee.is_none());
    }

    #[test]
    fn update_absent_assignee_is_retained() {
        let update: UpdateIssue = serde_json::from_str(r#"{"status":"Done"}"#).unwrap();
        assert_eq!(update.status.as_deref(), Some("Done"));
        assert!(update.assignee.is_none());
    }

    #[test]
    fn update_null_assignee_is_a_clear() {
        let update: UpdateIssue = serde_json::from_str(r#"{"assignee":null}"#).unwrap();
        assert_eq!(update.assignee, Some(None));
    }

    #[test]
    fn update_string_assignee_is_a_set() {
        let update: UpdateIssue = serde_json::from_str(r#"{"assignee":"Alice"}"#).unwrap();
        assert_eq!(update.assignee, Some(Some("Alice".to_string())));
    }
}
