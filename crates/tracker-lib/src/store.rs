//! In-memory issue store.
//!
//! The collection preserves insertion order: creation order is the
//! default list order and the stable-sort tiebreak. There is no delete
//! operation; records live for the lifetime of the process.

use chrono::Utc;

use crate::error::{Result, TrackerError};
use crate::model::{DEFAULT_PRIORITY, DEFAULT_STATUS, Issue, NewIssue, UpdateIssue};
use crate::util;

const ID_PREFIX: &str = "it";

/// In-memory issue store.
///
/// All data lives in memory. The store is single-writer; callers that
/// share it across tasks wrap it in a lock and hold the write guard for
/// the duration of `create`/`update`.
#[derive(Debug, Default)]
pub struct IssueStore {
    issues: Vec<Issue>,
}

impl IssueStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { issues: Vec::new() }
    }

    /// Create a store seeded with the stock sample issues.
    #[must_use]
    pub fn with_samples() -> Self {
        let mut store = Self::new();
        let seeds = [
            NewIssue {
                title: Some("Implement user authentication".to_string()),
                description: Some("Users should be able to sign up and log in.".to_string()),
                status: Some("In Progress".to_string()),
                priority: Some("High".to_string()),
                assignee: Some("Alice".to_string()),
            },
            NewIssue {
                title: Some("Fix button styling on the main page".to_string()),
                description: Some("The primary button has incorrect padding.".to_string()),
                status: Some(DEFAULT_STATUS.to_string()),
                priority: Some("Low".to_string()),
                assignee: Some("Bob".to_string()),
            },
        ];

        for seed in &seeds {
            if let Err(err) = store.create(seed) {
                tracing::warn!(%err, "skipping invalid seed issue");
            }
        }
        store
    }

    // ========================================================================
    // CRUD
    // ========================================================================

    /// Create a new issue in the store.
    ///
    /// All-or-nothing: on error the collection is unchanged.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the title is absent or empty.
    pub fn create(&mut self, input: &NewIssue) -> Result<Issue> {
        if input
            .title
            .as_deref()
            .is_none_or(|title| title.trim().is_empty())
        {
            return Err(TrackerError::validation("title", "is required"));
        }

        let now = Utc::now();
        let title = input.title.clone().unwrap_or_default();
        let description = input.description.clone().unwrap_or_default();
        let id = util::generate_id(
            ID_PREFIX,
            &title,
            &description,
            now,
            self.issues.len(),
            |candidate| self.issues.iter().any(|issue| issue.id == candidate),
        );

        let issue = Issue {
            id,
            title,
            description,
            status: input
                .status
                .clone()
                .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            priority: input
                .priority
                .clone()
                .unwrap_or_else(|| DEFAULT_PRIORITY.to_string()),
            assignee: input.assignee.clone(),
            created_at: now,
            updated_at: now,
        };

        self.issues.push(issue.clone());
        tracing::debug!(id = %issue.id, "issue created");

        Ok(issue)
    }

    /// Get a single issue by ID, as a point-in-time copy.
    ///
    /// # Errors
    ///
    /// Returns `IssueNotFound` if the issue doesn't exist.
    pub fn get(&self, id: &str) -> Result<Issue> {
        self.issues
            .iter()
            .find(|issue| issue.id == id)
            .cloned()
            .ok_or_else(|| TrackerError::IssueNotFound { id: id.to_string() })
    }

    /// Update an existing issue.
    ///
    /// Present fields overwrite; absent fields are retained. `assignee`
    /// distinguishes an explicit clear (`Some(None)`) from absence.
    /// `updated_at` is refreshed even when no field value changed.
    ///
    /// Title non-emptiness is deliberately NOT re-checked here, matching
    /// the reference behavior of the create/update asymmetry.
    ///
    /// # Errors
    ///
    /// Returns `IssueNotFound` if the issue doesn't exist.
    pub fn update(&mut self, id: &str, update: &UpdateIssue) -> Result<Issue> {
        let issue = self
            .issues
            .iter_mut()
            .find(|issue| issue.id == id)
            .ok_or_else(|| TrackerError::IssueNotFound { id: id.to_string() })?;

        if let Some(ref title) = update.title {
            issue.title.clone_from(title);
        }
        if let Some(ref description) = update.description {
            issue.description.clone_from(description);
        }
        if let Some(ref status) = update.status {
            issue.status.clone_from(status);
        }
        if let Some(ref priority) = update.priority {
            issue.priority.clone_from(priority);
        }
        if let Some(ref assignee) = update.assignee {
            issue.assignee.clone_from(assignee);
        }

        issue.updated_at = Utc::now();
        tracing::debug!(id = %issue.id, "issue updated");

        Ok(issue.clone())
    }

    // ========================================================================
    // Snapshots
    // ========================================================================

    /// The full collection in insertion order, as owned copies.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Issue> {
        self.issues.clone()
    }

    /// Get the total number of issues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}
