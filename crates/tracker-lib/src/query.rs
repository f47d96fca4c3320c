//! Query pipeline for listing issues.
//!
//! [`execute`] is a pure function over a store snapshot. The stages run
//! in a fixed order: title search, then exact-match filters, then sort,
//! then pagination. Each stage consumes the output of the previous one.

use serde::Serialize;

use crate::model::Issue;

/// Effective page number when none is supplied.
pub const DEFAULT_PAGE: usize = 1;

/// Effective page size when none is supplied.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Sort direction. Only the exact string "desc" selects descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse a raw `sortOrder` parameter; anything other than "desc"
    /// means ascending.
    #[must_use]
    pub fn from_param(value: Option<&str>) -> Self {
        if value == Some("desc") {
            Self::Desc
        } else {
            Self::Asc
        }
    }
}

/// Parameters for the list pipeline, after defaulting and coercion.
///
/// `page` and `page_size` are already-parsed effective values; the
/// request surface owns text-to-integer coercion.
#[derive(Debug, Clone)]
pub struct ListQuery {
    /// Case-insensitive substring match on `title` only.
    pub search: Option<String>,
    /// Exact-match filter (case-sensitive).
    pub status: Option<String>,
    /// Exact-match filter (case-sensitive).
    pub priority: Option<String>,
    /// Exact-match filter (case-sensitive).
    pub assignee: Option<String>,
    /// Wire-format field name to sort by; unknown names are a no-op.
    pub sort_by: Option<String>,
    pub sort_order: SortOrder,
    /// 1-based page number.
    pub page: usize,
    pub page_size: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: None,
            status: None,
            priority: None,
            assignee: None,
            sort_by: None,
            sort_order: SortOrder::Asc,
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of query results.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryPage {
    pub issues: Vec<Issue>,
    /// Match count after search/filter/sort, before pagination.
    pub total: usize,
    /// Effective page number.
    pub page: usize,
    /// Effective page size.
    pub page_size: usize,
}

/// Run the list pipeline over a snapshot.
#[must_use]
pub fn execute(snapshot: &[Issue], query: &ListQuery) -> QueryPage {
    let mut matched: Vec<&Issue> = snapshot
        .iter()
        .filter(|issue| matches(issue, query))
        .collect();

    sort_issues(&mut matched, query.sort_by.as_deref(), query.sort_order);

    let total = matched.len();
    let start = query.page.saturating_sub(1).saturating_mul(query.page_size);
    let end = start.saturating_add(query.page_size).min(total);
    let issues = matched
        .get(start..end)
        .unwrap_or_default()
        .iter()
        .map(|issue| (*issue).clone())
        .collect();

    QueryPage {
        issues,
        total,
        page: query.page,
        page_size: query.page_size,
    }
}

fn matches(issue: &Issue, query: &ListQuery) -> bool {
    if let Some(ref term) = query.search {
        if !issue.title.to_lowercase().contains(&term.to_lowercase()) {
            return false;
        }
    }

    // Equality filters are ANDed; absent filters impose no constraint.
    if let Some(ref status) = query.status {
        if issue.status != *status {
            return false;
        }
    }
    if let Some(ref priority) = query.priority {
        if issue.priority != *priority {
            return false;
        }
    }
    if let Some(ref assignee) = query.assignee {
        if issue.assignee.as_deref() != Some(assignee.as_str()) {
            return false;
        }
    }

    true
}

fn sort_issues(issues: &mut [&Issue], sort_by: Option<&str>, order: SortOrder) {
    let Some(field) = sort_by else { return };

    let compare = |a: &Issue, b: &Issue| match field {
        "id" => a.id.cmp(&b.id),
        "title" => a.title.cmp(&b.title),
        "description" => a.description.cmp(&b.description),
        "status" => a.status.cmp(&b.status),
        "priority" => a.priority.cmp(&b.priority),
        // An unset assignee sorts before any present value.
        "assignee" => a.assignee.cmp(&b.assignee),
        "createdAt" | "created_at" | "created" => a.created_at.cmp(&b.created_at),
        "updatedAt" | "updated_at" | "updated" => a.updated_at.cmp(&b.updated_at),
        // Unknown field: leave the input order untouched.
        _ => std::cmp::Ordering::Equal,
    };

    match order {
        SortOrder::Asc => issues.sort_by(|a, b| compare(a, b)),
        // Comparator reversal keeps equal keys in insertion order;
        // reversing the sorted vector would not.
        SortOrder::Desc => issues.sort_by(|a, b| compare(b, a)),
    }
}
