//! Endpoint handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use tracker_lib::query::{self, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, ListQuery, SortOrder};
use tracker_lib::{Issue, NewIssue, QueryPage, TrackerError, UpdateIssue};

use super::AppState;
use crate::error::ApiError;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// POST /issues
pub async fn create_issue(
    State(state): State<AppState>,
    payload: Result<Json<NewIssue>, JsonRejection>,
) -> Result<(StatusCode, Json<Issue>), ApiError> {
    let Json(input) = payload.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    let issue = state.store.write().await.create(&input)?;
    Ok((StatusCode::CREATED, Json(issue)))
}

/// GET /issues/{id}
pub async fn get_issue(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Issue>, ApiError> {
    let issue = state.store.read().await.get(&id)?;
    Ok(Json(issue))
}

/// PUT /issues/{id}
pub async fn update_issue(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateIssue>, JsonRejection>,
) -> Result<Json<Issue>, ApiError> {
    let Json(update) = payload.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    let issue = state.store.write().await.update(&id, &update)?;
    Ok(Json(issue))
}

/// GET /issues
pub async fn list_issues(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<QueryPage>, ApiError> {
    let list_query = params.into_query()?;
    let snapshot = state.store.read().await.snapshot();
    Ok(Json(query::execute(&snapshot, &list_query)))
}

/// Raw list-endpoint query parameters, before coercion.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    search: Option<String>,
    status: Option<String>,
    priority: Option<String>,
    assignee: Option<String>,
    sort_by: Option<String>,
    sort_order: Option<String>,
    page: Option<String>,
    page_size: Option<String>,
}

impl ListParams {
    /// Coerce raw text parameters into an executable query.
    ///
    /// Non-numeric or non-positive `page`/`pageSize` are a validation
    /// error (400), not a silent default and not a server error.
    fn into_query(self) -> Result<ListQuery, TrackerError> {
        Ok(ListQuery {
            search: self.search,
            status: self.status,
            priority: self.priority,
            assignee: self.assignee,
            sort_by: self.sort_by,
            sort_order: SortOrder::from_param(self.sort_order.as_deref()),
            page: parse_positive("page", self.page.as_deref(), DEFAULT_PAGE)?,
            page_size: parse_positive("pageSize", self.page_size.as_deref(), DEFAULT_PAGE_SIZE)?,
        })
    }
}

fn parse_positive(param: &str, value: Option<&str>, default: usize) -> Result<usize, TrackerError> {
    let Some(raw) = value else {
        return Ok(default);
    };
    match raw.parse::<usize>() {
        Ok(parsed) if parsed >= 1 => Ok(parsed),
        _ => Err(TrackerError::invalid_param(
            param,
            "must be a positive integer",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_query_applies_defaults() {
        let query = ListParams::default().into_query().unwrap();
        assert_eq!(query.page, DEFAULT_PAGE);
        assert_eq!(query.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(query.sort_order, SortOrder::Asc);
    }

    #[test]
    fn test_into_query_parses_supplied_values() {
        let params = ListParams {
            page: Some("3".to_string()),
            page_size: Some("25".to_string()),
            sort_order: Some("desc".to_string()),
            ..Default::default()
        };
        let query = params.into_query().unwrap();
        assert_eq!(query.page, 3);
        assert_eq!(query.page_size, 25);
        assert_eq!(query.sort_order, SortOrder::Desc);
    }

    #[test]
    fn test_into_query_rejects_non_numeric_page() {
        let params = ListParams {
            page: Some("abc".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            params.into_query(),
            Err(TrackerError::InvalidParam { .. })
        ));
    }

    #[test]
    fn test_into_query_rejects_zero_page_size() {
        let params = ListParams {
            page_size: Some("0".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            params.into_query(),
            Err(TrackerError::InvalidParam { .. })
        ));
    }
}
