use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::{CanonicalRecord, QueryOptions},
    routes::AppState,
    services::{lookup_title, LookupRequest},
};

#[derive(Debug, Deserialize)]
pub struct LookupParams {
    title: String,
    search_type: Option<String>,
    /// Sorting is requested by supplying the criteria
    sort_by: Option<String>,
    limit: Option<u32>,
    offset: Option<u32>,
    exact: Option<bool>,
}

impl LookupParams {
    fn into_request(self) -> LookupRequest {
        let defaults = QueryOptions::default();
        LookupRequest {
            options: QueryOptions {
                sort_results: self.sort_by.is_some(),
                sort_by: self.sort_by.unwrap_or(defaults.sort_by),
                search_type: self.search_type.unwrap_or(defaults.search_type),
                limit: self.limit.unwrap_or(defaults.limit),
                offset: self.offset.unwrap_or(defaults.offset),
                title: self.title,
            },
            exact_matches_only: self.exact.unwrap_or(true),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LookupResponse {
    pub games: Vec<CanonicalRecord>,
    pub warning: Option<String>,
}

/// Handler for title lookup
pub async fn lookup(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<LookupParams>,
) -> AppResult<Json<LookupResponse>> {
    if params.title.trim().is_empty() {
        return Err(AppError::InvalidInput("Title cannot be empty".to_string()));
    }

    let request = params.into_request();

    tracing::info!(
        request_id = %request_id,
        title = %request.options.title,
        search_type = %request.options.search_type,
        "Processing title lookup"
    );

    let outcome = lookup_title(state.catalog_provider.clone(), &state.endpoint, &request).await?;

    Ok(Json(LookupResponse {
        games: outcome.games,
        warning: outcome.warning,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_defaults() {
        let params = LookupParams {
            title: "Hades".to_string(),
            search_type: None,
            sort_by: None,
            limit: None,
            offset: None,
            exact: None,
        };
        let request = params.into_request();
        assert_eq!(request.options, QueryOptions::new("Hades"));
        assert!(request.exact_matches_only);
    }

    #[test]
    fn test_sort_by_enables_sorting() {
        let params = LookupParams {
            title: "Doom".to_string(),
            search_type: Some("name like".to_string()),
            sort_by: Some("rating desc".to_string()),
            limit: Some(5),
            offset: Some(10),
            exact: Some(false),
        };
        let request = params.into_request();
        assert!(request.options.sort_results);
        assert_eq!(request.options.sort_by, "rating desc");
        assert_eq!(request.options.limit, 5);
        assert_eq!(request.options.offset, 10);
        assert!(!request.exact_matches_only);
    }
}
