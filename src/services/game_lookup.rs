use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{CanonicalRecord, QueryOptions},
    services::{
        normalizer::normalize_records, providers::CatalogProvider, query_builder::build_query,
        response_validator::validate_candidates,
    },
};

/// A title lookup: query options plus the match policy
#[derive(Debug, Clone)]
pub struct LookupRequest {
    pub options: QueryOptions,
    pub exact_matches_only: bool,
}

impl LookupRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            options: QueryOptions::new(title),
            exact_matches_only: true,
        }
    }
}

/// Canonical records for a lookup, plus any query-mode fallback warning
#[derive(Debug, Clone, PartialEq)]
pub struct LookupOutcome {
    pub games: Vec<CanonicalRecord>,
    pub warning: Option<String>,
}

/// Runs a title through the whole pipeline
///
/// title → query → provider → candidate validation → normalization. "Not found" is an
/// empty `games` list, not an error; malformed records are.
pub async fn lookup_title(
    provider: Arc<dyn CatalogProvider>,
    endpoint: &str,
    request: &LookupRequest,
) -> AppResult<LookupOutcome> {
    let query = build_query(&request.options);
    let candidates = provider.query(endpoint, &query).await?;
    let candidate_count = candidates.len();

    let matched = validate_candidates(
        candidates,
        &request.options.title,
        request.exact_matches_only,
    );

    let games = normalize_records(&matched.into_records()).map_err(|e| {
        tracing::error!(
            title = %request.options.title,
            error = %e,
            "Failed to normalize catalog record"
        );
        e
    })?;

    tracing::info!(
        title = %request.options.title,
        provider = provider.name(),
        candidates = candidate_count,
        matched = games.len(),
        "Title lookup completed"
    );

    Ok(LookupOutcome {
        games,
        warning: query.warning,
    })
}
