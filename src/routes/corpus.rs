use axum::Json;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{
    error::AppResult,
    models::{Corpus, GameRow},
    services::companies::{count_companies, find_simple_company_subsidiaries, get_unique_companies},
};

fn default_company_column() -> String {
    "involved_companies".to_string()
}

#[derive(Debug, Deserialize)]
pub struct CompaniesRequest {
    pub rows: Vec<GameRow>,
    #[serde(default = "default_company_column")]
    pub column: String,
}

#[derive(Debug, Serialize)]
pub struct CompaniesResponse {
    pub unique: Vec<String>,
    pub counts: HashMap<String, usize>,
}

#[derive(Debug, Deserialize)]
pub struct SubsidiariesRequest {
    pub rows: Vec<GameRow>,
    #[serde(default = "default_company_column")]
    pub column: String,
    pub parent: String,
    #[serde(default)]
    pub match_anywhere: bool,
}

/// Handler for corpus remapping
pub async fn remap(Json(rows): Json<Vec<GameRow>>) -> AppResult<Json<Vec<GameRow>>> {
    let remapped = Corpus::new(rows).remap()?;
    Ok(Json(remapped.rows))
}

/// Handler for company statistics over a corpus column
pub async fn companies(Json(request): Json<CompaniesRequest>) -> AppResult<Json<CompaniesResponse>> {
    let cells = Corpus::new(request.rows).column(&request.column)?;

    Ok(Json(CompaniesResponse {
        unique: get_unique_companies(&cells),
        counts: count_companies(&cells),
    }))
}

/// Handler for subsidiary discovery
pub async fn subsidiaries(Json(request): Json<SubsidiariesRequest>) -> AppResult<Json<Vec<String>>> {
    let cells = Corpus::new(request.rows).column(&request.column)?;
    let matches = find_simple_company_subsidiaries(&request.parent, cells, request.match_anywhere)?;

    tracing::info!(
        parent = %request.parent,
        matches = matches.len(),
        "Subsidiary search completed"
    );

    Ok(Json(matches))
}
