use axum::Json;
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    services::recommendations::{is_square, recommend_by_score_distance, recommend_by_similarity_row},
};

fn default_neighbours() -> usize {
    5
}

/// Either a score vector or a pairwise similarity matrix, plus the target
#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub scores: Option<Vec<f64>>,
    #[serde(default)]
    pub similarity_matrix: Option<Vec<Vec<f64>>>,
    pub target: usize,
    #[serde(default = "default_neighbours")]
    pub n: usize,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub indices: Vec<usize>,
}

/// Handler for recommendations endpoint
///
/// The recommenders trust their target index, so it is validated here.
pub async fn recommend(
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<RecommendationResponse>> {
    let indices = match (&request.scores, &request.similarity_matrix) {
        (Some(scores), None) => {
            check_target(request.target, scores.len())?;
            recommend_by_score_distance(scores, request.target, request.n)
        }
        (None, Some(matrix)) => {
            if !is_square(matrix) {
                return Err(AppError::InvalidInput(
                    "Similarity matrix must be square".to_string(),
                ));
            }
            check_target(request.target, matrix.len())?;
            recommend_by_similarity_row(matrix, request.target, request.n)
        }
        _ => {
            return Err(AppError::InvalidInput(
                "Provide exactly one of 'scores' or 'similarity_matrix'".to_string(),
            ))
        }
    };

    Ok(Json(RecommendationResponse { indices }))
}

fn check_target(target: usize, len: usize) -> AppResult<()> {
    if target >= len {
        return Err(AppError::InvalidInput(format!(
            "Target index {} out of bounds for {} items",
            target, len
        )));
    }
    Ok(())
}
