use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Serialize;

use crate::error::AppError;
use crate::models::JobView;
use crate::routes::AppState;
use crate::search::{self, SearchEcho, SearchParams};

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub hot_jobs: Vec<JobView>,
    pub jobs: Vec<JobView>,
    pub total: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub search_params: SearchEcho,
}

pub async fn list(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<SearchResponse>, AppError> {
    let params = SearchParams::from_pairs(pairs);
    let snapshot = state.source.snapshot().await?;
    let result = search::search(&params, &snapshot, &state.options);
    tracing::debug!(
        source = state.source.name(),
        snapshot = snapshot.len(),
        matched = result.total,
        page = result.current_page,
        "job search"
    );

    let (hot, ordinary) = result.split_featured();
    Ok(Json(SearchResponse {
        hot_jobs: hot.into_iter().map(JobView::from_record).collect(),
        jobs: ordinary.into_iter().map(JobView::from_record).collect(),
        total: result.total,
        total_pages: result.total_pages,
        current_page: result.current_page,
        search_params: result.params,
    }))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<JobView>, AppError> {
    let posting = state.source.get(id).await?;
    Ok(Json(JobView::from_record(&posting)))
}
