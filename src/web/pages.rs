// src/web/pages.rs
// HTML page handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::error;

use crate::error::{FolioError, Result};
use crate::filter::Category;
use crate::render::PROJECT_NOT_FOUND;
use crate::web::state::AppState;

#[derive(Debug, Deserialize)]
pub struct HomeQuery {
    pub category: Option<String>,
}

/// 404 with the generic not-found page
fn not_found_page(state: &AppState, title: &str) -> Response {
    match state.renderer.not_found(&state.catalog, title) {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(e) => server_error(e),
    }
}

fn server_error(err: FolioError) -> Response {
    error!(error = %err, "Failed to render page");
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}

/// Turn a render result into a response; lookup-misses become 404 pages
fn respond(state: &AppState, result: Result<String>, missing_title: &str) -> Response {
    match result {
        Ok(html) => Html(html).into_response(),
        Err(e) if e.is_not_found() => not_found_page(state, missing_title),
        Err(e) => server_error(e),
    }
}

pub async fn home(State(state): State<AppState>, Query(query): Query<HomeQuery>) -> Response {
    let category = query
        .category
        .as_deref()
        .map(Category::from_label)
        .unwrap_or_default();
    let result = state.renderer.home(&state.catalog, &category);
    respond(&state, result, "Not Found")
}

pub async fn project(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    let result = state
        .catalog
        .project(&slug)
        .and_then(|p| state.renderer.project(&state.catalog, p));
    respond(&state, result, PROJECT_NOT_FOUND)
}

pub async fn articles(State(state): State<AppState>) -> Response {
    let result = state.renderer.articles(&state.catalog);
    respond(&state, result, "Not Found")
}

pub async fn article(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    let result = state
        .catalog
        .article(&slug)
        .and_then(|a| state.renderer.article(&state.catalog, a));
    respond(&state, result, "Article Not Found")
}

/// Router fallback
pub async fn not_found(State(state): State<AppState>) -> Response {
    not_found_page(&state, "Not Found")
}
