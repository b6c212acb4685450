// src/web/api.rs
// REST API handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assistant::{Reply, classify};
use crate::catalog::{Article, ProjectRecord};
use crate::error::FolioError;
use crate::filter::{Category, filter_projects};
use crate::web::error::ApiResult;
use crate::web::state::AppState;

// ═══════════════════════════════════════
// HEALTH
// ═══════════════════════════════════════

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

// ═══════════════════════════════════════
// CATALOG
// ═══════════════════════════════════════

#[derive(Debug, Deserialize)]
pub struct ProjectQuery {
    pub category: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectList {
    pub category: Category,
    pub total: usize,
    pub projects: Vec<ProjectRecord>,
}

pub async fn categories() -> impl IntoResponse {
    Json(Category::ALL_LABELS)
}

pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ProjectQuery>,
) -> Json<ProjectList> {
    let category = query
        .category
        .as_deref()
        .map(Category::from_label)
        .unwrap_or_default();

    let projects: Vec<ProjectRecord> = filter_projects(&category, &state.catalog.projects)
        .into_iter()
        .cloned()
        .collect();

    Json(ProjectList {
        category,
        total: projects.len(),
        projects,
    })
}

pub async fn get_project(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<ProjectRecord>> {
    Ok(Json(state.catalog.project(&slug)?.clone()))
}

pub async fn list_articles(State(state): State<AppState>) -> Json<Vec<Article>> {
    Json(state.catalog.articles.clone())
}

pub async fn get_article(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<Article>> {
    Ok(Json(state.catalog.article(&slug)?.clone()))
}

pub async fn profile(State(state): State<AppState>) -> impl IntoResponse {
    let catalog = &state.catalog;
    Json(serde_json::json!({
        "profile": catalog.profile,
        "social_links": catalog.social_links,
        "experience": catalog.experience,
        "education": catalog.education,
        "skills": catalog.skills,
        "certifications": catalog.certifications,
    }))
}

pub async fn testimonials(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.catalog.testimonials.clone())
}

// ═══════════════════════════════════════
// CHAT
// ═══════════════════════════════════════

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    pub kind: Reply,
}

/// Keyword reply after the configured typing delay.
///
/// If the client goes away during the delay the future is dropped and the
/// reply is never produced.
pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> ApiResult<Json<ChatResponse>> {
    let message = req.message.trim();
    if message.is_empty() {
        return Err(FolioError::InvalidInput("message is empty".to_string()).into());
    }

    if !state.chat_delay.is_zero() {
        tokio::time::sleep(state.chat_delay).await;
    }

    let kind = classify(message);
    debug!(?kind, chars = message.chars().count(), "Chat reply");

    Ok(Json(ChatResponse {
        reply: kind.text().to_string(),
        kind,
    }))
}
