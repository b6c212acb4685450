// src/catalog/mod.rs
// Immutable portfolio records: projects, articles, experience and profile

mod data;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{FolioError, Result};

static BUILTIN: Lazy<Arc<Catalog>> = Lazy::new(|| Arc::new(data::builtin()));

// ═══════════════════════════════════════
// RECORD TYPES
// ═══════════════════════════════════════

/// A project shown in the gallery and on its own detail page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectRecord {
    pub title: String,
    /// Stable identifier, unique within the catalog
    pub slug: String,
    pub description: String,
    /// Ordered labels; no duplicates within one record
    pub tags: Vec<String>,
    pub image: String,
    /// Gradient accent used by the card
    pub color: String,
    pub github: String,
    pub content: ProjectContent,
}

impl ProjectRecord {
    /// Site-relative detail URL
    pub fn link(&self) -> String {
        format!("/projects/{}", self.slug)
    }

    /// Exact, case-sensitive tag membership
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectContent {
    pub overview: String,
    pub features: Vec<String>,
    pub challenges: String,
    pub solutions: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Article {
    pub title: String,
    pub slug: String,
    pub date: NaiveDate,
    pub author: String,
    pub description: String,
}

impl Article {
    /// Long US-style date, e.g. "February 1, 2024"
    pub fn display_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub period: String,
    pub highlights: Vec<String>,
    pub stack: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Education {
    pub period: String,
    pub degree: String,
    pub institute: String,
    pub note: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skills {
    pub programming: Vec<String>,
    pub ml: Vec<String>,
    pub data: Vec<String>,
    pub web: Vec<String>,
}

impl Skills {
    /// "Languages & Frameworks" panel
    pub fn languages_and_frameworks(&self) -> Vec<&str> {
        self.programming
            .iter()
            .chain(self.web.iter())
            .map(String::as_str)
            .collect()
    }

    /// "AI, ML & Data" panel
    pub fn ai_ml_and_data(&self) -> Vec<&str> {
        self.ml.iter().chain(self.data.iter()).map(String::as_str).collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub text: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SocialKind {
    Github,
    Linkedin,
    Email,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub href: String,
    pub label: String,
}

/// Site owner identity used by the hero, metadata and footer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub current_role: String,
    pub education_badge: String,
    pub location: String,
    pub phone: String,
    pub email: String,
    pub site_description: String,
    pub about_heading: String,
    pub about: Vec<String>,
    pub contact_pitch: String,
}

// ═══════════════════════════════════════
// CATALOG
// ═══════════════════════════════════════

/// Everything the site renders from. Built once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    pub profile: Profile,
    pub social_links: Vec<SocialLink>,
    pub projects: Vec<ProjectRecord>,
    pub articles: Vec<Article>,
    pub testimonials: Vec<Testimonial>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Skills,
    pub certifications: Vec<String>,
}

impl Catalog {
    /// The hard-coded portfolio, initialised on first use
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Shared handle to the built-in catalog for server state
    pub fn shared() -> Arc<Catalog> {
        BUILTIN.clone()
    }

    pub fn project(&self, slug: &str) -> Result<&ProjectRecord> {
        self.projects
            .iter()
            .find(|p| p.slug == slug)
            .ok_or_else(|| FolioError::project_not_found(slug))
    }

    pub fn article(&self, slug: &str) -> Result<&Article> {
        self.articles
            .iter()
            .find(|a| a.slug == slug)
            .ok_or_else(|| FolioError::article_not_found(slug))
    }

    pub fn project_slugs(&self) -> impl Iterator<Item = &str> {
        self.projects.iter().map(|p| p.slug.as_str())
    }

    pub fn article_slugs(&self) -> impl Iterator<Item = &str> {
        self.articles.iter().map(|a| a.slug.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // ============================================================================
    // Lookup tests
    // ============================================================================

    #[test]
    fn test_project_lookup_hit() {
        let catalog = Catalog::builtin();
        let project = catalog.project("docuvision-rag").unwrap();
        assert!(project.title.starts_with("DocuVision RAG"));
        assert_eq!(project.link(), "/projects/docuvision-rag");
    }

    #[test]
    fn test_project_lookup_miss() {
        let err = Catalog::builtin().project("does-not-exist").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_article_lookup() {
        let catalog = Catalog::builtin();
        assert!(catalog.article("mastering-rag").is_ok());
        assert!(catalog.article("Mastering-RAG").unwrap_err().is_not_found());
    }

    // ============================================================================
    // Data integrity tests
    // ============================================================================

    #[test]
    fn test_slugs_are_unique() {
        let catalog = Catalog::builtin();
        let projects: HashSet<&str> = catalog.project_slugs().collect();
        assert_eq!(projects.len(), catalog.projects.len());
        let articles: HashSet<&str> = catalog.article_slugs().collect();
        assert_eq!(articles.len(), catalog.articles.len());
    }

    #[test]
    fn test_no_duplicate_tags_within_record() {
        for project in &Catalog::builtin().projects {
            let unique: HashSet<&String> = project.tags.iter().collect();
            assert_eq!(unique.len(), project.tags.len(), "duplicate tag in {}", project.slug);
        }
    }

    #[test]
    fn test_has_tag_is_exact() {
        let project = Catalog::builtin().project("household-services-app").unwrap();
        assert!(project.has_tag("Vue.js"));
        assert!(!project.has_tag("vue.js"));
        assert!(!project.has_tag("Vue"));
    }

    #[test]
    fn test_article_dates_are_real() {
        // a typo'd day or month would fall back to 1970-01-01
        for article in &Catalog::builtin().articles {
            let year = article.date.format("%Y").to_string();
            assert!(
                year == "2023" || year == "2024",
                "{} has date {}",
                article.slug,
                article.date
            );
        }
    }

    #[test]
    fn test_article_display_date() {
        let article = Catalog::builtin().article("mlops-on-gcp").unwrap();
        assert_eq!(article.display_date(), "February 1, 2024");
    }

    #[test]
    fn test_skill_panels() {
        let skills = &Catalog::builtin().skills;
        let langs = skills.languages_and_frameworks();
        assert_eq!(langs.first(), Some(&"Python"));
        assert!(langs.contains(&"FastAPI"));
        let ai = skills.ai_ml_and_data();
        assert!(ai.contains(&"RAG"));
        assert!(ai.contains(&"Data Analysis"));
    }

    #[test]
    fn test_shared_points_at_builtin() {
        let shared = Catalog::shared();
        assert!(std::ptr::eq(shared.as_ref(), Catalog::builtin()));
    }
}
