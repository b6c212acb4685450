// src/render/mod.rs
// Server-side HTML pages rendered with minijinja

use minijinja::{AutoEscape, Environment, ErrorKind, Output, State, Value, context};
use serde::Serialize;

use crate::catalog::{Article, Catalog, ProjectRecord};
use crate::config::Settings;
use crate::error::Result;
use crate::filter::{Category, filter_projects};

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../templates/base.html")),
    ("home.html", include_str!("../../templates/home.html")),
    ("project.html", include_str!("../../templates/project.html")),
    ("articles.html", include_str!("../../templates/articles.html")),
    ("article.html", include_str!("../../templates/article.html")),
    ("not_found.html", include_str!("../../templates/not_found.html")),
];

/// Page title for a project slug with no record
pub const PROJECT_NOT_FOUND: &str = "Project Not Found";

/// Tags shown on a gallery card before the "+N" badge
const CARD_TAG_LIMIT: usize = 3;

/// How gallery category links are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStyle {
    /// `/?category=Full%20Stack`, served dynamically; chat widget enabled
    Query,
    /// `/category/full-stack/`, pre-built pages; no chat backend
    Static,
}

/// Title and description for the document head
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
struct MenuItem {
    label: String,
    href: String,
    active: bool,
}

#[derive(Debug, Serialize)]
struct CardView<'a> {
    title: &'a str,
    href: String,
    description: &'a str,
    image: &'a str,
    color: &'a str,
    tags: &'a [String],
    hidden_tags: usize,
}

#[derive(Debug, Serialize)]
struct ArticleView<'a> {
    title: &'a str,
    href: String,
    date: String,
    author: &'a str,
    description: &'a str,
}

pub struct Renderer {
    env: Environment<'static>,
    owner: Option<String>,
    base: String,
    links: LinkStyle,
}

impl Renderer {
    pub fn new(settings: &Settings, links: LinkStyle) -> Result<Self> {
        let mut env = Environment::new();
        env.set_formatter(html_formatter);
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self {
            env,
            owner: settings.owner.clone(),
            base: settings.base_path.clone(),
            links,
        })
    }

    pub fn link_style(&self) -> LinkStyle {
        self.links
    }

    fn owner<'a>(&'a self, catalog: &'a Catalog) -> &'a str {
        self.owner.as_deref().unwrap_or(&catalog.profile.name)
    }

    fn href(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub fn category_href(&self, category: &Category) -> String {
        match (self.links, category) {
            (_, Category::All) => self.href("/"),
            (LinkStyle::Query, c) => {
                self.href(&format!("/?category={}", urlencoding::encode(c.label())))
            }
            (LinkStyle::Static, c) => self.href(&format!("/category/{}/", c.slug())),
        }
    }

    pub fn site_meta(&self, catalog: &Catalog) -> PageMeta {
        PageMeta {
            title: format!("{} | {}", self.owner(catalog), catalog.profile.headline),
            description: catalog.profile.site_description.clone(),
        }
    }

    /// Metadata for a project page; a lookup-miss gets "Project Not Found"
    pub fn project_meta(&self, catalog: &Catalog, slug: &str) -> PageMeta {
        match catalog.project(slug) {
            Ok(project) => PageMeta {
                title: format!("{} | {}", project.title, self.owner(catalog)),
                description: project.description.clone(),
            },
            Err(_) => PageMeta {
                title: PROJECT_NOT_FOUND.to_string(),
                description: String::new(),
            },
        }
    }

    fn render(&self, name: &str, ctx: minijinja::Value) -> Result<String> {
        Ok(self.env.get_template(name)?.render(ctx)?)
    }

    fn card<'a>(&self, project: &'a ProjectRecord) -> CardView<'a> {
        let shown = project.tags.len().min(CARD_TAG_LIMIT);
        CardView {
            title: &project.title,
            href: self.href(&project.link()),
            description: &project.description,
            image: &project.image,
            color: &project.color,
            tags: &project.tags[..shown],
            hidden_tags: project.tags.len() - shown,
        }
    }

    /// Landing page with the gallery narrowed to `category`
    pub fn home(&self, catalog: &Catalog, category: &Category) -> Result<String> {
        let menu: Vec<MenuItem> = Category::menu()
            .into_iter()
            .map(|c| MenuItem {
                label: c.label().to_string(),
                href: self.category_href(&c),
                active: &c == category,
            })
            .collect();

        let cards: Vec<CardView> = filter_projects(category, &catalog.projects)
            .into_iter()
            .map(|p| self.card(p))
            .collect();

        let skills = &catalog.skills;
        self.render(
            "home.html",
            context! {
                meta => self.site_meta(catalog),
                base => &self.base,
                owner => self.owner(catalog),
                profile => &catalog.profile,
                social_links => &catalog.social_links,
                experience => &catalog.experience,
                menu => menu,
                active_category => category.label(),
                cards => cards,
                education => &catalog.education,
                certifications => &catalog.certifications,
                languages_and_frameworks => skills.languages_and_frameworks(),
                ai_ml_and_data => skills.ai_ml_and_data(),
                chat_enabled => self.links == LinkStyle::Query,
                greeting => crate::assistant::responder::GREETING,
                year => chrono::Utc::now().format("%Y").to_string(),
            },
        )
    }

    pub fn project(&self, catalog: &Catalog, project: &ProjectRecord) -> Result<String> {
        self.render(
            "project.html",
            context! {
                meta => self.project_meta(catalog, &project.slug),
                base => &self.base,
                owner => self.owner(catalog),
                project => project,
            },
        )
    }

    pub fn articles(&self, catalog: &Catalog) -> Result<String> {
        let articles: Vec<ArticleView> = catalog.articles.iter().map(|a| self.article_view(a)).collect();
        self.render(
            "articles.html",
            context! {
                meta => PageMeta {
                    title: format!("Articles | {}", self.owner(catalog)),
                    description: "Exploring AI, software development, and practical engineering.".to_string(),
                },
                base => &self.base,
                owner => self.owner(catalog),
                articles => articles,
            },
        )
    }

    pub fn article(&self, catalog: &Catalog, article: &Article) -> Result<String> {
        self.render(
            "article.html",
            context! {
                meta => PageMeta {
                    title: format!("{} | {}", article.title, self.owner(catalog)),
                    description: article.description.clone(),
                },
                base => &self.base,
                owner => self.owner(catalog),
                article => self.article_view(article),
            },
        )
    }

    /// Generic page for any lookup-miss
    pub fn not_found(&self, catalog: &Catalog, title: &str) -> Result<String> {
        self.render(
            "not_found.html",
            context! {
                meta => PageMeta {
                    title: title.to_string(),
                    description: String::new(),
                },
                base => &self.base,
                owner => self.owner(catalog),
            },
        )
    }

    fn article_view<'a>(&self, article: &'a Article) -> ArticleView<'a> {
        ArticleView {
            title: &article.title,
            href: self.href(&format!("/articles/{}", article.slug)),
            date: article.display_date(),
            author: &article.author,
            description: &article.description,
        }
    }
}

/// Auto-escaping formatter that keeps '/' literal so paths stay readable
fn html_formatter(
    out: &mut Output,
    state: &State,
    value: &Value,
) -> std::result::Result<(), minijinja::Error> {
    if value.is_undefined() || value.is_none() {
        return Ok(());
    }
    let text = value.to_string();
    let written = if value.is_safe() || !matches!(state.auto_escape(), AutoEscape::Html) {
        out.write_str(&text)
    } else {
        out.write_str(&escape_html(&text))
    };
    written.map_err(|_| minijinja::Error::new(ErrorKind::WriteFailure, "failed to write output"))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EnvConfig, SiteConfig};

    fn renderer(links: LinkStyle) -> Renderer {
        Renderer::new(&Settings::default(), links).unwrap()
    }

    #[test]
    fn test_project_meta() {
        let r = renderer(LinkStyle::Query);
        let catalog = Catalog::builtin();
        let meta = r.project_meta(catalog, "answerly-chatbot");
        assert_eq!(
            meta.title,
            "Answerly – Q&A Chatbot using LLM and LangChain | Sameem Qureshi"
        );
        assert!(meta.description.starts_with("Conversational Q&A"));

        let missing = r.project_meta(catalog, "nope");
        assert_eq!(missing.title, "Project Not Found");
    }

    #[test]
    fn test_category_href_styles() {
        let query = renderer(LinkStyle::Query);
        assert_eq!(query.category_href(&Category::All), "/");
        assert_eq!(query.category_href(&Category::FullStack), "/?category=Full%20Stack");

        let stat = renderer(LinkStyle::Static);
        assert_eq!(stat.category_href(&Category::ComputerVision), "/category/computer-vision/");
    }

    #[test]
    fn test_home_gallery_follows_filter() {
        let r = renderer(LinkStyle::Query);
        let html = r.home(Catalog::builtin(), &Category::FullStack).unwrap();
        assert!(html.contains("Household Services App"));
        assert!(!html.contains("DocuVision RAG: AI-Driven Visual Knowledge Extraction"));
        assert!(html.contains("Building Practical AI Systems"));
        assert!(html.contains("chat-widget"));
    }

    #[test]
    fn test_home_escapes_text() {
        let r = renderer(LinkStyle::Query);
        let html = r.home(Catalog::builtin(), &Category::from_label("<script>")).unwrap();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_escape_keeps_slashes() {
        assert_eq!(escape_html("a/b & <c> \"d\""), "a/b &amp; &lt;c&gt; &quot;d&quot;");
    }

    #[test]
    fn test_static_home_has_no_chat_widget() {
        let r = renderer(LinkStyle::Static);
        let html = r.home(Catalog::builtin(), &Category::All).unwrap();
        assert!(!html.contains("chat-widget"));
    }

    #[test]
    fn test_card_tag_overflow() {
        let r = renderer(LinkStyle::Query);
        let project = Catalog::builtin().project("heart-disease-prediction-mlops").unwrap();
        let card = r.card(project);
        assert_eq!(card.tags.len(), 3);
        assert_eq!(card.hidden_tags, 5);
    }

    #[test]
    fn test_article_page() {
        let r = renderer(LinkStyle::Query);
        let catalog = Catalog::builtin();
        let html = r.article(catalog, catalog.article("advanced-rag").unwrap()).unwrap();
        assert!(html.contains("January 1, 2024"));
        assert!(html.contains("Full article coming soon!"));
        assert!(html.contains("href=\"/articles\""));
    }

    #[test]
    fn test_owner_override_and_base_path() {
        let file = SiteConfig::parse("[site]\nowner = \"Jane Doe\"\nbase_path = \"folio\"\n").unwrap();
        let settings = Settings::merge(EnvConfig::default(), file);
        let r = Renderer::new(&settings, LinkStyle::Query).unwrap();
        let catalog = Catalog::builtin();
        assert_eq!(r.site_meta(catalog).title, "Jane Doe | AI/ML & LLM Engineer");
        let html = r.articles(catalog).unwrap();
        assert!(html.contains("href=\"/folio/articles/mlops-on-gcp\""));
    }
}
