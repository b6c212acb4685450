// src/build.rs
// Static export: every page pre-rendered into a directory tree

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::error::Result;
use crate::filter::Category;
use crate::render::Renderer;
use crate::web::embedded;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub out_dir: PathBuf,
    pub pages: usize,
    pub assets: usize,
}

struct Writer<'a> {
    root: &'a Path,
    pages: usize,
    assets: usize,
}

impl Writer<'_> {
    fn write(&self, rel: &str, contents: &[u8]) -> Result<()> {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        debug!(path = %path.display(), bytes = contents.len(), "Wrote file");
        Ok(())
    }

    fn page(&mut self, rel: &str, html: String) -> Result<()> {
        self.write(rel, html.as_bytes())?;
        self.pages += 1;
        Ok(())
    }
}

/// Render the whole site under `out_dir`.
///
/// `renderer` should use `LinkStyle::Static` so category links point at
/// the generated `category/<slug>/` pages.
pub fn build_site(catalog: &Catalog, renderer: &Renderer, out_dir: &Path) -> Result<BuildReport> {
    fs::create_dir_all(out_dir)?;
    let mut writer = Writer {
        root: out_dir,
        pages: 0,
        assets: 0,
    };

    writer.page("index.html", renderer.home(catalog, &Category::All)?)?;

    for category in Category::menu().into_iter().filter(|c| *c != Category::All) {
        let rel = format!("category/{}/index.html", category.slug());
        writer.page(&rel, renderer.home(catalog, &category)?)?;
    }

    for slug in catalog.project_slugs() {
        let html = renderer.project(catalog, catalog.project(slug)?)?;
        writer.page(&format!("projects/{slug}/index.html"), html)?;
    }

    writer.page("articles/index.html", renderer.articles(catalog)?)?;
    for slug in catalog.article_slugs() {
        let html = renderer.article(catalog, catalog.article(slug)?)?;
        writer.page(&format!("articles/{slug}/index.html"), html)?;
    }

    writer.page("404.html", renderer.not_found(catalog, "Not Found")?)?;

    for path in embedded::asset_paths() {
        if let Some(data) = embedded::asset(&path) {
            writer.write(&format!("assets/{path}"), &data)?;
            writer.assets += 1;
        }
    }

    info!(
        out_dir = %out_dir.display(),
        pages = writer.pages,
        assets = writer.assets,
        "Static site built"
    );

    Ok(BuildReport {
        out_dir: out_dir.to_path_buf(),
        pages: writer.pages,
        assets: writer.assets,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::render::LinkStyle;
    use tempfile::TempDir;

    fn build() -> (TempDir, BuildReport) {
        let dir = TempDir::new().unwrap();
        let renderer = Renderer::new(&Settings::default(), LinkStyle::Static).unwrap();
        let report = build_site(Catalog::builtin(), &renderer, dir.path()).unwrap();
        (dir, report)
    }

    #[test]
    fn test_every_page_written() {
        let (dir, report) = build();
        let catalog = Catalog::builtin();

        // home + 5 categories + projects + article index + articles + 404
        let expected = 1 + 5 + catalog.projects.len() + 1 + catalog.articles.len() + 1;
        assert_eq!(report.pages, expected);

        for rel in [
            "index.html",
            "category/full-stack/index.html",
            "category/computer-vision/index.html",
            "projects/docuvision-rag/index.html",
            "articles/index.html",
            "articles/advanced-rag/index.html",
            "404.html",
            "assets/style.css",
        ] {
            assert!(dir.path().join(rel).is_file(), "missing {rel}");
        }
    }

    #[test]
    fn test_category_page_is_filtered() {
        let (dir, _) = build();
        let html = fs::read_to_string(dir.path().join("category/full-stack/index.html")).unwrap();
        assert!(html.contains("Household Services App"));
        assert!(!html.contains("Answerly"));
        assert!(html.contains("href=\"/category/llm/#projects\""));
    }

    #[test]
    fn test_static_pages_skip_chat_widget() {
        let (dir, _) = build();
        let html = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(!html.contains("chat-widget"));
    }

    #[test]
    fn test_rebuild_overwrites() {
        let (dir, first) = build();
        let renderer = Renderer::new(&Settings::default(), LinkStyle::Static).unwrap();
        let second = build_site(Catalog::builtin(), &renderer, dir.path()).unwrap();
        assert_eq!(first, second);
        assert!(second.assets >= 1);
    }
}
