// src/cli/build.rs
// Static export command

use anyhow::{Context, Result};
use folio::build::build_site;
use folio::catalog::Catalog;
use folio::config::Settings;
use folio::render::{LinkStyle, Renderer};

pub fn run_build(settings: &Settings) -> Result<()> {
    let renderer = Renderer::new(settings, LinkStyle::Static)?;
    let report = build_site(Catalog::builtin(), &renderer, &settings.out_dir)
        .with_context(|| format!("Failed to build site into {}", settings.out_dir.display()))?;

    println!(
        "Built {} pages and {} assets into {}",
        report.pages,
        report.assets,
        report.out_dir.display()
    );
    Ok(())
}
