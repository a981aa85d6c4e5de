//! Prerendering of every selected route into the output directory.

use anyhow::{Context, Result, bail};
use cowboy_safari_core::sitemap::{robots_txt, sitemap_entries, to_xml};
use cowboy_safari_core::Catalog;
use cowboy_safari_web::router::Route;
use cowboy_safari_web::ssr::{self, STYLESHEET, STYLESHEET_CSS};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::{Duration, Instant};

pub const SITEMAP_FILE: &str = "sitemap.xml";
pub const ROBOTS_FILE: &str = "robots.txt";

#[derive(Debug, Clone, Serialize)]
pub struct WrittenFile {
    /// Route slug, or `None` for support files such as the sitemap.
    pub route: Option<&'static str>,
    pub path: PathBuf,
    pub bytes: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildSummary {
    pub out_dir: PathBuf,
    pub base_url: String,
    pub files: Vec<WrittenFile>,
    #[serde(skip)]
    pub duration: Duration,
}

impl BuildSummary {
    #[must_use]
    pub fn documents(&self) -> usize {
        self.files.iter().filter(|f| f.route.is_some()).count()
    }

    #[must_use]
    pub fn total_bytes(&self) -> usize {
        self.files.iter().map(|f| f.bytes).sum()
    }
}

/// Resolve route tokens from the command line. `all` selects every route.
pub fn select_routes(tokens: &[String]) -> Result<Vec<Route>> {
    if tokens.is_empty() || tokens.iter().any(|t| t.eq_ignore_ascii_case("all")) {
        return Ok(Route::ALL.to_vec());
    }
    let mut routes = Vec::with_capacity(tokens.len());
    for token in tokens {
        let Some(route) = Route::from_slug(token) else {
            let known: Vec<&str> = Route::ALL.iter().map(|r| r.slug()).collect();
            bail!("unknown route `{token}` (expected one of: {})", known.join(", "));
        };
        if !routes.contains(&route) {
            routes.push(route);
        }
    }
    Ok(routes)
}

async fn write_file(out_dir: &Path, relative: &str, contents: &str) -> Result<PathBuf> {
    let path = out_dir.join(relative);
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    tokio::fs::write(&path, contents)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;
    log::debug!("wrote {} ({} bytes)", path.display(), contents.len());
    Ok(path)
}

/// Render `routes` plus the sitemap, robots file and stylesheet into `out_dir`.
pub async fn build_site(out_dir: &Path, routes: &[Route], catalog: Rc<Catalog>) -> Result<BuildSummary> {
    let start = Instant::now();
    let mut files = Vec::with_capacity(routes.len() + 3);

    for &route in routes {
        let html = ssr::render_document(route, Rc::clone(&catalog)).await;
        let path = write_file(out_dir, route.output_file(), &html).await?;
        log::info!("rendered {} -> {}", route.slug(), path.display());
        files.push(WrittenFile {
            route: Some(route.slug()),
            path,
            bytes: html.len(),
        });
    }

    let sitemap = to_xml(&sitemap_entries(&catalog.site));
    let robots = robots_txt(&catalog.site);
    for (name, contents) in [
        (SITEMAP_FILE, sitemap.as_str()),
        (ROBOTS_FILE, robots.as_str()),
        (STYLESHEET, STYLESHEET_CSS),
    ] {
        let path = write_file(out_dir, name, contents).await?;
        files.push(WrittenFile {
            route: None,
            path,
            bytes: contents.len(),
        });
    }

    Ok(BuildSummary {
        out_dir: out_dir.to_path_buf(),
        base_url: catalog.site.base_url.clone(),
        files,
        duration: start.elapsed(),
    })
}
