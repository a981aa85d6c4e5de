//! Post-build validation of the written documents.

use anyhow::{Context, Result};
use cowboy_safari_core::SiteConfig;
use cowboy_safari_web::router::Route;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

const JSON_LD_OPEN: &str = "type=\"application/ld+json\">";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub route: &'static str,
    pub check: &'static str,
    pub passed: bool,
    pub detail: String,
}

impl CheckResult {
    fn new(route: Route, check: &'static str, passed: bool, detail: impl Into<String>) -> Self {
        Self {
            route: route.slug(),
            check,
            passed,
            detail: detail.into(),
        }
    }
}

/// Raw JSON-LD payloads embedded in a document.
fn json_ld_blocks(html: &str) -> impl Iterator<Item = &str> {
    html.split(JSON_LD_OPEN)
        .skip(1)
        .filter_map(|rest| rest.split("</script>").next())
}

fn check_canonical(route: Route, html: &str, site: &SiteConfig) -> CheckResult {
    let expected = route.metadata(site).canonical;
    let needle = format!("rel=\"canonical\" href=\"{expected}\"");
    let passed = html.contains(&needle);
    let detail = if passed {
        expected
    } else {
        format!("missing canonical link to {expected}")
    };
    CheckResult::new(route, "canonical", passed, detail)
}

fn check_structured_data(route: Route, html: &str) -> CheckResult {
    let mut graphs = 0_usize;
    for raw in json_ld_blocks(html) {
        let value: Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(err) => {
                let detail = format!("unparseable JSON-LD: {err}");
                return CheckResult::new(route, "json-ld", false, detail);
            }
        };
        if value.get("@context").is_none() || !value["@graph"].is_array() {
            return CheckResult::new(route, "json-ld", false, "JSON-LD without @context/@graph");
        }
        graphs += 1;
    }
    if route.indexable() && graphs == 0 {
        return CheckResult::new(route, "json-ld", false, "no JSON-LD block");
    }
    CheckResult::new(route, "json-ld", true, format!("{graphs} block(s)"))
}

fn check_iframe(route: Route, html: &str, site: &SiteConfig) -> CheckResult {
    let passed = html.contains("<iframe") && html.contains(&format!("src=\"{}\"", site.iframe_src));
    let detail = if passed {
        site.iframe_src.clone()
    } else {
        format!("no iframe pointing at {}", site.iframe_src)
    };
    CheckResult::new(route, "iframe", passed, detail)
}

fn check_landmarks(route: Route, html: &str) -> CheckResult {
    let passed = html.contains("href=\"#main\"") && html.contains("<main id=\"main\"");
    let detail = if passed {
        "skip link + main"
    } else {
        "skip link or main#main missing"
    };
    CheckResult::new(route, "landmarks", passed, detail)
}

/// Run every applicable check against one rendered document.
#[must_use]
pub fn check_document(route: Route, html: &str, site: &SiteConfig) -> Vec<CheckResult> {
    let mut results = vec![
        check_canonical(route, html, site),
        check_structured_data(route, html),
        check_landmarks(route, html),
    ];
    if route == Route::Home {
        results.push(check_iframe(route, html, site));
    }
    results
}

/// Read back the documents written for `routes` and check them.
pub async fn check_site(out_dir: &Path, routes: &[Route], site: &SiteConfig) -> Result<Vec<CheckResult>> {
    let mut results = Vec::new();
    for &route in routes {
        let path = out_dir.join(route.output_file());
        let html = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?;
        results.extend(check_document(route, &html, site));
    }
    Ok(results)
}
