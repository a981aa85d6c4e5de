//! URL helpers that respect the deployment base path.
//!
//! `PUBLIC_URL` is read at compile time (e.g. `/safari` when the hub is served
//! from a subdirectory). Without it every path is root-anchored.

const PUBLIC_URL: Option<&str> = option_env!("PUBLIC_URL");

/// Prefix a static asset path with the deployment base.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    prefixed(PUBLIC_URL.unwrap_or(""), relative)
}

/// Browser location of a route path, including the deployment base.
#[must_use]
pub fn location_of(route_path: &str) -> String {
    prefixed(PUBLIC_URL.unwrap_or(""), route_path)
}

/// Router basename, or `None` when the hub is served from the root.
#[must_use]
pub fn router_base() -> Option<String> {
    basename(PUBLIC_URL.unwrap_or(""))
}

/// True for links that leave the site.
#[must_use]
pub fn is_external(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}

/// Site-relative link with an optional fragment, e.g. `/guides#score-push`.
#[must_use]
pub fn anchored(path: &str, fragment: Option<&str>) -> String {
    match fragment.map(|f| f.trim_start_matches('#')) {
        Some(fragment) if !fragment.is_empty() => format!("{path}#{fragment}"),
        _ => path.to_string(),
    }
}

fn prefixed(base: &str, relative: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    let relative = relative.trim_start_matches('/');
    format!("{base}/{relative}")
}

fn basename(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    (!base.is_empty()).then(|| base.to_string())
}
