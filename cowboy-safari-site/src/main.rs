mod checks;
mod render;
mod reports;
mod util;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use cowboy_safari_core::catalog;
use cowboy_safari_web::router::Route;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::rc::Rc;
use yew_router::Routable;

use checks::{CheckResult, check_site};
use render::{BuildSummary, build_site, select_routes};
use util::split_csv;

#[derive(Debug, Parser)]
#[command(name = "safari-site", version)]
#[command(about = "Prerender the Cowboy Safari fan hub into static HTML")]
struct Args {
    /// Directory the documents are written to
    #[arg(long, default_value = "dist")]
    out_dir: PathBuf,

    /// Routes to render (comma-separated: home, guides, support, not-found, or all)
    #[arg(long, default_value = "all")]
    routes: String,

    /// Override the configured base URL for canonical links and the sitemap
    #[arg(long)]
    base_url: Option<String>,

    /// List the route table and exit
    #[arg(long)]
    list_routes: bool,

    /// Validate the written documents and exit non-zero on failures
    #[arg(long)]
    check: bool,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["console", "json", "markdown"])]
    report: String,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if maybe_list_routes(&args)? {
        return Ok(());
    }

    if args.report == "console" {
        announce_banner();
    }

    let routes = select_routes(&split_csv(&args.routes))?;
    let catalog = Rc::new(match args.base_url.as_deref() {
        Some(base_url) => catalog().with_base_url(base_url),
        None => catalog().clone(),
    });

    let summary = build_site(&args.out_dir, &routes, Rc::clone(&catalog))
        .await
        .with_context(|| format!("building into {}", args.out_dir.display()))?;

    let checks = if args.check {
        check_site(&args.out_dir, &routes, &catalog.site).await?
    } else {
        Vec::new()
    };

    write_report(&args, &summary, &checks)?;

    if checks.iter().any(|c| !c.passed) {
        std::process::exit(1);
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();
}

fn maybe_list_routes(args: &Args) -> Result<bool> {
    if !args.list_routes {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available routes:")?;
    for route in Route::ALL {
        let indexed = if route.indexable() { "indexed" } else { "noindex" };
        writeln!(
            output_target.writer(),
            "  {:10} {:10} {:20} {indexed}",
            route.slug(),
            route.to_path(),
            route.output_file()
        )?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🤠 Cowboy Safari Site Builder".bright_cyan().bold());
    println!("{}", "==============================".cyan());
}

fn write_report(args: &Args, summary: &BuildSummary, checks: &[CheckResult]) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;
    match args.report.as_str() {
        "json" => reports::generate_json_report(&mut output_target, summary, checks)?,
        "markdown" => reports::generate_markdown_report(&mut output_target, summary, checks)?,
        _ => reports::generate_console_report(&mut output_target, summary, checks)?,
    }
    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Args {
        Args {
            out_dir: PathBuf::from("dist"),
            routes: "all".to_string(),
            base_url: None,
            list_routes: false,
            check: false,
            report: "json".to_string(),
            output: None,
            verbose: false,
        }
    }

    #[test]
    fn list_routes_is_skipped_without_flag() {
        assert!(!maybe_list_routes(&base_args()).unwrap());
    }

    #[test]
    fn parses_flags() {
        let args = Args::try_parse_from([
            "safari-site",
            "--out-dir",
            "public",
            "--routes",
            "home,guides",
            "--base-url",
            "https://preview.test",
            "--check",
            "--report",
            "markdown",
            "-v",
        ])
        .unwrap();
        assert_eq!(args.out_dir, PathBuf::from("public"));
        assert_eq!(split_csv(&args.routes), ["home", "guides"]);
        assert_eq!(args.base_url.as_deref(), Some("https://preview.test"));
        assert!(args.check && args.verbose);
        assert_eq!(args.report, "markdown");
    }

    #[test]
    fn rejects_unknown_report_format() {
        assert!(Args::try_parse_from(["safari-site", "--report", "csv"]).is_err());
    }
}
