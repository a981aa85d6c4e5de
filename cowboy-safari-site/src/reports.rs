use crate::checks::CheckResult;
use crate::render::BuildSummary;
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct JsonReport<'a> {
    build: &'a BuildSummary,
    duration_ms: u128,
    checks: &'a [CheckResult],
    passed: bool,
}

fn all_passed(checks: &[CheckResult]) -> bool {
    checks.iter().all(|c| c.passed)
}

pub fn generate_console_report(
    w: &mut dyn Write,
    summary: &BuildSummary,
    checks: &[CheckResult],
) -> Result<()> {
    writeln!(w)?;
    writeln!(w, "{}", "📦 Build Summary".bright_cyan().bold())?;
    writeln!(w, "{}", "================".cyan())?;
    writeln!(w, "Output directory: {}", summary.out_dir.display())?;
    writeln!(w, "Base URL: {}", summary.base_url)?;
    writeln!(
        w,
        "Documents: {} ({} files, {} bytes)",
        summary.documents(),
        summary.files.len(),
        summary.total_bytes()
    )?;
    writeln!(w, "Render time: {:?}", summary.duration)?;
    writeln!(w)?;
    for file in &summary.files {
        let label = file.route.unwrap_or("asset");
        writeln!(w, "  {:<10} {} ({} bytes)", label.bold(), file.path.display(), file.bytes)?;
    }

    if checks.is_empty() {
        return Ok(());
    }

    let failed = checks.iter().filter(|c| !c.passed).count();
    writeln!(w)?;
    writeln!(w, "{}", "🔎 Document Checks".bright_cyan().bold())?;
    writeln!(w, "{}", "==================".cyan())?;
    writeln!(w, "Passed: {}", (checks.len() - failed).to_string().green())?;
    writeln!(w, "Failed: {}", failed.to_string().red())?;
    for check in checks {
        let status = if check.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };
        writeln!(w, "{status} [{}] {} - {}", check.route, check.check.bold(), check.detail)?;
    }
    Ok(())
}

pub fn generate_json_report(
    w: &mut dyn Write,
    summary: &BuildSummary,
    checks: &[CheckResult],
) -> Result<()> {
    let report = JsonReport {
        build: summary,
        duration_ms: summary.duration.as_millis(),
        checks,
        passed: all_passed(checks),
    };
    serde_json::to_writer_pretty(&mut *w, &report)?;
    writeln!(w)?;
    Ok(())
}

pub fn generate_markdown_report(
    w: &mut dyn Write,
    summary: &BuildSummary,
    checks: &[CheckResult],
) -> Result<()> {
    writeln!(w, "# Cowboy Safari Site Build")?;
    writeln!(w)?;
    writeln!(w, "**Generated:** {}", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"))?;
    writeln!(w, "**Base URL:** {}", summary.base_url)?;
    writeln!(w, "**Output:** `{}`", summary.out_dir.display())?;
    writeln!(w)?;
    writeln!(w, "| Route | File | Bytes |")?;
    writeln!(w, "|-------|------|-------|")?;
    for file in &summary.files {
        writeln!(
            w,
            "| {} | `{}` | {} |",
            file.route.unwrap_or("-"),
            file.path.display(),
            file.bytes
        )?;
    }

    if !checks.is_empty() {
        writeln!(w)?;
        writeln!(w, "## Checks")?;
        writeln!(w)?;
        writeln!(w, "| Route | Check | Status | Detail |")?;
        writeln!(w, "|-------|-------|--------|--------|")?;
        for check in checks {
            let status = if check.passed { "✅" } else { "❌" };
            writeln!(w, "| {} | {} | {status} | {} |", check.route, check.check, check.detail)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::WrittenFile;
    use std::path::PathBuf;
    use std::time::Duration;

    fn summary() -> BuildSummary {
        BuildSummary {
            out_dir: PathBuf::from("dist"),
            base_url: "https://cowboysafari.online".to_string(),
            files: vec![
                WrittenFile {
                    route: Some("home"),
                    path: PathBuf::from("dist/index.html"),
                    bytes: 2048,
                },
                WrittenFile {
                    route: None,
                    path: PathBuf::from("dist/sitemap.xml"),
                    bytes: 512,
                },
            ],
            duration: Duration::from_millis(12),
        }
    }

    fn checks() -> Vec<CheckResult> {
        vec![
            CheckResult {
                route: "home",
                check: "canonical",
                passed: true,
                detail: "https://cowboysafari.online/".to_string(),
            },
            CheckResult {
                route: "home",
                check: "iframe",
                passed: false,
                detail: "no iframe".to_string(),
            },
        ]
    }

    #[test]
    fn json_report_flags_failures() {
        let mut buf = Vec::new();
        generate_json_report(&mut buf, &summary(), &checks()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["passed"], false);
        assert_eq!(value["duration_ms"], 12);
        assert_eq!(value["build"]["files"].as_array().unwrap().len(), 2);
        assert_eq!(value["checks"][1]["check"], "iframe");
    }

    #[test]
    fn markdown_report_has_tables() {
        let mut buf = Vec::new();
        generate_markdown_report(&mut buf, &summary(), &checks()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("# Cowboy Safari Site Build"));
        assert!(text.contains("| home | `dist/index.html` | 2048 |"));
        assert!(text.contains("| home | iframe | ❌ | no iframe |"));
    }

    #[test]
    fn console_report_counts_checks() {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        generate_console_report(&mut buf, &summary(), &checks()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Documents: 1 (2 files, 2560 bytes)"));
        assert!(text.contains("Failed: 1"));
        assert!(text.contains("❌ FAIL [home] iframe - no iframe"));
    }
}
