//! `silicon build`: chip sources to series documents and headers.
//!
//! 1. Find project root (walk up looking for `silicon.toml`)
//! 2. Load config via `silicon_config`
//! 3. Build every selected series via `silicon_build`
//! 4. Render diagnostics and the summary

use silicon_diagnostics::DiagnosticSink;

use crate::pipeline::{render_diagnostics, resolve_project_root};
use crate::{BuildArgs, GlobalArgs, ReportFormat};

/// Runs the `silicon build` command.
///
/// Returns exit code 0 if every series built, 1 otherwise.
pub fn run(args: &BuildArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let project_dir = resolve_project_root(global)?;
    let config = silicon_config::load_config(&project_dir)?;

    if !global.quiet {
        eprintln!("   Building {}", config.project.name);
    }

    let sink = DiagnosticSink::new();
    let summary = silicon_build::build_project(&project_dir, &config, &args.series, &sink)?;

    render_diagnostics(&sink, args.format, global);

    if !global.quiet && args.format == ReportFormat::Text {
        for name in &summary.built {
            eprintln!("      Built {name}");
        }
        eprintln!(
            "   Result: {summary}; {} error(s), {} warning(s)",
            sink.error_count(),
            sink.warning_count()
        );
    }

    Ok(if summary.is_success() { 0 } else { 1 })
}
