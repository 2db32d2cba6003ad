//! `silicon validate`: re-check written series documents.

use silicon_diagnostics::DiagnosticSink;

use crate::pipeline::{render_diagnostics, resolve_project_root};
use crate::{GlobalArgs, ReportFormat, ValidateArgs};

/// Runs the `silicon validate` command.
///
/// Returns exit code 0 if every document is valid, 1 otherwise.
pub fn run(args: &ValidateArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let project_dir = resolve_project_root(global)?;
    let config = silicon_config::load_config(&project_dir)?;

    if !global.quiet {
        eprintln!(
            "   Validating {} (schema v{})",
            config.project.name, config.project.schema_version
        );
    }

    let sink = DiagnosticSink::new();
    let summary = silicon_build::validate_outputs(&project_dir, &config, &args.series, &sink)?;

    render_diagnostics(&sink, args.format, global);

    if !global.quiet && args.format == ReportFormat::Text {
        eprintln!("   Result: {summary}");
    }

    Ok(if summary.is_success() { 0 } else { 1 })
}
