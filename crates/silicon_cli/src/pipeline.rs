//! Shared helpers for CLI commands: project root resolution, logging setup
//! and diagnostic rendering.

use std::path::{Path, PathBuf};

use silicon_config::CONFIG_FILE_NAME;
use silicon_diagnostics::{
    Diagnostic, DiagnosticRenderer, DiagnosticSink, JsonRenderer, TerminalRenderer,
};
use tracing_subscriber::EnvFilter;

use crate::{GlobalArgs, ReportFormat};

/// Walks up from `start` looking for the nearest directory containing `silicon.toml`.
pub fn find_project_root(start: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(CONFIG_FILE_NAME).exists() {
            return Ok(current);
        }
        if !current.pop() {
            return Err(format!(
                "could not find {CONFIG_FILE_NAME} in {} or any parent directory",
                start.display()
            )
            .into());
        }
    }
}

/// Resolves the project root directory from global CLI args.
///
/// If `--config` is specified, uses that path (file → parent dir, dir → itself).
/// Otherwise walks up from the current directory looking for `silicon.toml`.
pub fn resolve_project_root(global: &GlobalArgs) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(ref config_path) = global.config {
        let p = PathBuf::from(config_path);
        if p.is_file() {
            Ok(p.parent()
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| PathBuf::from(".")))
        } else {
            Ok(p)
        }
    } else {
        find_project_root(&std::env::current_dir()?)
    }
}

/// Default log filter for the verbosity flags.
pub fn default_filter(global: &GlobalArgs) -> &'static str {
    if global.quiet {
        return "error";
    }
    match global.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides the flags.
pub fn init_tracing(global: &GlobalArgs) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(global)));
    // A subscriber may already be installed (tests).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Prints every diagnostic in the sink in the requested format.
///
/// Text goes to stderr; JSON goes to stdout, one object per line.
pub fn render_diagnostics(sink: &DiagnosticSink, format: ReportFormat, global: &GlobalArgs) {
    let diagnostics: Vec<Diagnostic> = sink.diagnostics();
    match format {
        ReportFormat::Text => {
            let renderer = TerminalRenderer::new(global.color);
            for diag in &diagnostics {
                eprintln!("{}", renderer.render(diag));
            }
        }
        ReportFormat::Json => {
            for diag in &diagnostics {
                println!("{}", JsonRenderer.render(diag));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn global(config: Option<String>) -> GlobalArgs {
        GlobalArgs {
            quiet: false,
            verbose: 0,
            color: false,
            config,
        }
    }

    #[test]
    fn find_root_in_ancestor() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "[project]\nname = \"x\"\n").unwrap();
        let nested = dir.path().join("chips").join("SF32LB52x");
        std::fs::create_dir_all(&nested).unwrap();
        assert_eq!(find_project_root(&nested).unwrap(), dir.path());
    }

    #[test]
    fn find_root_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = find_project_root(dir.path()).unwrap_err();
        assert!(err.to_string().contains(CONFIG_FILE_NAME));
    }

    #[test]
    fn config_file_resolves_to_parent() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&file, "").unwrap();
        let root = resolve_project_root(&global(Some(file.display().to_string()))).unwrap();
        assert_eq!(root, dir.path());
    }

    #[test]
    fn config_dir_resolves_to_itself() {
        let dir = tempfile::tempdir().unwrap();
        let root =
            resolve_project_root(&global(Some(dir.path().display().to_string()))).unwrap();
        assert_eq!(root, dir.path());
    }

    #[test]
    fn verbosity_filters() {
        let mut g = global(None);
        assert_eq!(default_filter(&g), "warn");
        g.verbose = 1;
        assert_eq!(default_filter(&g), "info");
        g.verbose = 5;
        assert_eq!(default_filter(&g), "trace");
        g.quiet = true;
        assert_eq!(default_filter(&g), "error");
    }
}
