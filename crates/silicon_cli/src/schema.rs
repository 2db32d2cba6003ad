//! `silicon schema`: JSON Schema export.

use std::path::PathBuf;

use silicon_schema::{export_schema_string, SCHEMA_FILE_NAME};

use crate::{GlobalArgs, SchemaArgs};

/// Runs the `silicon schema` command.
///
/// Prints the schema to stdout, or writes it to `--output`. A directory
/// output receives `chip-series.schema.json`.
pub fn run(args: &SchemaArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let text = export_schema_string();
    let Some(output) = &args.output else {
        print!("{text}");
        return Ok(0);
    };

    let target = schema_target(output);
    std::fs::write(&target, text)?;
    tracing::info!(path = %target.display(), "wrote schema");
    if !global.quiet {
        eprintln!("      Wrote {}", target.display());
    }
    Ok(0)
}

fn schema_target(output: &str) -> PathBuf {
    let path = PathBuf::from(output);
    if path.is_dir() {
        path.join(SCHEMA_FILE_NAME)
    } else {
        path
    }
}
