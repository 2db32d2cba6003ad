//! Diagnostic codes and the conversion of build errors into diagnostics.

use crate::error::{BuildError, BuildErrorKind};
use silicon_codegen::EncodingError;
use silicon_diagnostics::{Category, Diagnostic, DiagnosticCode};
use silicon_merge::MergeError;
use silicon_pinmux::PinmuxError;
use silicon_source::SourceError;

const fn error(number: u16) -> DiagnosticCode {
    DiagnosticCode::new(Category::Error, number)
}

const fn warning(number: u16) -> DiagnosticCode {
    DiagnosticCode::new(Category::Warning, number)
}

/// A source file could not be read.
pub const SOURCE_IO: DiagnosticCode = error(101);
/// A source file could not be parsed.
pub const SOURCE_PARSE: DiagnosticCode = error(102);
/// An artifact could not be written.
pub const ARTIFACT_WRITE: DiagnosticCode = error(103);
/// A requested series has no chip directory.
pub const UNKNOWN_SERIES: DiagnosticCode = error(104);

/// A templated entry names an unknown peripheral.
pub const UNKNOWN_PERIPHERAL: DiagnosticCode = error(201);
/// A peripheral instance has no signals.
pub const MISSING_INSTANCE_SIGNALS: DiagnosticCode = error(202);
/// A pad has two functions of the same name.
pub const DUPLICATE_FUNCTION: DiagnosticCode = error(203);
/// The routing registry is malformed.
pub const INVALID_REGISTRY: DiagnosticCode = error(204);

/// A pin refers to an undeclared pad.
pub const UNKNOWN_PAD_REFERENCE: DiagnosticCode = error(301);
/// Two variants share a part number.
pub const DUPLICATE_PART_NUMBER: DiagnosticCode = error(302);
/// A variant repeats a pin.
pub const DUPLICATE_PIN_NUMBER: DiagnosticCode = error(303);
/// Memory on a non-SiP interface.
pub const NON_SIP_MEMORY: DiagnosticCode = error(304);

/// No `<INSTANCE>_PINR` register.
pub const UNKNOWN_REGISTER: DiagnosticCode = error(401);
/// No field for the signal in its PINR register.
pub const UNKNOWN_FIELD: DiagnosticCode = error(402);
/// A pad name without port and pin.
pub const MALFORMED_PAD_NAME: DiagnosticCode = error(403);
/// A routed function name without an instance/signal split.
pub const MALFORMED_FUNCTION_NAME: DiagnosticCode = error(404);
/// A value that does not fit the packed descriptor.
pub const FIELD_OUT_OF_RANGE: DiagnosticCode = error(405);
/// Two pad-function pairs that emit the same header constant.
pub const DUPLICATE_CONSTANT: DiagnosticCode = error(406);

/// A schema violation.
pub const SCHEMA_VIOLATION: DiagnosticCode = error(501);

/// A chip names a shared table that does not exist.
pub const MISSING_SHARED_TABLE: DiagnosticCode = warning(101);
/// A chip directory has no `chip.yaml`.
pub const MISSING_CHIP_SOURCE: DiagnosticCode = warning(102);

/// Converts a build error into diagnostics.
///
/// Schema failures yield one diagnostic per violation; every other error
/// yields exactly one. Each carries the series and, where known, the pad,
/// function or file that triggered it.
pub fn to_diagnostics(err: &BuildError) -> Vec<Diagnostic> {
    let series = err.series.as_str();
    match &err.kind {
        BuildErrorKind::SchemaValidationFailed(violations) => violations
            .iter()
            .map(|v| {
                let pointer = if v.pointer.is_empty() { "/" } else { v.pointer.as_str() };
                Diagnostic::error(SCHEMA_VIOLATION, v.message.clone())
                    .with_context("series", series)
                    .with_context("at", pointer)
            })
            .collect(),
        kind => vec![single(series, kind)],
    }
}

fn single(series: &str, kind: &BuildErrorKind) -> Diagnostic {
    let message = kind.to_string();
    let base = |code| Diagnostic::error(code, message.clone()).with_context("series", series);

    match kind {
        BuildErrorKind::Source(source) => {
            let code = match source {
                SourceError::Io { .. } => SOURCE_IO,
                SourceError::Parse { .. } => SOURCE_PARSE,
            };
            base(code).with_context("file", source.path().display().to_string())
        }
        BuildErrorKind::Pinmux(e) => {
            let code = match e {
                PinmuxError::UnknownPeripheral { .. } => UNKNOWN_PERIPHERAL,
                PinmuxError::MissingInstanceSignals { .. } => MISSING_INSTANCE_SIGNALS,
                PinmuxError::DuplicateFunction { .. } => DUPLICATE_FUNCTION,
                _ => INVALID_REGISTRY,
            };
            let diag = base(code);
            let diag = match e.pad() {
                Some(pad) => diag.with_context("pad", pad),
                None => diag,
            };
            match e {
                PinmuxError::UnknownPeripheral { .. } => {
                    diag.with_help("declare the peripheral under `peripherals` in routing.yaml")
                }
                PinmuxError::DuplicateFunction { function, .. } => {
                    diag.with_context("function", function.as_str())
                }
                _ => diag,
            }
        }
        BuildErrorKind::Merge(e) => match e {
            MergeError::UnknownPadReference {
                part_number, pad, ..
            } => base(UNKNOWN_PAD_REFERENCE)
                .with_context("variant", part_number.as_str())
                .with_help(format!("declare `{pad}` under `pads` in chip.yaml")),
            MergeError::DuplicatePartNumber { part_number } => {
                base(DUPLICATE_PART_NUMBER).with_context("variant", part_number.as_str())
            }
            MergeError::DuplicatePinNumber { part_number, .. } => {
                base(DUPLICATE_PIN_NUMBER).with_context("variant", part_number.as_str())
            }
            MergeError::NonSipMemory { part_number, .. } => base(NON_SIP_MEMORY)
                .with_context("variant", part_number.as_str())
                .with_note("only interfaces marked `sip: true` in mpi.yaml can carry memory"),
        },
        BuildErrorKind::Encoding(e) => {
            let (code, function) = match e {
                EncodingError::UnknownRegister { function, .. } => {
                    (UNKNOWN_REGISTER, Some(function))
                }
                EncodingError::UnknownField { function, .. } => (UNKNOWN_FIELD, Some(function)),
                EncodingError::MalformedPadName { .. } => (MALFORMED_PAD_NAME, None),
                EncodingError::MalformedFunctionName { function, .. } => {
                    (MALFORMED_FUNCTION_NAME, Some(function))
                }
                EncodingError::FieldOutOfRange { function, .. } => {
                    (FIELD_OUT_OF_RANGE, Some(function))
                }
                EncodingError::DuplicateConstant { function, .. } => {
                    (DUPLICATE_CONSTANT, Some(function))
                }
            };
            let diag = base(code).with_context("pad", e.pad());
            match function {
                Some(function) => diag.with_context("function", function.as_str()),
                None => diag,
            }
        }
        BuildErrorKind::Write { path, .. } => {
            base(ARTIFACT_WRITE).with_context("file", path.display().to_string())
        }
        // Expanded by the caller, one diagnostic per violation.
        BuildErrorKind::SchemaValidationFailed(_) => base(SCHEMA_VIOLATION),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use silicon_schema::SchemaViolation;
    use std::path::PathBuf;

    #[test]
    fn unknown_peripheral_diagnostic() {
        let err = BuildError::new(
            "SF32LB52x",
            PinmuxError::UnknownPeripheral {
                pad: "PA10".to_string(),
                peripheral: "SPI3".to_string(),
            },
        );
        let diags = to_diagnostics(&err);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, UNKNOWN_PERIPHERAL);
        assert_eq!(diags[0].code.to_string(), "E201");
        assert_eq!(diags[0].context_value("series"), Some("SF32LB52x"));
        assert_eq!(diags[0].context_value("pad"), Some("PA10"));
        assert!(diags[0].message.contains("SPI3"));
    }

    #[test]
    fn schema_failure_expands_per_violation() {
        let err = BuildError::new(
            "S",
            BuildErrorKind::SchemaValidationFailed(vec![
                SchemaViolation::new("", "missing required property `docs`"),
                SchemaViolation::new("/lifecycle", "`x` is not one of: preview"),
            ]),
        );
        let diags = to_diagnostics(&err);
        assert_eq!(diags.len(), 2);
        assert!(diags.iter().all(|d| d.code == SCHEMA_VIOLATION));
        assert_eq!(diags[0].context_value("at"), Some("/"));
        assert_eq!(diags[1].context_value("at"), Some("/lifecycle"));
    }

    #[test]
    fn encoding_diagnostic_names_function() {
        let err = BuildError::new(
            "S",
            EncodingError::UnknownField {
                pad: "PA00".to_string(),
                function: "USART1_CTS".to_string(),
                register: "USART1_PINR".to_string(),
                signal: "CTS".to_string(),
            },
        );
        let diag = &to_diagnostics(&err)[0];
        assert_eq!(diag.code.to_string(), "E402");
        assert_eq!(diag.context_value("pad"), Some("PA00"));
        assert_eq!(diag.context_value("function"), Some("USART1_CTS"));
    }

    #[test]
    fn duplicate_constant_diagnostic() {
        let err = BuildError::new(
            "S",
            EncodingError::DuplicateConstant {
                pad: "PA00".to_string(),
                function: "LCD_D0".to_string(),
                constant: "PA00_LCD_D0".to_string(),
                previous: "PA00.LCD.D0".to_string(),
            },
        );
        let diag = &to_diagnostics(&err)[0];
        assert_eq!(diag.code, DUPLICATE_CONSTANT);
        assert_eq!(diag.code.to_string(), "E406");
        assert_eq!(diag.context_value("function"), Some("LCD_D0"));
        assert!(diag.message.contains("PA00_LCD_D0"));
    }

    #[test]
    fn source_diagnostic_names_file() {
        let err = BuildError::new(
            "S",
            SourceError::Parse {
                path: PathBuf::from("chips/S/chip.yaml"),
                reason: "bad".to_string(),
            },
        );
        let diag = &to_diagnostics(&err)[0];
        assert_eq!(diag.code, SOURCE_PARSE);
        assert_eq!(diag.context_value("file"), Some("chips/S/chip.yaml"));
    }

    #[test]
    fn merge_diagnostic_names_variant() {
        let err = BuildError::new(
            "S",
            MergeError::NonSipMemory {
                part_number: "P1".to_string(),
                mpi: "MPI2".to_string(),
            },
        );
        let diag = &to_diagnostics(&err)[0];
        assert_eq!(diag.code.to_string(), "E304");
        assert_eq!(diag.context_value("variant"), Some("P1"));
        assert_eq!(diag.notes.len(), 1);
    }
}
