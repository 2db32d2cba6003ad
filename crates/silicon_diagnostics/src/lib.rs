//! Diagnostic creation, severity management, and multi-format rendering.
//!
//! This crate provides structured [`Diagnostic`] messages with severity levels,
//! stable codes, and the series/pad/function context that produced them. The
//! thread-safe [`DiagnosticSink`] accumulates diagnostics from concurrently
//! building series, and [`DiagnosticRenderer`] implementations format them for
//! the terminal or as JSON lines.

#![warn(missing_docs)]

pub mod code;
pub mod diagnostic;
pub mod renderer;
pub mod severity;
pub mod sink;

pub use code::{Category, DiagnosticCode};
pub use diagnostic::{ContextEntry, Diagnostic};
pub use renderer::{DiagnosticRenderer, JsonRenderer, TerminalRenderer};
pub use severity::Severity;
pub use sink::DiagnosticSink;
