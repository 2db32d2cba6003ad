//! C header emission.

use crate::descriptor::{RoutingDescriptor, OFFSET, PIN, PORT, POSITION, SELECT};
use crate::resolve::EncodingTable;
use silicon_model::SeriesDocument;
use std::collections::BTreeSet;
use std::fmt::Write;

/// One `#define` of the header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderDecl {
    /// Constant name, `<PAD>_<FUNCTION>`.
    pub name: String,
    /// Pad the constant belongs to.
    pub pad: String,
    /// Encoded values.
    pub descriptor: RoutingDescriptor,
}

impl HeaderDecl {
    /// The `#define` line for this constant.
    pub fn render(&self) -> String {
        let d = &self.descriptor;
        format!(
            "#define {} PINMUX({}, {}, {}, 0x{:03X}, {})",
            self.name, d.port, d.pin, d.select, d.offset, d.field_position
        )
    }
}

/// The header of one series.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    /// Series identifier.
    pub model_id: String,
    /// Constants in pad order, then function order.
    pub decls: Vec<HeaderDecl>,
}

/// Header constant name of a pad-function pair.
pub fn constant_name(pad: &str, function: &str) -> String {
    format!("{pad}_{function}")
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Builds the header of a series from its resolved encodings.
pub fn emit_header(doc: &SeriesDocument, encodings: &EncodingTable) -> Header {
    let decls = encodings
        .iter()
        .map(|e| HeaderDecl {
            name: constant_name(&e.pad, &e.function),
            pad: e.pad.clone(),
            descriptor: e.descriptor,
        })
        .collect();
    Header {
        model_id: doc.model_id.clone(),
        decls,
    }
}

impl Header {
    /// Include guard symbol, `<MODEL_ID>_PINMUX_H`.
    pub fn guard(&self) -> String {
        constant_name(&self.model_id, "PINMUX_H")
    }

    /// Looks up a constant by name.
    pub fn decl(&self, name: &str) -> Option<&HeaderDecl> {
        self.decls.iter().find(|d| d.name == name)
    }

    /// Renders the header text.
    pub fn render(&self) -> String {
        let guard = self.guard();
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.render_into(&mut out, &guard);
        out
    }

    fn render_into(&self, out: &mut String, guard: &str) -> std::fmt::Result {
        writeln!(
            out,
            "/* Pinmux constants for {}. Generated by silicon, do not edit. */",
            self.model_id
        )?;
        writeln!(out, "#ifndef {guard}")?;
        writeln!(out, "#define {guard}")?;
        writeln!(out)?;

        let ports: BTreeSet<_> = self.decls.iter().map(|d| d.descriptor.port).collect();
        for port in &ports {
            writeln!(out, "#define PINMUX_PORT_{port} {}u", port.index())?;
        }
        if !ports.is_empty() {
            writeln!(out)?;
        }

        writeln!(out, "#define PINMUX(port, pin, sel, off, pos) \\")?;
        writeln!(
            out,
            "    ((PINMUX_PORT_##port << {}) | ((pin) << {}) | ((sel) << {}) | ((off) << {}) | ((pos) << {}))",
            PORT.shift, PIN.shift, SELECT.shift, OFFSET.shift, POSITION.shift
        )?;

        let mut current: Option<&str> = None;
        for decl in &self.decls {
            if current != Some(decl.pad.as_str()) {
                writeln!(out)?;
                writeln!(out, "/* {} */", decl.pad)?;
                current = Some(decl.pad.as_str());
            }
            writeln!(out, "{}", decl.render())?;
        }

        writeln!(out)?;
        writeln!(out, "#endif /* {guard} */")
    }
}
