//! Deterministic YAML rendering of a [`SeriesDocument`].
//!
//! The layout is fixed (block mappings, one flow mapping per function and
//! pin) so rebuilding unchanged sources yields byte-identical output. A pin
//! list referenced by more than one variant is written once under an anchor
//! and aliased from the other variants.

use crate::document::SeriesDocument;
use crate::variant::{PadBinding, Pin, PinListId};
use silicon_common::ArenaId;
use std::collections::{HashMap, HashSet};
use std::fmt::Write;

/// Renders the document as YAML.
pub fn write_yaml(doc: &SeriesDocument) -> String {
    let anchors = anchor_names(doc);
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = write_header(&mut out, doc);
    let _ = write_pads(&mut out, doc);
    let _ = write_variants(&mut out, doc, &anchors);
    out
}

fn write_header(out: &mut String, doc: &SeriesDocument) -> std::fmt::Result {
    writeln!(out, "schema_version: {}", doc.schema_version)?;
    writeln!(out, "model_id: {}", scalar(&doc.model_id))?;
    writeln!(out, "lifecycle: {}", doc.lifecycle)?;
    writeln!(out)?;

    if doc.docs.is_empty() {
        writeln!(out, "docs: []")?;
    } else {
        writeln!(out, "docs:")?;
        for entry in &doc.docs {
            let kinds: Vec<String> = entry
                .iter()
                .map(|(kind, locales)| {
                    let locales: Vec<String> = locales
                        .iter()
                        .map(|(lang, url)| format!("{}: {}", scalar(lang), quoted(url)))
                        .collect();
                    format!("{}: {{{}}}", scalar(kind), locales.join(", "))
                })
                .collect();
            writeln!(out, "  - {{{}}}", kinds.join(", "))?;
        }
    }
    writeln!(out)
}

fn write_pads(out: &mut String, doc: &SeriesDocument) -> std::fmt::Result {
    if doc.pads.is_empty() {
        writeln!(out, "pads: {{}}")?;
        return writeln!(out);
    }
    writeln!(out, "pads:")?;
    for (name, pad) in &doc.pads {
        writeln!(out, "  {}:", scalar(name))?;
        writeln!(out, "    type: {}", pad.pad_type)?;
        if let Some(description) = &pad.description {
            writeln!(out, "    description: {}", quoted(description))?;
        }
        if let Some(notes) = &pad.notes {
            writeln!(out, "    notes: {}", quoted(notes))?;
        }
        if pad.functions.is_empty() {
            writeln!(out, "    functions: []")?;
            continue;
        }
        writeln!(out, "    functions:")?;
        for function in &pad.functions {
            write!(
                out,
                "      - {{name: {}, select: {}",
                scalar(&function.name),
                function.select
            )?;
            if function.routed {
                write!(out, ", routed: true")?;
            }
            writeln!(out, "}}")?;
        }
    }
    writeln!(out)
}

fn write_variants(
    out: &mut String,
    doc: &SeriesDocument,
    anchors: &HashMap<PinListId, String>,
) -> std::fmt::Result {
    if doc.variants.is_empty() {
        return writeln!(out, "variants: []");
    }
    writeln!(out, "variants:")?;
    let mut written: HashSet<PinListId> = HashSet::new();
    for variant in &doc.variants {
        writeln!(out, "  - part_number: {}", scalar(&variant.part_number))?;
        if let Some(description) = &variant.description {
            writeln!(out, "    description: {}", quoted(description))?;
        }
        writeln!(out, "    package: {}", scalar(&variant.package))?;

        let pins = doc.pins_of(variant);
        match anchors.get(&variant.pins) {
            Some(anchor) if !written.insert(variant.pins) => {
                writeln!(out, "    pins: *{anchor}")?;
            }
            Some(anchor) => write_pin_list(out, pins, Some(anchor))?,
            None => write_pin_list(out, pins, None)?,
        }

        if !variant.memory.is_empty() {
            writeln!(out, "    memory:")?;
            for device in &variant.memory {
                write!(
                    out,
                    "      - {{mpi: {}, type: {}",
                    scalar(&device.mpi),
                    scalar(&device.kind)
                )?;
                if let Some(size) = &device.size {
                    write!(out, ", size: {}", scalar(size))?;
                }
                writeln!(out, "}}")?;
            }
        }
    }
    Ok(())
}

fn write_pin_list(out: &mut String, pins: &[Pin], anchor: Option<&str>) -> std::fmt::Result {
    let anchor = anchor.map(|a| format!(" &{a}")).unwrap_or_default();
    if pins.is_empty() {
        return writeln!(out, "    pins:{anchor} []");
    }
    writeln!(out, "    pins:{anchor}")?;
    for pin in pins {
        let pad = match &pin.pad {
            PadBinding::Single(name) => scalar(name),
            PadBinding::Bonded(names) => {
                let names: Vec<String> = names.iter().map(|n| scalar(n)).collect();
                format!("[{}]", names.join(", "))
            }
        };
        writeln!(out, "      - {{number: {}, pad: {}}}", quoted(&pin.number), pad)?;
    }
    Ok(())
}

/// Picks an anchor name for every pin list used by more than one variant.
///
/// Names follow `<MODEL_ID>_<PACKAGE>_PINS` after the first variant using the
/// list, with a numeric suffix when two shared lists collide.
fn anchor_names(doc: &SeriesDocument) -> HashMap<PinListId, String> {
    let users = doc.pin_list_users();
    let mut anchors = HashMap::new();
    let mut taken = HashSet::new();

    for variant in &doc.variants {
        let shared = users
            .get(variant.pins.as_raw() as usize)
            .is_some_and(|&n| n > 1);
        if !shared || anchors.contains_key(&variant.pins) {
            continue;
        }
        let base = anchor_token(&format!("{}_{}_PINS", doc.model_id, variant.package));
        let mut name = base.clone();
        let mut suffix = 2;
        while !taken.insert(name.clone()) {
            name = format!("{base}_{suffix}");
            suffix += 1;
        }
        anchors.insert(variant.pins, name);
    }
    anchors
}

fn anchor_token(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Writes `s` plain when YAML would read it back as the same string,
/// double-quoted otherwise.
fn scalar(s: &str) -> String {
    const RESERVED: [&str; 11] = [
        "true", "false", "yes", "no", "on", "off", "null", "y", "n", "~", "nan",
    ];
    let plain = s
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
        && !RESERVED.contains(&s.to_ascii_lowercase().as_str());
    if plain {
        s.to_string()
    } else {
        quoted(s)
    }
}

fn quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
