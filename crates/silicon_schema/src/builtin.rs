//! The built-in validator: evaluates documents against the exported schema.
//!
//! The evaluator covers the keywords the exported schema uses: `$ref` into
//! `definitions`, `allOf`/`anyOf`/`oneOf`, `const`, `enum`, `type`,
//! `properties`/`required`/`additionalProperties`, `items`/`minItems`,
//! `minLength` and `minimum`/`maximum`. Other keywords are ignored.

use crate::export::export_schema_for;
use crate::pointer::JsonPointer;
use crate::validator::{SchemaValidator, SchemaViolation};
use serde_json::{Map, Value};

/// The schema version this toolchain produces and validates.
pub const SCHEMA_VERSION: u32 = 1;

/// Validates documents against the exported series schema of one version.
#[derive(Clone, Debug, PartialEq)]
pub struct BuiltinValidator {
    version: u32,
    schema: Value,
}

impl BuiltinValidator {
    /// A validator bound to `version`.
    pub fn new(version: u32) -> Self {
        // A schema that cannot be rendered rejects everything.
        let schema = serde_json::to_value(export_schema_for(version)).unwrap_or(Value::Bool(false));
        Self { version, schema }
    }
}

impl Default for BuiltinValidator {
    fn default() -> Self {
        Self::new(SCHEMA_VERSION)
    }
}

impl SchemaValidator for BuiltinValidator {
    fn schema_version(&self) -> u32 {
        self.version
    }

    fn validate(&self, document: &Value) -> Vec<SchemaViolation> {
        let mut evaluator = Evaluator::new(self.schema.get("definitions").and_then(Value::as_object));
        evaluator.check(&self.schema, document, &JsonPointer::root());
        evaluator.violations
    }
}

struct Evaluator<'s> {
    definitions: Option<&'s Map<String, Value>>,
    violations: Vec<SchemaViolation>,
}

impl<'s> Evaluator<'s> {
    fn new(definitions: Option<&'s Map<String, Value>>) -> Self {
        Self {
            definitions,
            violations: Vec::new(),
        }
    }

    fn report(&mut self, at: &JsonPointer, message: impl Into<String>) {
        self.violations
            .push(SchemaViolation::new(at.as_str(), message));
    }

    /// Whether `value` satisfies `schema`, without reporting anything.
    fn matches(&self, schema: &'s Value, value: &Value) -> bool {
        let mut trial = Evaluator::new(self.definitions);
        trial.check(schema, value, &JsonPointer::root());
        trial.violations.is_empty()
    }

    fn resolve(&self, reference: &str) -> Option<&'s Value> {
        let name = reference.strip_prefix("#/definitions/")?;
        self.definitions?.get(name)
    }

    fn check(&mut self, schema: &'s Value, value: &Value, at: &JsonPointer) {
        let schema = match schema {
            Value::Bool(true) => return,
            Value::Object(schema) => schema,
            _ => {
                self.report(at, "value is not allowed here");
                return;
            }
        };

        if let Some(reference) = schema.get("$ref").and_then(Value::as_str) {
            match self.resolve(reference) {
                Some(target) => self.check(target, value, at),
                None => self.report(at, format!("unresolvable schema reference `{reference}`")),
            }
            return;
        }
        if let Some(expected) = schema.get("const") {
            if value != expected {
                self.report(at, format!("expected {expected}, found {value}"));
            }
            return;
        }
        if let Some(allowed) = schema.get("enum").and_then(Value::as_array) {
            if !allowed.contains(value) {
                self.report(at, not_one_of(value, allowed.iter()));
            }
            return;
        }
        if let Some(branches) = schema.get("allOf").and_then(Value::as_array) {
            for branch in branches {
                self.check(branch, value, at);
            }
        }
        for (keyword, exactly_one) in [("oneOf", true), ("anyOf", false)] {
            if let Some(branches) = schema.get(keyword).and_then(Value::as_array) {
                let matching = branches.iter().filter(|b| self.matches(*b, value)).count();
                let ok = if exactly_one { matching == 1 } else { matching > 0 };
                if !ok {
                    let message = match enumerated(branches) {
                        Some(allowed) => not_one_of(value, allowed.into_iter()),
                        None => format!("{value} does not match any allowed form"),
                    };
                    self.report(at, message);
                    return;
                }
            }
        }
        if let Some(expected) = schema.get("type") {
            if !type_matches(expected, value) {
                self.report(at, format!("expected {}", describe_type(expected)));
                return;
            }
        }

        match value {
            Value::Object(map) => self.object(schema, map, at),
            Value::Array(items) => self.array(schema, items, at),
            Value::String(text) => {
                if let Some(min) = schema.get("minLength").and_then(Value::as_u64) {
                    if (text.chars().count() as u64) < min {
                        if min == 1 {
                            self.report(at, "expected a non-empty string");
                        } else {
                            self.report(at, format!("expected at least {min} characters"));
                        }
                    }
                }
            }
            Value::Number(n) => {
                let Some(n) = n.as_f64() else { return };
                if let Some(min) = schema.get("minimum").and_then(Value::as_f64) {
                    if n < min {
                        self.report(at, format!("expected a value of at least {min}"));
                    }
                }
                if let Some(max) = schema.get("maximum").and_then(Value::as_f64) {
                    if n > max {
                        self.report(at, format!("expected a value of at most {max}"));
                    }
                }
            }
            Value::Null | Value::Bool(_) => {}
        }
    }

    /// Reports missing required keys at the object, then unexpected keys at
    /// the key itself.
    fn object(&mut self, schema: &'s Map<String, Value>, map: &Map<String, Value>, at: &JsonPointer) {
        if let Some(required) = schema.get("required").and_then(Value::as_array) {
            for key in required.iter().filter_map(Value::as_str) {
                if !map.contains_key(key) {
                    self.report(at, format!("missing required property `{key}`"));
                }
            }
        }
        let properties = schema.get("properties").and_then(Value::as_object);
        for (key, child) in map {
            let at = at.key(key);
            match properties.and_then(|p| p.get(key)) {
                Some(property) => self.check(property, child, &at),
                None => match schema.get("additionalProperties") {
                    Some(Value::Bool(false)) => {
                        self.report(&at, format!("unexpected property `{key}`"))
                    }
                    Some(extra) if extra.is_object() => self.check(extra, child, &at),
                    _ => {}
                },
            }
        }
    }

    fn array(&mut self, schema: &'s Map<String, Value>, items: &[Value], at: &JsonPointer) {
        if let Some(min) = schema.get("minItems").and_then(Value::as_u64) {
            if (items.len() as u64) < min {
                self.report(at, format!("expected at least {min} item(s)"));
            }
        }
        if let Some(item) = schema.get("items") {
            for (i, child) in items.iter().enumerate() {
                self.check(item, child, &at.index(i));
            }
        }
    }
}

/// The values of branches that are each a plain enumeration, if all are.
fn enumerated(branches: &[Value]) -> Option<Vec<&Value>> {
    let mut values = Vec::new();
    for branch in branches {
        values.extend(branch.get("enum")?.as_array()?);
    }
    Some(values)
}

fn not_one_of<'a>(value: &Value, allowed: impl Iterator<Item = &'a Value>) -> String {
    let allowed: Vec<String> = allowed
        .map(|v| v.as_str().map_or_else(|| v.to_string(), str::to_string))
        .collect();
    let found = value.as_str().map_or_else(|| value.to_string(), str::to_string);
    format!("`{found}` is not one of: {}", allowed.join(", "))
}

fn type_matches(expected: &Value, value: &Value) -> bool {
    match expected {
        Value::String(name) => is_type(name, value),
        Value::Array(names) => names
            .iter()
            .filter_map(Value::as_str)
            .any(|name| is_type(name, value)),
        _ => true,
    }
}

fn is_type(name: &str, value: &Value) -> bool {
    match name {
        "object" => value.is_object(),
        "array" => value.is_array(),
        "string" => value.is_string(),
        "integer" => value.is_i64() || value.is_u64(),
        "number" => value.is_number(),
        "boolean" => value.is_boolean(),
        "null" => value.is_null(),
        _ => false,
    }
}

fn describe_type(expected: &Value) -> String {
    let article = |name: &str| match name {
        "object" | "array" | "integer" => format!("an {name}"),
        "null" => "null".to_string(),
        _ => format!("a {name}"),
    };
    match expected {
        Value::String(name) => article(name),
        Value::Array(names) => names
            .iter()
            .filter_map(Value::as_str)
            .map(article)
            .collect::<Vec<_>>()
            .join(" or "),
        _ => expected.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid() -> Value {
        json!({
            "schema_version": 1,
            "model_id": "SF32LB52x",
            "lifecycle": "production",
            "docs": [{"datasheet": {"en": "https://example.com/ds.pdf"}}],
            "pads": {
                "PA00": {
                    "type": "bidirectional",
                    "description": "GPIO",
                    "functions": [
                        {"name": "GPIO_A0", "select": 0},
                        {"name": "I2C1_SDA", "select": 4, "routed": true}
                    ]
                },
                "VDD": {"type": "power_input", "notes": "3.3 V", "functions": []}
            },
            "variants": [{
                "part_number": "SF32LB520U36",
                "package": "QFN68",
                "pins": [
                    {"number": "1", "pad": "PA00"},
                    {"number": "A2", "pad": ["VDD", "PA00"]}
                ],
                "memory": [{"mpi": "MPI1", "type": "nor_flash", "size": "1MB"}]
            }]
        })
    }

    fn pointers(violations: &[SchemaViolation]) -> Vec<&str> {
        violations.iter().map(|v| v.pointer.as_str()).collect()
    }

    #[test]
    fn valid_document_passes() {
        assert!(BuiltinValidator::default().validate(&valid()).is_empty());
    }

    #[test]
    fn bound_version_is_reported() {
        assert_eq!(BuiltinValidator::new(2).schema_version(), 2);
        let violations = BuiltinValidator::new(2).validate(&valid());
        assert_eq!(pointers(&violations), vec!["/schema_version"]);
        assert_eq!(violations[0].message, "expected 2, found 1");
    }

    #[test]
    fn collects_every_violation() {
        let mut doc = valid();
        doc["lifecycle"] = json!("retired");
        doc["pads"]["PA00"]["type"] = json!("tristate");
        doc["pads"]["PA00"]["functions"][1]["select"] = json!(-1);
        doc["variants"][0]["pins"][0]["number"] = json!(1);
        let violations = BuiltinValidator::default().validate(&doc);
        let mut found = pointers(&violations);
        found.sort_unstable();
        assert_eq!(
            found,
            vec![
                "/lifecycle",
                "/pads/PA00/functions/1/select",
                "/pads/PA00/type",
                "/variants/0/pins/0/number",
            ]
        );
        let lifecycle = violations.iter().find(|v| v.pointer == "/lifecycle").unwrap();
        assert!(lifecycle.message.starts_with("`retired` is not one of: preview"));
    }

    #[test]
    fn empty_strings_rejected() {
        let mut doc = valid();
        doc["model_id"] = json!("");
        doc["variants"][0]["memory"][0]["mpi"] = json!("");
        let violations = BuiltinValidator::default().validate(&doc);
        let mut found = pointers(&violations);
        found.sort_unstable();
        assert_eq!(found, vec!["/model_id", "/variants/0/memory/0/mpi"]);
        assert!(violations.iter().all(|v| v.message == "expected a non-empty string"));
    }

    #[test]
    fn exported_schema_file_gives_same_verdicts() {
        let exported: Value = serde_json::from_str(&crate::export_schema_string()).unwrap();
        let from_file = BuiltinValidator {
            version: SCHEMA_VERSION,
            schema: exported,
        };
        let builtin = BuiltinValidator::default();

        let mut without_functions = valid();
        without_functions["pads"]["VDD"]
            .as_object_mut()
            .unwrap()
            .remove("functions");
        let mut wrong_version = valid();
        wrong_version["schema_version"] = json!(7);
        let mut unknown_memory_key = valid();
        unknown_memory_key["variants"][0]["memory"][0]["speed"] = json!("80MHz");

        let fixtures = [valid(), without_functions, wrong_version, unknown_memory_key];
        for (i, fixture) in fixtures.iter().enumerate() {
            let expected = builtin.validate(fixture);
            assert_eq!(from_file.validate(fixture), expected, "fixture {i}");
            assert_eq!(expected.is_empty(), i == 0, "fixture {i}: {expected:?}");
        }
    }

    #[test]
    fn pads_must_list_functions() {
        let mut doc = valid();
        doc["pads"]["VDD"].as_object_mut().unwrap().remove("functions");
        let violations = BuiltinValidator::default().validate(&doc);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].to_string(), "/pads/VDD: missing required property `functions`");
    }

    #[test]
    fn missing_and_unexpected_keys() {
        let mut doc = valid();
        let root = doc.as_object_mut().unwrap();
        root.remove("model_id");
        root.insert("drive_strength".to_string(), json!(4));
        let violations = BuiltinValidator::default().validate(&doc);
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].pointer, "");
        assert_eq!(violations[0].message, "missing required property `model_id`");
        assert_eq!(violations[1].pointer, "/drive_strength");
    }

    #[test]
    fn pointer_escapes_pad_names() {
        let mut doc = valid();
        doc["pads"]["AVDD/REF"] = json!({"type": "analog"});
        let violations = BuiltinValidator::default().validate(&doc);
        assert_eq!(pointers(&violations), vec!["/pads/AVDD~1REF"]);
        assert!(violations[0].message.contains("`functions`"));
    }

    #[test]
    fn empty_bonded_list_rejected() {
        let mut doc = valid();
        doc["variants"][0]["pins"][1]["pad"] = json!([]);
        let violations = BuiltinValidator::default().validate(&doc);
        assert_eq!(pointers(&violations), vec!["/variants/0/pins/1/pad"]);
    }

    #[test]
    fn non_object_root() {
        let violations = BuiltinValidator::default().validate(&json!([1, 2]));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].to_string(), "(root): expected an object");
    }
}
