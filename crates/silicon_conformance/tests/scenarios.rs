//! Literal known-good scenarios for expansion, encoding and failure reporting.

use silicon_build::{to_diagnostics, BuildErrorKind};
use silicon_codegen::EncodingError;
use silicon_conformance::{decode_header, run_series, run_series_with, settings, SeriesFixture};
use silicon_model::Function;
use silicon_pinmux::PinmuxError;

const CHIP: &str = r#"
schema_version: 1
model_id: SF32LB52x
lifecycle: production
shared_pinmux: sf32lb52x
pads:
  PA00: {type: bidirectional, description: General purpose IO}
variants:
  - part_number: SF32LB520U36
    package: QFN68
    pins:
      - {number: 1, pad: PA00}
"#;

#[test]
fn direct_function_passes_through() {
    let table = "pinmux:\n  PA00:\n    - {function: GPIO_A0, select: 0}\n";
    let artifacts = run_series(&SeriesFixture::new(CHIP, table)).unwrap();
    let pad = artifacts.document.pad("PA00").unwrap();
    assert_eq!(pad.functions, vec![Function::direct("GPIO_A0", 0)]);
    assert!(!pad.functions[0].routed);
}

#[test]
fn templated_function_expands_instance_major() {
    let table = "pinmux:\n  PA00:\n    - {function: I2C, select: 4, requires_routing: true}\n";
    let routing = r#"
registers:
  - {name: I2C1_PINR, offset: 0x50, fields: {SDA: [5, 0], SCL: [13, 8]}}
  - {name: I2C2_PINR, offset: 0x54, fields: {SDA: [5, 0], SCL: [13, 8]}}
peripherals:
  - {name: I2C, instances: [I2C1, I2C2], signals: [SDA, SCL]}
"#;
    let artifacts = run_series(&SeriesFixture::new(CHIP, table).with_routing(routing)).unwrap();
    let pad = artifacts.document.pad("PA00").unwrap();
    assert_eq!(
        pad.functions,
        vec![
            Function::routed("I2C1_SDA", 4),
            Function::routed("I2C1_SCL", 4),
            Function::routed("I2C2_SDA", 4),
            Function::routed("I2C2_SCL", 4),
        ]
    );
}

#[test]
fn usart_txd_encodes_known_values() {
    let table = "pinmux:\n  PA00:\n    - {function: USART, select: 4, requires_routing: true}\n";
    let routing = r#"
registers:
  - {name: USART1_PINR, offset: 0x58, fields: {TXD: [5, 0]}}
peripherals:
  - {name: USART, instances: [USART1], signals: [TXD]}
"#;
    let artifacts = run_series(&SeriesFixture::new(CHIP, table).with_routing(routing)).unwrap();
    let header = artifacts.header.unwrap();
    assert!(header
        .text
        .contains("#define PA00_USART1_TXD PINMUX(A, 0, 4, 0x058, 0)\n"));

    let decoded = decode_header(&header.text);
    assert_eq!(decoded.len(), 1);
    let c = &decoded[0];
    assert_eq!(c.name, "PA00_USART1_TXD");
    assert_eq!((c.port, c.pin, c.select, c.offset, c.field_position), ('A', 0, 4, 0x58, 0));
}

#[test]
fn unknown_peripheral_names_peripheral_and_pad() {
    let table = "pinmux:\n  PA00:\n    - {function: SPI3, select: 2, requires_routing: true}\n";
    let err = run_series(&SeriesFixture::new(CHIP, table)).unwrap_err();
    match &err.kind {
        BuildErrorKind::Pinmux(PinmuxError::UnknownPeripheral { pad, peripheral }) => {
            assert_eq!(pad, "PA00");
            assert_eq!(peripheral, "SPI3");
        }
        other => panic!("expected UnknownPeripheral, got {other:?}"),
    }

    let message = err.to_string();
    assert!(message.contains("SPI3"));
    assert!(message.contains("PA00"));

    let diags = to_diagnostics(&err);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code.to_string(), "E201");
    assert_eq!(diags[0].context_value("pad"), Some("PA00"));
}

#[test]
fn routed_function_without_register_fails_encoding() {
    let table = "pinmux:\n  PA00:\n    - {function: USART, select: 4, requires_routing: true}\n";
    let routing = "peripherals:\n  - {name: USART, instances: [USART1], signals: [TXD]}\n";
    let err = run_series(&SeriesFixture::new(CHIP, table).with_routing(routing)).unwrap_err();
    assert!(matches!(
        &err.kind,
        BuildErrorKind::Encoding(EncodingError::UnknownRegister { register, .. })
            if register == "USART1_PINR"
    ));
}

#[test]
fn registry_gaps_ignored_without_header() {
    let table = "pinmux:\n  PA00:\n    - {function: USART, select: 4, requires_routing: true}\n";
    let routing = "peripherals:\n  - {name: USART, instances: [USART1], signals: [TXD]}\n";
    let fixture = SeriesFixture::new(CHIP, table).with_routing(routing);
    let artifacts = run_series_with(&fixture, &settings("SF32LB52x", false, true)).unwrap();
    assert!(artifacts.header.is_none());
    assert!(artifacts.document.pad("PA00").unwrap().function("USART1_TXD").is_some());
}

#[test]
fn schema_gate_reports_version_mismatch() {
    let chip = CHIP.replace("schema_version: 1", "schema_version: 2");
    let table = "pinmux:\n  PA00:\n    - {function: GPIO_A0, select: 0}\n";
    let err = run_series(&SeriesFixture::new(&chip, table)).unwrap_err();
    let BuildErrorKind::SchemaValidationFailed(violations) = &err.kind else {
        panic!("expected schema failure, got {:?}", err.kind);
    };
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].pointer, "/schema_version");
    assert_eq!(to_diagnostics(&err)[0].code.to_string(), "E501");
}
