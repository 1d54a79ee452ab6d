// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use super::*;
use crate::{CircuitizerConfig, ClassicalAnnotation, DirectiveCircuitizer};
use expect_test::expect;
use indoc::indoc;

const TELEPORT: &str = indoc! {r#"
    [
        { "kind": "allocate", "qubits": [0, 1, 2] },
        { "kind": "gate", "gate": "H", "target": 1 },
        { "kind": "controlled", "gate": "X", "controls": [1], "target": 2 },
        { "kind": "controlled", "gate": "X", "controls": [0], "target": 1 },
        { "kind": "gate", "gate": "H", "target": 0 },
        { "kind": "measure", "target": 0 },
        { "kind": "measure", "target": 1 },
        {
            "kind": "conditioned",
            "result": 1,
            "onOne": [{ "kind": "gate", "gate": "X", "target": 2 }]
        },
        {
            "kind": "conditioned",
            "result": 0,
            "onOne": [{ "kind": "gate", "gate": "Z", "target": 2 }]
        },
        { "kind": "release", "qubits": [0, 1] }
    ]
"#};

#[test]
fn parses_tagged_events() {
    let events = parse_trace(indoc! {r#"
        [
            { "kind": "gate", "gate": { "R": "X" }, "target": 3 },
            { "kind": "controlledSwap", "controls": [0], "a": 1, "b": 2 },
            { "kind": "assertProb", "bases": ["Z"], "targets": [0], "probabilityOfZero": 0.5 }
        ]
    "#})
    .expect("trace should parse");

    assert_eq!(
        events,
        vec![
            Event::Gate {
                gate: Gate::R(Pauli::X),
                target: QubitId(3),
            },
            Event::ControlledSwap {
                controls: vec![QubitId(0)],
                a: QubitId(1),
                b: QubitId(2),
            },
            Event::AssertProb {
                bases: vec![Pauli::Z],
                targets: vec![QubitId(0)],
                probability_of_zero: 0.5,
            },
        ]
    );
}

#[test]
fn missing_branches_default_to_empty() {
    let events = parse_trace(r#"[{ "kind": "conditioned", "result": 4 }]"#)
        .expect("trace should parse");
    assert_eq!(
        events,
        vec![Event::Conditioned {
            result: ClassicalWireId(4),
            on_zero: Vec::new(),
            on_one: Vec::new(),
        }]
    );
}

#[test]
fn unknown_kind_is_a_trace_error() {
    let err = parse_trace(r#"[{ "kind": "teleport" }]"#).expect_err("kind is not an event");
    assert!(matches!(err, Error::Trace(_)));
}

#[test]
fn replay_draws_teleport_with_guards() {
    let events = parse_trace(TELEPORT).expect("trace should parse");
    let mut circuitizer = DirectiveCircuitizer::directive(CircuitizerConfig {
        classical_annotation: ClassicalAnnotation::Border,
        ..Default::default()
    });
    replay(&events, &mut circuitizer).expect("replay should succeed");

    expect![[r#"
        alloc 0 1 2;
        H 1;
        CX 1 2;
        CX 0 1;
        H 0;
        Mz 0;
        Mz 1;
        if (c1 == 1) X 2;
        if (c0 == 1) Z 2;
        release 0 1;
    "#]]
    .assert_eq(&circuitizer.render());
}

#[test]
fn replay_stops_at_first_failure() {
    let events = parse_trace(indoc! {r#"
        [
            { "kind": "allocate", "qubits": [0] },
            { "kind": "gate", "gate": "H", "target": 0 },
            { "kind": "gate", "gate": "X", "target": 1 },
            { "kind": "gate", "gate": "Y", "target": 0 }
        ]
    "#})
    .expect("trace should parse");
    let mut circuitizer = DirectiveCircuitizer::default();

    let err = replay(&events, &mut circuitizer).expect_err("qubit 1 is not allocated");
    assert!(matches!(err, Error::QubitNotAllocated(QubitId(1))));
    expect![[r#"
        alloc 0;
        H 0;
    "#]]
    .assert_eq(&circuitizer.render());
}

#[test]
fn conditioned_on_unmeasured_result_fails() {
    let events = parse_trace(r#"[{ "kind": "conditioned", "result": 0 }]"#)
        .expect("trace should parse");
    let mut circuitizer = DirectiveCircuitizer::default();
    let err = replay(&events, &mut circuitizer).expect_err("nothing was measured");
    assert!(matches!(
        err,
        Error::UnknownClassicalWire(ClassicalWireId(0))
    ));
}
