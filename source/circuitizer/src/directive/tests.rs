// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use super::*;
use crate::{CircuitizerConfig, ClassicalAnnotation, DirectiveCircuitizer, Gate, Tracer};
use expect_test::expect;

fn q(ids: &[usize]) -> Vec<QubitId> {
    ids.iter().copied().map(QubitId).collect()
}

fn directive(qubits: &[usize]) -> DirectiveCircuitizer {
    let mut circuitizer = DirectiveCircuitizer::default();
    circuitizer
        .qubit_allocate(&q(qubits))
        .expect("allocation should succeed");
    circuitizer
}

#[test]
fn every_event_shape_has_a_statement() {
    let mut circuitizer = directive(&[0, 1, 2]);
    let tracer: &mut dyn Tracer = &mut circuitizer;
    tracer
        .gate(&Gate::H, QubitId(0))
        .expect("gate should succeed");
    tracer
        .controlled_gate(&Gate::X, &q(&[0]), QubitId(2))
        .expect("gate should succeed");
    tracer
        .swap(QubitId(0), QubitId(1))
        .expect("swap should succeed");
    tracer
        .controlled_swap(&q(&[2]), QubitId(0), QubitId(1))
        .expect("swap should succeed");
    tracer
        .exp(&[Pauli::X, Pauli::Z], &q(&[0, 1]))
        .expect("exp should succeed");
    tracer
        .controlled_exp(&q(&[2]), &[Pauli::X, Pauli::Z], &q(&[0, 1]))
        .expect("exp should succeed");
    tracer.m(QubitId(0)).expect("measurement should succeed");
    tracer
        .measure(&[Pauli::X, Pauli::Z], &q(&[0, 1]))
        .expect("measurement should succeed");
    tracer.reset(QubitId(0)).expect("reset should succeed");
    tracer
        .qubit_release(&q(&[0]))
        .expect("release should succeed");

    expect![[r#"
        alloc 0 1 2;
        H 0;
        CX 0 2;
        SWAP 0 1;
        CSWAP 2 0 1;
        exz 0 1;
        Cexz 2 0 1;
        Mz 0;
        Mxz 0 1;
        RESET 0;
        release 0;
    "#]]
    .assert_eq(&circuitizer.render());
}

#[test]
fn multiple_controls_give_one_statement_each() {
    let mut circuitizer = directive(&[0, 1, 2]);
    circuitizer
        .controlled_gate(&Gate::R(Pauli::Y), &q(&[0, 1]), QubitId(2))
        .expect("gate should succeed");
    expect![[r#"
        alloc 0 1 2;
        CRy 0 2;
        CRy 1 2;
    "#]]
    .assert_eq(&circuitizer.render());
}

#[test]
fn names_wider_than_a_box_are_fine() {
    let mut circuitizer = directive(&[0]);
    circuitizer
        .gate(&Gate::Named("Rzz90".to_string()), QubitId(0))
        .expect("directive names have no width limit");
    expect![[r#"
        alloc 0;
        Rzz90 0;
    "#]]
    .assert_eq(&circuitizer.render());
}

#[test]
fn guards_are_added_when_annotated() {
    let mut circuitizer = DirectiveCircuitizer::directive(CircuitizerConfig {
        classical_annotation: ClassicalAnnotation::Border,
        ..Default::default()
    });
    circuitizer
        .qubit_allocate(&q(&[0, 1]))
        .expect("allocation should succeed");
    let first = circuitizer
        .m(QubitId(0))
        .expect("measurement should succeed")
        .classical_wire;
    let second = circuitizer
        .m(QubitId(1))
        .expect("measurement should succeed")
        .classical_wire;
    circuitizer
        .enter(first, true, |c| {
            c.gate(&Gate::X, QubitId(1))?;
            c.enter(second, false, |c| c.gate(&Gate::H, QubitId(0)))
        })
        .expect("regions should be entered");

    expect![[r#"
        alloc 0 1;
        Mz 0;
        Mz 1;
        if (c0 == 1) X 1;
        if (c0 == 1 && c1 == 0) H 0;
    "#]]
    .assert_eq(&circuitizer.render());
}

#[test]
fn identity_axis_is_unsupported() {
    let mut circuitizer = directive(&[0, 1]);
    let before = circuitizer.render();
    let err = circuitizer
        .exp(&[Pauli::I, Pauli::Z], &q(&[0, 1]))
        .expect_err("identity has no axis letter");
    assert!(matches!(err, Error::Unsupported(_)));
    assert_eq!(circuitizer.render(), before);
}

#[test]
fn names_with_separators_are_unsupported() {
    let mut circuitizer = directive(&[0]);
    for name in ["", "a b", "x;y"] {
        let err = circuitizer
            .gate(&Gate::Named(name.to_string()), QubitId(0))
            .expect_err("name cannot be a keyword");
        assert!(matches!(err, Error::Unsupported(_)));
    }
    expect![[r#"
        alloc 0;
    "#]]
    .assert_eq(&circuitizer.render());
}

#[test]
fn statement_lists_ids_in_order() {
    assert_eq!(statement("CSWAP", &q(&[2, 0, 1])), "CSWAP 2 0 1;");
    assert_eq!(statement("alloc", &q(&[7])), "alloc 7;");
}
