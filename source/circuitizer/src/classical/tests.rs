// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use super::*;

#[test]
fn minted_ids_are_sequential_from_zero() {
    let mut controls = ClassicalControls::default();
    assert_eq!(controls.mint(), ClassicalWireId(0));
    assert_eq!(controls.mint(), ClassicalWireId(1));
    assert_eq!(controls.mint(), ClassicalWireId(2));
}

#[test]
fn only_minted_ids_pass_check() {
    let mut controls = ClassicalControls::default();
    assert!(matches!(
        controls.check(ClassicalWireId(0)),
        Err(Error::UnknownClassicalWire(ClassicalWireId(0)))
    ));
    controls.mint();
    assert!(controls.check(ClassicalWireId(0)).is_ok());
    assert!(controls.check(ClassicalWireId(1)).is_err());
}

#[test]
fn nested_regions_stack_innermost_last() {
    let mut controls = ClassicalControls::default();
    let outer = Condition {
        wire: controls.mint(),
        value: false,
    };
    let inner = Condition {
        wire: controls.mint(),
        value: true,
    };

    controls.push(outer);
    controls.push(inner);
    assert_eq!(controls.active(), &[outer, inner]);

    controls.pop(inner);
    assert_eq!(controls.active(), &[outer]);
    controls.pop(outer);
    assert!(controls.active().is_empty());
}
