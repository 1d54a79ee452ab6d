// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::{ClassicalWireId, Error, Gate, Pauli, QubitId};

/// Returned by measurements. Only the classical wire id matters for
/// drawing; the outcome itself is never known.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MeasurementResult {
    pub classical_wire: ClassicalWireId,
    pub qubits: Vec<QubitId>,
    pub bases: Vec<Pauli>,
}

/// Body of a classically conditioned branch.
pub type Branch<'a> = &'a mut dyn FnMut(&mut dyn Tracer) -> Result<(), Error>;

/// Receives one call per operation as a program executes.
///
/// Operations with several controls are drawn as one column per control.
pub trait Tracer {
    fn qubit_allocate(&mut self, qubits: &[QubitId]) -> Result<(), Error>;

    fn qubit_release(&mut self, qubits: &[QubitId]) -> Result<(), Error>;

    fn qubit_borrow(&mut self, _qubits: &[QubitId]) -> Result<(), Error> {
        Ok(())
    }

    fn qubit_return(&mut self, _qubits: &[QubitId]) -> Result<(), Error> {
        Ok(())
    }

    fn gate(&mut self, gate: &Gate, target: QubitId) -> Result<(), Error>;

    fn controlled_gate(
        &mut self,
        gate: &Gate,
        controls: &[QubitId],
        target: QubitId,
    ) -> Result<(), Error>;

    /// A multi-qubit operation drawn as one contiguous block, each target
    /// labeled `<name><axis>`.
    fn connected_gate(
        &mut self,
        name: &str,
        bases: &[Pauli],
        targets: &[QubitId],
    ) -> Result<(), Error>;

    fn controlled_connected_gate(
        &mut self,
        name: &str,
        controls: &[QubitId],
        bases: &[Pauli],
        targets: &[QubitId],
    ) -> Result<(), Error>;

    fn exp(&mut self, bases: &[Pauli], targets: &[QubitId]) -> Result<(), Error> {
        self.connected_gate("e", bases, targets)
    }

    fn controlled_exp(
        &mut self,
        controls: &[QubitId],
        bases: &[Pauli],
        targets: &[QubitId],
    ) -> Result<(), Error> {
        self.controlled_connected_gate("e", controls, bases, targets)
    }

    fn swap(&mut self, a: QubitId, b: QubitId) -> Result<(), Error>;

    fn controlled_swap(
        &mut self,
        controls: &[QubitId],
        a: QubitId,
        b: QubitId,
    ) -> Result<(), Error>;

    /// Measures in the Z basis.
    fn m(&mut self, target: QubitId) -> Result<MeasurementResult, Error> {
        self.measure(&[Pauli::Z], &[target])
    }

    fn measure(
        &mut self,
        bases: &[Pauli],
        targets: &[QubitId],
    ) -> Result<MeasurementResult, Error>;

    fn reset(&mut self, target: QubitId) -> Result<(), Error>;

    fn assert(&mut self, _bases: &[Pauli], _targets: &[QubitId]) -> Result<(), Error> {
        Ok(())
    }

    fn assert_prob(
        &mut self,
        _bases: &[Pauli],
        _targets: &[QubitId],
        _probability_of_zero: f64,
    ) -> Result<(), Error> {
        Ok(())
    }

    /// Runs `on_zero` conditioned on `result` being zero, then `on_one`
    /// conditioned on it being one.
    fn classically_controlled(
        &mut self,
        result: ClassicalWireId,
        on_zero: Branch<'_>,
        on_one: Branch<'_>,
    ) -> Result<(), Error>;
}
