// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#[cfg(test)]
mod tests;

use crate::{ClassicalWireId, Error, Gate, Pauli, QubitId, tracer::Tracer};
use serde::{Deserialize, Serialize};

/// One recorded tracer call, so that an execution can be saved as JSON and
/// drawn later.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Event {
    Allocate {
        qubits: Vec<QubitId>,
    },
    Release {
        qubits: Vec<QubitId>,
    },
    Borrow {
        qubits: Vec<QubitId>,
    },
    Return {
        qubits: Vec<QubitId>,
    },
    Gate {
        gate: Gate,
        target: QubitId,
    },
    Controlled {
        gate: Gate,
        controls: Vec<QubitId>,
        target: QubitId,
    },
    Exp {
        bases: Vec<Pauli>,
        targets: Vec<QubitId>,
    },
    ControlledExp {
        controls: Vec<QubitId>,
        bases: Vec<Pauli>,
        targets: Vec<QubitId>,
    },
    Connected {
        name: String,
        bases: Vec<Pauli>,
        targets: Vec<QubitId>,
    },
    ControlledConnected {
        name: String,
        controls: Vec<QubitId>,
        bases: Vec<Pauli>,
        targets: Vec<QubitId>,
    },
    Swap {
        a: QubitId,
        b: QubitId,
    },
    ControlledSwap {
        controls: Vec<QubitId>,
        a: QubitId,
        b: QubitId,
    },
    Measure {
        target: QubitId,
    },
    MultiMeasure {
        bases: Vec<Pauli>,
        targets: Vec<QubitId>,
    },
    Reset {
        target: QubitId,
    },
    Assert {
        bases: Vec<Pauli>,
        targets: Vec<QubitId>,
    },
    AssertProb {
        bases: Vec<Pauli>,
        targets: Vec<QubitId>,
        probability_of_zero: f64,
    },
    /// Both branches of a measurement-conditioned region. `result` names a
    /// classical wire minted by an earlier measurement in the same trace.
    Conditioned {
        result: ClassicalWireId,
        #[serde(default)]
        on_zero: Vec<Event>,
        #[serde(default)]
        on_one: Vec<Event>,
    },
}

impl Event {
    /// Issues the call this event records.
    pub fn trace(&self, tracer: &mut dyn Tracer) -> Result<(), Error> {
        match self {
            Event::Allocate { qubits } => tracer.qubit_allocate(qubits),
            Event::Release { qubits } => tracer.qubit_release(qubits),
            Event::Borrow { qubits } => tracer.qubit_borrow(qubits),
            Event::Return { qubits } => tracer.qubit_return(qubits),
            Event::Gate { gate, target } => tracer.gate(gate, *target),
            Event::Controlled {
                gate,
                controls,
                target,
            } => tracer.controlled_gate(gate, controls, *target),
            Event::Exp { bases, targets } => tracer.exp(bases, targets),
            Event::ControlledExp {
                controls,
                bases,
                targets,
            } => tracer.controlled_exp(controls, bases, targets),
            Event::Connected {
                name,
                bases,
                targets,
            } => tracer.connected_gate(name, bases, targets),
            Event::ControlledConnected {
                name,
                controls,
                bases,
                targets,
            } => tracer.controlled_connected_gate(name, controls, bases, targets),
            Event::Swap { a, b } => tracer.swap(*a, *b),
            Event::ControlledSwap { controls, a, b } => tracer.controlled_swap(controls, *a, *b),
            Event::Measure { target } => tracer.m(*target).map(|_| ()),
            Event::MultiMeasure { bases, targets } => tracer.measure(bases, targets).map(|_| ()),
            Event::Reset { target } => tracer.reset(*target),
            Event::Assert { bases, targets } => tracer.assert(bases, targets),
            Event::AssertProb {
                bases,
                targets,
                probability_of_zero,
            } => tracer.assert_prob(bases, targets, *probability_of_zero),
            Event::Conditioned {
                result,
                on_zero,
                on_one,
            } => tracer.classically_controlled(
                *result,
                &mut |tracer: &mut dyn Tracer| replay(on_zero, tracer),
                &mut |tracer: &mut dyn Tracer| replay(on_one, tracer),
            ),
        }
    }
}

/// Issues every event in order, stopping at the first failure.
pub fn replay(events: &[Event], tracer: &mut dyn Tracer) -> Result<(), Error> {
    events.iter().try_for_each(|event| event.trace(tracer))
}

/// Parses a JSON array of events.
pub fn parse_trace(json: &str) -> Result<Vec<Event>, Error> {
    Ok(serde_json::from_str(json)?)
}
