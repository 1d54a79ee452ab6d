// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::{ClassicalWireId, QubitId};
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
pub enum Error {
    #[error("qubit {0} is not allocated")]
    #[diagnostic(code("Qdk.Circuitizer.QubitNotAllocated"))]
    #[diagnostic(help(
        "gates may only target qubits that have been allocated and not yet released"
    ))]
    QubitNotAllocated(QubitId),

    #[error("qubit {0} is already allocated")]
    #[diagnostic(code("Qdk.Circuitizer.AlreadyAllocated"))]
    AlreadyAllocated(QubitId),

    #[error("cannot release qubit {0} because it is not allocated")]
    #[diagnostic(code("Qdk.Circuitizer.ReleaseUnallocated"))]
    ReleaseUnallocated(QubitId),

    #[error("qubit {0} appears more than once in the same operation")]
    #[diagnostic(code("Qdk.Circuitizer.DuplicateQubit"))]
    DuplicateQubit(QubitId),

    #[error("{bases} bases were given for {targets} targets")]
    #[diagnostic(code("Qdk.Circuitizer.ShapeMismatch"))]
    #[diagnostic(help("provide exactly one Pauli basis per target qubit"))]
    ShapeMismatch { bases: usize, targets: usize },

    #[error("operation has no target qubits")]
    #[diagnostic(code("Qdk.Circuitizer.NoTargets"))]
    NoTargets,

    #[error("classical wire {0} was not produced by a measurement on this circuit")]
    #[diagnostic(code("Qdk.Circuitizer.UnknownClassicalWire"))]
    UnknownClassicalWire(ClassicalWireId),

    #[error("gate label `{0}` does not fit in a three character box")]
    #[diagnostic(code("Qdk.Circuitizer.LabelTooWide"))]
    LabelTooWide(String),

    #[error("operation is unsupported by this output format: {0}")]
    #[diagnostic(code("Qdk.Circuitizer.Unsupported"))]
    Unsupported(String),

    #[error("malformed event trace")]
    #[diagnostic(code("Qdk.Circuitizer.Trace"))]
    Trace(#[from] serde_json::Error),

    #[error(transparent)]
    #[diagnostic(code("Qdk.Circuitizer.Io"))]
    Io(#[from] std::io::Error),
}
