// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use serde::{Deserialize, Serialize};
use std::{borrow::Cow, fmt::Display};

/// Identifier of a qubit wire, as handed out by the executing program.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct QubitId(pub usize);

impl Display for QubitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for QubitId {
    fn from(value: usize) -> Self {
        QubitId(value)
    }
}

/// Label minted for every measurement. It correlates a result with the
/// conditioned regions that depend on it and is never drawn as a track.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct ClassicalWireId(pub usize);

impl Display for ClassicalWireId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "c{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Pauli {
    I,
    X,
    Y,
    Z,
}

impl Pauli {
    /// The lowercase axis letter appended to gate labels, `?` for identity.
    #[must_use]
    pub fn axis(self) -> char {
        match self {
            Pauli::X => 'x',
            Pauli::Y => 'y',
            Pauli::Z => 'z',
            Pauli::I => '?',
        }
    }
}

/// Single-qubit gate families.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Gate {
    H,
    X,
    Y,
    Z,
    S,
    SAdj,
    T,
    TAdj,
    R(Pauli),
    R1,
    Named(String),
}

impl Gate {
    /// Returns the label drawn inside the gate's box.
    #[must_use]
    pub fn label(&self) -> Cow<'_, str> {
        match self {
            Gate::H => "H".into(),
            Gate::X => "X".into(),
            Gate::Y => "Y".into(),
            Gate::Z => "Z".into(),
            Gate::S => "S".into(),
            Gate::SAdj => "Ƨ".into(),
            Gate::T => "T".into(),
            Gate::TAdj => "┴".into(),
            Gate::R(axis) => format!("R{}", axis.axis()).into(),
            Gate::R1 => "R1".into(),
            Gate::Named(name) => name.as_str().into(),
        }
    }
}

/// Label for one qubit of a multi-qubit operation, e.g. `ex` or `Mz`.
#[must_use]
pub fn axis_label(name: &str, basis: Pauli) -> String {
    format!("{name}{}", basis.axis())
}
