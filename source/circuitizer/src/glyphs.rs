// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::{
    Error, Pauli, QubitId,
    classical::Condition,
    gates::axis_label,
    wires::Wire,
};

/// What occupies one wire in one column.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Cell {
    pub kind: CellKind,
    /// The operation's vertical line continues above this wire.
    pub up: bool,
    /// The operation's vertical line continues below this wire.
    pub down: bool,
    /// Drawn while inside a classically conditioned region, and the
    /// configuration asks for those to be marked.
    pub conditioned: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CellKind {
    Gate(String),
    Control,
    Swap,
    /// A wire crossed by the vertical line of an operation it is not part of.
    Connector,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Lifecycle {
    Initialize,
    Release,
}

/// A drawable operation, after controls have been split into one
/// operation per control.
#[derive(Clone, Debug)]
pub enum Operation<'a> {
    Gate {
        label: &'a str,
        target: QubitId,
    },
    Controlled {
        label: &'a str,
        control: QubitId,
        target: QubitId,
    },
    Connected {
        name: &'a str,
        control: Option<QubitId>,
        bases: &'a [Pauli],
        targets: &'a [QubitId],
    },
    Swap {
        control: Option<QubitId>,
        a: QubitId,
        b: QubitId,
    },
    Measure {
        bases: &'a [Pauli],
        targets: &'a [QubitId],
    },
    Reset {
        target: QubitId,
    },
}

pub(crate) const RESET_LABEL: &str = "|0>";

impl Operation<'_> {
    /// Rejects per-qubit argument lists that do not line up.
    pub(crate) fn check_shape(&self) -> Result<(), Error> {
        match self {
            Operation::Connected { bases, targets, .. } | Operation::Measure { bases, targets } => {
                if targets.is_empty() {
                    Err(Error::NoTargets)
                } else if bases.len() == targets.len() {
                    Ok(())
                } else {
                    Err(Error::ShapeMismatch {
                        bases: bases.len(),
                        targets: targets.len(),
                    })
                }
            }
            _ => Ok(()),
        }
    }

    /// The cells this operation puts on the wires it touches, controls first.
    #[must_use]
    pub fn cells(&self) -> Vec<(QubitId, CellKind)> {
        match self {
            Operation::Gate { label, target } => vec![(*target, CellKind::Gate(label.to_string()))],
            Operation::Controlled {
                label,
                control,
                target,
            } => vec![
                (*control, CellKind::Control),
                (*target, CellKind::Gate(label.to_string())),
            ],
            Operation::Connected {
                name,
                control,
                bases,
                targets,
            } => control
                .map(|c| (c, CellKind::Control))
                .into_iter()
                .chain(
                    targets
                        .iter()
                        .zip(bases.iter())
                        .map(|(&t, &basis)| (t, CellKind::Gate(axis_label(name, basis)))),
                )
                .collect(),
            Operation::Swap { control, a, b } => control
                .map(|c| (c, CellKind::Control))
                .into_iter()
                .chain([(*a, CellKind::Swap), (*b, CellKind::Swap)])
                .collect(),
            Operation::Measure { bases, targets } => targets
                .iter()
                .zip(bases.iter())
                .map(|(&t, &basis)| (t, CellKind::Gate(axis_label("M", basis))))
                .collect(),
            Operation::Reset { target } => {
                vec![(*target, CellKind::Gate(RESET_LABEL.to_string()))]
            }
        }
    }
}

/// Output flavor of a diagram. The packing engine decides where things go;
/// a style decides what they look like.
///
/// Calls arrive in this order for every drawn operation: `operation` (which
/// may reject it before anything is drawn), then zero or more `column`
/// calls as the packer flushes.
pub trait GlyphStyle {
    /// A wire was appended at `row`.
    fn add_track(&mut self, row: usize);

    /// Lifecycle markers for every row. `None` rows are not part of the
    /// lifecycle event.
    fn lifecycle(&mut self, wires: &[Wire], marks: &[Option<Lifecycle>]);

    /// Called once per drawn operation, before it is placed.
    fn operation(
        &mut self,
        operation: &Operation<'_>,
        conditions: &[Condition],
    ) -> Result<(), Error>;

    /// A column was closed. Rows with no cell were unoccupied.
    fn column(&mut self, wires: &[Wire], cells: &[Option<Cell>]);

    /// Serializes everything drawn so far, including the open column.
    fn render(&self, wires: &[Wire], pending: &[Option<Cell>]) -> String;
}
