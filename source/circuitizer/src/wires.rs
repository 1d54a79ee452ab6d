// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use crate::{Error, QubitId};
use rustc_hash::{FxHashMap, FxHashSet};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WireState {
    Active,
    Released,
}

/// One qubit track. Its position in the registry is its row index.
#[derive(Clone, Debug)]
pub struct Wire {
    pub id: QubitId,
    pub state: WireState,
    /// Set once the qubit is known to have been destructively measured.
    pub collapsed: bool,
}

impl Wire {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state == WireState::Active
    }
}

/// Outcome of allocating a single id.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Allocation {
    /// A row was appended for an id never seen before.
    New(usize),
    /// A released row was brought back.
    Reinitialized(usize),
}

impl Allocation {
    pub(crate) fn row(self) -> usize {
        match self {
            Allocation::New(row) | Allocation::Reinitialized(row) => row,
        }
    }
}

/// Maps qubit ids to the rows they were first given. Rows are only ever
/// appended, so a row index stays valid for the lifetime of the diagram.
#[derive(Default)]
pub(crate) struct WireRegistry {
    rows: FxHashMap<QubitId, usize>,
    wires: Vec<Wire>,
}

impl WireRegistry {
    pub(crate) fn wires(&self) -> &[Wire] {
        &self.wires
    }

    pub(crate) fn len(&self) -> usize {
        self.wires.len()
    }

    /// Returns the row of an active qubit.
    pub(crate) fn row(&self, id: QubitId) -> Result<usize, Error> {
        match self.rows.get(&id) {
            Some(&row) if self.wires[row].is_active() => Ok(row),
            _ => Err(Error::QubitNotAllocated(id)),
        }
    }

    /// Fails if any id is active or appears twice.
    pub(crate) fn check_allocate(&self, ids: &[QubitId]) -> Result<(), Error> {
        let mut seen = FxHashSet::default();
        for &id in ids {
            let active = self
                .rows
                .get(&id)
                .is_some_and(|&row| self.wires[row].is_active());
            if active || !seen.insert(id) {
                return Err(Error::AlreadyAllocated(id));
            }
        }
        Ok(())
    }

    /// Brings every id in `ids` into the active state. Ids new to the
    /// registry get rows in ascending id order, after all existing rows.
    pub(crate) fn allocate(&mut self, ids: &[QubitId]) -> Result<Vec<Allocation>, Error> {
        self.check_allocate(ids)?;

        let mut ordered = ids.to_vec();
        ordered.sort_unstable();
        let allocations = ordered
            .into_iter()
            .map(|id| {
                if let Some(&row) = self.rows.get(&id) {
                    let wire = &mut self.wires[row];
                    wire.state = WireState::Active;
                    wire.collapsed = false;
                    Allocation::Reinitialized(row)
                } else {
                    let row = self.wires.len();
                    self.wires.push(Wire {
                        id,
                        state: WireState::Active,
                        collapsed: false,
                    });
                    self.rows.insert(id, row);
                    Allocation::New(row)
                }
            })
            .collect();

        Ok(allocations)
    }

    /// Returns the rows of `ids`, failing if any is not active or appears
    /// twice.
    pub(crate) fn check_release(&self, ids: &[QubitId]) -> Result<Vec<usize>, Error> {
        let mut seen = FxHashSet::default();
        ids.iter()
            .map(|&id| {
                let row = self.row(id).map_err(|_| Error::ReleaseUnallocated(id))?;
                if seen.insert(id) {
                    Ok(row)
                } else {
                    Err(Error::ReleaseUnallocated(id))
                }
            })
            .collect()
    }

    pub(crate) fn release(&mut self, ids: &[QubitId]) -> Result<Vec<usize>, Error> {
        let rows = self.check_release(ids)?;
        for &row in &rows {
            self.wires[row].state = WireState::Released;
        }
        Ok(rows)
    }

    pub(crate) fn set_collapsed(&mut self, row: usize, collapsed: bool) {
        self.wires[row].collapsed = collapsed;
    }
}
