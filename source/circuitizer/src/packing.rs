// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use crate::{
    glyphs::{Cell, CellKind, GlyphStyle},
    wires::Wire,
};
use log::{debug, trace};

/// The cells of one operation, keyed by row.
pub(crate) struct Placement {
    pub cells: Vec<(usize, CellKind)>,
    pub conditioned: bool,
}

/// Tracks the rightmost, still open column and decides when it has to be
/// closed before something else can be drawn.
#[derive(Default)]
pub(crate) struct ColumnPacker {
    /// What each row holds in the open column.
    occupancy: Vec<Option<Cell>>,
    /// Number of columns flushed so far.
    columns: usize,
}

impl ColumnPacker {
    pub(crate) fn add_row(&mut self) {
        self.occupancy.push(None);
    }

    pub(crate) fn pending(&self) -> &[Option<Cell>] {
        &self.occupancy
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.occupancy.iter().all(Option::is_none)
    }

    pub(crate) fn is_occupied(&self, row: usize) -> bool {
        self.occupancy[row].is_some()
    }

    /// Closes the open column, if anything was drawn in it.
    pub(crate) fn flush(&mut self, wires: &[Wire], style: &mut impl GlyphStyle) {
        if self.is_empty() {
            return;
        }
        debug!("closing column {}", self.columns);
        style.column(wires, &self.occupancy);
        self.occupancy.fill(None);
        self.columns += 1;
    }

    pub(crate) fn place(
        &mut self,
        placement: Placement,
        wires: &[Wire],
        style: &mut impl GlyphStyle,
    ) {
        let Some((min, max)) = span(&placement.cells) else {
            return;
        };
        let multi_wire = placement.cells.len() > 1;

        // A multi-wire operation needs the whole column to itself so its
        // vertical line is unambiguous.
        let must_flush = if multi_wire {
            !self.is_empty()
        } else {
            placement.cells.iter().any(|&(row, _)| self.is_occupied(row))
        };
        if must_flush {
            self.flush(wires, style);
        }

        for (row, kind) in placement.cells {
            trace!("column {}: row {row} gets {kind:?}", self.columns);
            self.occupancy[row] = Some(Cell {
                kind,
                up: row > min,
                down: row < max,
                conditioned: placement.conditioned,
            });
        }
        for slot in self.occupancy.iter_mut().take(max).skip(min + 1) {
            if slot.is_none() {
                *slot = Some(Cell {
                    kind: CellKind::Connector,
                    up: true,
                    down: true,
                    conditioned: false,
                });
            }
        }

        if multi_wire {
            self.flush(wires, style);
        }
    }
}

fn span(cells: &[(usize, CellKind)]) -> Option<(usize, usize)> {
    let min = cells.iter().map(|&(row, _)| row).min()?;
    let max = cells.iter().map(|&(row, _)| row).max()?;
    Some((min, max))
}
