// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use crate::{
    Error,
    classical::Condition,
    glyphs::{Cell, CellKind, GlyphStyle, Lifecycle, Operation},
    wires::{Wire, WireState},
};
use std::fmt::Write;

/// Width of a gate column.
const COLUMN_WIDTH: usize = 7;
/// Width of an allocation or release marker.
const LIFECYCLE_WIDTH: usize = 5;
/// Width of the field a gate label is centered in.
const LABEL_WIDTH: usize = 3;

const BLANK: &str = "       ";
const VERTICAL: &str = "   │   ";

const INITIALIZE: [&str; 3] = ["     ", "|0>──", "     "];
const RELEASE: [&str; 3] = ["     ", "──<0|", "     "];

/// Box-drawing diagrams, three text rows per wire.
#[derive(Default)]
pub struct AsciiStyle {
    rows: Vec<String>,
    /// Width in characters shared by every row.
    width: usize,
}

impl AsciiStyle {
    fn append(&mut self, row: usize, glyph: &[impl AsRef<str>; 3]) {
        for (line, part) in self.rows[3 * row..3 * row + 3].iter_mut().zip(glyph) {
            line.push_str(part.as_ref());
        }
    }
}

impl GlyphStyle for AsciiStyle {
    fn add_track(&mut self, row: usize) {
        debug_assert_eq!(self.rows.len(), 3 * row, "tracks are appended in row order");
        let padding = " ".repeat(self.width);
        self.rows.extend(std::iter::repeat_n(padding, 3));
    }

    fn lifecycle(&mut self, wires: &[Wire], marks: &[Option<Lifecycle>]) {
        for (row, (wire, mark)) in wires.iter().zip(marks).enumerate() {
            let segment = match mark {
                Some(Lifecycle::Initialize) => INITIALIZE.map(String::from),
                Some(Lifecycle::Release) => RELEASE.map(String::from),
                None => filler(wire, LIFECYCLE_WIDTH),
            };
            self.append(row, &segment);
        }
        self.width += LIFECYCLE_WIDTH;
    }

    fn operation(
        &mut self,
        operation: &Operation<'_>,
        _conditions: &[Condition],
    ) -> Result<(), Error> {
        for (_, kind) in operation.cells() {
            if let CellKind::Gate(label) = kind
                && label.chars().count() > LABEL_WIDTH
            {
                return Err(Error::LabelTooWide(label));
            }
        }
        Ok(())
    }

    fn column(&mut self, wires: &[Wire], cells: &[Option<Cell>]) {
        for (row, (wire, cell)) in wires.iter().zip(cells).enumerate() {
            let glyph = match cell {
                Some(cell) => cell_glyph(cell, wire),
                None => filler(wire, COLUMN_WIDTH),
            };
            self.append(row, &glyph);
        }
        self.width += COLUMN_WIDTH;
    }

    fn render(&self, wires: &[Wire], pending: &[Option<Cell>]) -> String {
        let open = pending.iter().any(Option::is_some);
        let mut s = String::new();
        for (row, wire) in wires.iter().enumerate() {
            let tail = if open {
                match &pending[row] {
                    Some(cell) => cell_glyph(cell, wire),
                    None => filler(wire, COLUMN_WIDTH),
                }
            } else {
                Default::default()
            };
            for (line, part) in self.rows[3 * row..3 * row + 3].iter().zip(&tail) {
                let _ = writeln!(s, "{line}{part}");
            }
        }
        s
    }
}

/// What an unoccupied wire shows for `width` characters.
fn filler(wire: &Wire, width: usize) -> [String; 3] {
    let body = match wire.state {
        WireState::Released => " ",
        WireState::Active if wire.collapsed => "═",
        WireState::Active => "─",
    };
    [" ".repeat(width), body.repeat(width), " ".repeat(width)]
}

fn cell_glyph(cell: &Cell, wire: &Wire) -> [String; 3] {
    let stub = |on: bool| if on { VERTICAL } else { BLANK };
    match &cell.kind {
        CellKind::Gate(label) => gate_box(label, cell),
        CellKind::Control => [stub(cell.up), "───@───", stub(cell.down)].map(String::from),
        CellKind::Swap => [stub(cell.up), "───╳───", stub(cell.down)].map(String::from),
        CellKind::Connector => {
            let body = match wire.state {
                WireState::Released => VERTICAL,
                WireState::Active if wire.collapsed => "═══╪═══",
                WireState::Active => "───┼───",
            };
            [VERTICAL, body, VERTICAL].map(String::from)
        }
    }
}

/// "┌─────┐"
/// "┤  H  ├"
/// "└─────┘"
fn gate_box(label: &str, cell: &Cell) -> [String; 3] {
    let label = centered(label, LABEL_WIDTH);
    if cell.conditioned {
        [
            String::from(if cell.up { "╔══╧══╗" } else { "╔═════╗" }),
            format!("╡ {label} ╞"),
            String::from(if cell.down { "╚══╤══╝" } else { "╚═════╝" }),
        ]
    } else {
        [
            String::from(if cell.up { "┌──┴──┐" } else { "┌─────┐" }),
            format!("┤ {label} ├"),
            String::from(if cell.down { "└──┬──┘" } else { "└─────┘" }),
        ]
    }
}

/// Centers `s` in `width` characters, with any odd space going to the right.
fn centered(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{s}{}", " ".repeat(left), " ".repeat(right))
}
