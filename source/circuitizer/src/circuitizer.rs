// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use crate::{
    ClassicalWireId, Error, Gate, Pauli, QubitId,
    ascii::AsciiStyle,
    classical::{ClassicalControls, Condition},
    config::{CircuitizerConfig, ClassicalAnnotation},
    directive::DirectiveStyle,
    glyphs::{CellKind, GlyphStyle, Lifecycle, Operation},
    packing::{ColumnPacker, Placement},
    tracer::{Branch, MeasurementResult, Tracer},
    wires::{Allocation, Wire, WireRegistry},
};
use log::debug;
use rustc_hash::FxHashSet;
use std::{fmt::Display, path::Path};

/// Turns a stream of tracer calls into a circuit diagram.
///
/// The engine owns wire allocation, column packing and the classical
/// control stack; the style `S` decides what the output looks like.
pub struct Circuitizer<S> {
    config: CircuitizerConfig,
    wires: WireRegistry,
    packer: ColumnPacker,
    classical: ClassicalControls,
    style: S,
}

pub type AsciiCircuitizer = Circuitizer<AsciiStyle>;
pub type DirectiveCircuitizer = Circuitizer<DirectiveStyle>;

impl AsciiCircuitizer {
    #[must_use]
    pub fn ascii(config: CircuitizerConfig) -> Self {
        Self::new(config, AsciiStyle::default())
    }
}

impl DirectiveCircuitizer {
    #[must_use]
    pub fn directive(config: CircuitizerConfig) -> Self {
        Self::new(config, DirectiveStyle::default())
    }
}

impl<S: GlyphStyle + Default> Default for Circuitizer<S> {
    fn default() -> Self {
        Self::new(CircuitizerConfig::default(), S::default())
    }
}

impl<S: GlyphStyle> Circuitizer<S> {
    #[must_use]
    pub fn new(config: CircuitizerConfig, style: S) -> Self {
        Self {
            config,
            wires: WireRegistry::default(),
            packer: ColumnPacker::default(),
            classical: ClassicalControls::default(),
            style,
        }
    }

    #[must_use]
    pub fn config(&self) -> &CircuitizerConfig {
        &self.config
    }

    /// Every wire seen so far, in row order.
    #[must_use]
    pub fn wires(&self) -> &[Wire] {
        self.wires.wires()
    }

    /// Conditioned regions currently entered, innermost last.
    #[must_use]
    pub fn conditions(&self) -> &[Condition] {
        self.classical.active()
    }

    /// The diagram as drawn so far. Does not close the open column, so more
    /// operations may still be packed into it afterwards.
    #[must_use]
    pub fn render(&self) -> String {
        self.style.render(self.wires.wires(), self.packer.pending())
    }

    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        debug!("writing circuit to {}", path.display());
        std::fs::write(path, self.render())?;
        Ok(())
    }

    /// Runs `body` inside the region where the measurement behind `wire`
    /// produced `value`. The region is left again even if `body` fails.
    /// A panic in `body` leaves the region entered; the instance should be
    /// discarded.
    pub fn enter<T>(
        &mut self,
        wire: ClassicalWireId,
        value: bool,
        body: impl FnOnce(&mut Self) -> Result<T, Error>,
    ) -> Result<T, Error> {
        self.classical.check(wire)?;
        let condition = Condition { wire, value };

        debug!("entering region {wire} == {}", u8::from(value));
        self.classical.push(condition);
        let result = body(self);
        self.classical.pop(condition);
        debug!("leaving region {wire} == {}", u8::from(value));

        result
    }

    /// Resolves the rows an operation touches.
    fn placement(&self, operation: &Operation<'_>) -> Result<Vec<(usize, CellKind)>, Error> {
        operation.check_shape()?;
        let mut seen = FxHashSet::default();
        operation
            .cells()
            .into_iter()
            .map(|(id, kind)| {
                let row = self.wires.row(id)?;
                if seen.insert(id) {
                    Ok((row, kind))
                } else {
                    Err(Error::DuplicateQubit(id))
                }
            })
            .collect()
    }

    fn draw(&mut self, operation: &Operation<'_>) -> Result<(), Error> {
        let cells = self.placement(operation)?;

        let conditions: &[Condition] = match self.config.classical_annotation {
            ClassicalAnnotation::None => &[],
            ClassicalAnnotation::Border => self.classical.active(),
        };
        self.style.operation(operation, conditions)?;

        let placement = Placement {
            cells,
            conditioned: !conditions.is_empty(),
        };
        self.packer
            .place(placement, self.wires.wires(), &mut self.style);
        Ok(())
    }

    /// Draws one operation per control, each in its own column. Every
    /// operation is checked before the first one is drawn.
    fn draw_per_control<'a>(
        &mut self,
        controls: &[QubitId],
        operation: impl Fn(QubitId) -> Operation<'a>,
    ) -> Result<(), Error> {
        for &control in controls {
            self.placement(&operation(control))?;
        }
        for &control in controls {
            self.draw(&operation(control))?;
        }
        Ok(())
    }

    fn lifecycle(&mut self, rows: &[usize], mark: Lifecycle) {
        let mut marks = vec![None; self.wires.len()];
        for &row in rows {
            marks[row] = Some(mark);
        }
        debug!("{mark:?} on rows {rows:?}");
        self.style.lifecycle(self.wires.wires(), &marks);
    }
}

impl<S: GlyphStyle> Display for Circuitizer<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

impl<S: GlyphStyle> Tracer for Circuitizer<S> {
    fn qubit_allocate(&mut self, qubits: &[QubitId]) -> Result<(), Error> {
        if qubits.is_empty() {
            return Ok(());
        }
        self.wires.check_allocate(qubits)?;
        self.packer.flush(self.wires.wires(), &mut self.style);

        let allocations = self.wires.allocate(qubits)?;
        for allocation in &allocations {
            if let Allocation::New(row) = *allocation {
                self.packer.add_row();
                self.style.add_track(row);
            }
        }
        let rows = allocations
            .into_iter()
            .map(Allocation::row)
            .collect::<Vec<_>>();
        self.lifecycle(&rows, Lifecycle::Initialize);
        Ok(())
    }

    fn qubit_release(&mut self, qubits: &[QubitId]) -> Result<(), Error> {
        if qubits.is_empty() {
            return Ok(());
        }
        self.wires.check_release(qubits)?;
        self.packer.flush(self.wires.wires(), &mut self.style);

        let rows = self.wires.release(qubits)?;
        self.lifecycle(&rows, Lifecycle::Release);
        Ok(())
    }

    fn gate(&mut self, gate: &Gate, target: QubitId) -> Result<(), Error> {
        let label = gate.label();
        self.draw(&Operation::Gate {
            label: &label,
            target,
        })
    }

    fn controlled_gate(
        &mut self,
        gate: &Gate,
        controls: &[QubitId],
        target: QubitId,
    ) -> Result<(), Error> {
        if controls.is_empty() {
            return self.gate(gate, target);
        }
        let label = gate.label();
        self.draw_per_control(controls, |control| Operation::Controlled {
            label: &label,
            control,
            target,
        })
    }

    fn connected_gate(
        &mut self,
        name: &str,
        bases: &[Pauli],
        targets: &[QubitId],
    ) -> Result<(), Error> {
        self.draw(&Operation::Connected {
            name,
            control: None,
            bases,
            targets,
        })
    }

    fn controlled_connected_gate(
        &mut self,
        name: &str,
        controls: &[QubitId],
        bases: &[Pauli],
        targets: &[QubitId],
    ) -> Result<(), Error> {
        if controls.is_empty() {
            return self.connected_gate(name, bases, targets);
        }
        self.draw_per_control(controls, |control| Operation::Connected {
            name,
            control: Some(control),
            bases,
            targets,
        })
    }

    fn swap(&mut self, a: QubitId, b: QubitId) -> Result<(), Error> {
        self.draw(&Operation::Swap {
            control: None,
            a,
            b,
        })
    }

    fn controlled_swap(
        &mut self,
        controls: &[QubitId],
        a: QubitId,
        b: QubitId,
    ) -> Result<(), Error> {
        if controls.is_empty() {
            return self.swap(a, b);
        }
        self.draw_per_control(controls, |control| Operation::Swap {
            control: Some(control),
            a,
            b,
        })
    }

    fn measure(
        &mut self,
        bases: &[Pauli],
        targets: &[QubitId],
    ) -> Result<MeasurementResult, Error> {
        self.draw(&Operation::Measure { bases, targets })?;

        if self.config.collapse_measured {
            for &target in targets {
                let row = self.wires.row(target)?;
                self.wires.set_collapsed(row, true);
            }
        }

        let classical_wire = self.classical.mint();
        debug!("measurement of {targets:?} produced {classical_wire}");
        Ok(MeasurementResult {
            classical_wire,
            qubits: targets.to_vec(),
            bases: bases.to_vec(),
        })
    }

    fn reset(&mut self, target: QubitId) -> Result<(), Error> {
        self.draw(&Operation::Reset { target })?;
        let row = self.wires.row(target)?;
        self.wires.set_collapsed(row, false);
        Ok(())
    }

    fn classically_controlled(
        &mut self,
        result: ClassicalWireId,
        on_zero: Branch<'_>,
        on_one: Branch<'_>,
    ) -> Result<(), Error> {
        self.enter(result, false, |this| on_zero(this))?;
        self.enter(result, true, |this| on_one(this))
    }
}
