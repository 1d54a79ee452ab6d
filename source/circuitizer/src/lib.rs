// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Renders a stream of quantum operations as a text diagram, one track per
//! qubit, with operations packed left to right into columns.

mod ascii;
mod circuitizer;
mod classical;
mod config;
mod directive;
mod error;
mod event;
mod gates;
mod glyphs;
mod packing;
mod tracer;
mod wires;

pub use ascii::AsciiStyle;
pub use circuitizer::{AsciiCircuitizer, Circuitizer, DirectiveCircuitizer};
pub use classical::Condition;
pub use config::{CircuitizerConfig, ClassicalAnnotation};
pub use directive::DirectiveStyle;
pub use error::Error;
pub use event::{Event, parse_trace, replay};
pub use gates::{ClassicalWireId, Gate, Pauli, QubitId, axis_label};
pub use glyphs::{Cell, CellKind, GlyphStyle, Lifecycle, Operation};
pub use tracer::{Branch, MeasurementResult, Tracer};
pub use wires::{Wire, WireState};
