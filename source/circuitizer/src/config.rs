// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

/// Rendering options. The default reproduces the reference diagrams.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CircuitizerConfig {
    /// How gates inside classically conditioned regions are marked.
    pub classical_annotation: ClassicalAnnotation,
    /// Draw measured wires as classical (`═══`) until they are reset or
    /// reallocated.
    pub collapse_measured: bool,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ClassicalAnnotation {
    /// Conditioned gates look exactly like unconditioned ones.
    #[default]
    None,
    /// Conditioned gate boxes get double-line borders, and directive
    /// statements get an `if (...)` guard.
    Border,
}
