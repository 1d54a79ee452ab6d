// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#[cfg(test)]
mod tests;

use crate::{
    Error, Pauli, QubitId,
    classical::Condition,
    glyphs::{Cell, GlyphStyle, Lifecycle, Operation},
    wires::Wire,
};
use std::fmt::Write;

/// Line-oriented output: one `<gate-name> <wire-ids>;` statement per drawn
/// operation, in the order the operations arrived.
#[derive(Default)]
pub struct DirectiveStyle {
    statements: Vec<String>,
}

impl GlyphStyle for DirectiveStyle {
    fn add_track(&mut self, _row: usize) {}

    fn lifecycle(&mut self, wires: &[Wire], marks: &[Option<Lifecycle>]) {
        let ids_with = |kind: Lifecycle| {
            wires
                .iter()
                .zip(marks)
                .filter(|(_, mark)| **mark == Some(kind))
                .map(|(wire, _)| wire.id)
                .collect::<Vec<_>>()
        };

        let allocated = ids_with(Lifecycle::Initialize);
        if !allocated.is_empty() {
            self.statements.push(statement("alloc", &allocated));
        }
        let released = ids_with(Lifecycle::Release);
        if !released.is_empty() {
            self.statements.push(statement("release", &released));
        }
    }

    fn operation(
        &mut self,
        operation: &Operation<'_>,
        conditions: &[Condition],
    ) -> Result<(), Error> {
        let body = match operation {
            Operation::Gate { label, target } => statement(checked_name(label)?, &[*target]),
            Operation::Controlled {
                label,
                control,
                target,
            } => statement(
                &format!("C{}", checked_name(label)?),
                &[*control, *target],
            ),
            Operation::Connected {
                name,
                control,
                bases,
                targets,
            } => {
                let prefix = if control.is_some() { "C" } else { "" };
                let name = format!("{prefix}{}{}", checked_name(name)?, axes(bases)?);
                let ids = control.iter().chain(targets.iter()).copied().collect::<Vec<_>>();
                statement(&name, &ids)
            }
            Operation::Swap { control, a, b } => match control {
                Some(c) => statement("CSWAP", &[*c, *a, *b]),
                None => statement("SWAP", &[*a, *b]),
            },
            Operation::Measure { bases, targets } => {
                statement(&format!("M{}", axes(bases)?), targets)
            }
            Operation::Reset { target } => statement("RESET", &[*target]),
        };

        let line = if conditions.is_empty() {
            body
        } else {
            let guard = conditions
                .iter()
                .map(|c| format!("{} == {}", c.wire, u8::from(c.value)))
                .collect::<Vec<_>>()
                .join(" && ");
            format!("if ({guard}) {body}")
        };
        self.statements.push(line);
        Ok(())
    }

    fn column(&mut self, _wires: &[Wire], _cells: &[Option<Cell>]) {}

    fn render(&self, _wires: &[Wire], _pending: &[Option<Cell>]) -> String {
        let mut s = String::new();
        for line in &self.statements {
            let _ = writeln!(s, "{line}");
        }
        s
    }
}

fn statement(name: &str, ids: &[QubitId]) -> String {
    let mut s = name.to_string();
    for id in ids {
        let _ = write!(s, " {id}");
    }
    s.push(';');
    s
}

/// Gate names become statement keywords, so they cannot contain the
/// statement's own separators.
fn checked_name(name: &str) -> Result<&str, Error> {
    if name.is_empty() || name.contains(|c: char| c.is_whitespace() || c == ';') {
        Err(Error::Unsupported(format!("gate name `{name}`")))
    } else {
        Ok(name)
    }
}

fn axes(bases: &[Pauli]) -> Result<String, Error> {
    bases
        .iter()
        .map(|&basis| match basis {
            Pauli::I => Err(Error::Unsupported("identity basis".to_string())),
            _ => Ok(basis.axis()),
        })
        .collect()
}
