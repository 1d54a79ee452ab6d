// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#[cfg(test)]
mod tests;

use crate::{ClassicalWireId, Error};

/// One enclosing conditioned region: the gates inside it run only when the
/// measurement behind `wire` produced `value`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Condition {
    pub wire: ClassicalWireId,
    pub value: bool,
}

/// Mints classical wire ids and tracks the stack of conditioned regions
/// currently entered.
#[derive(Default)]
pub(crate) struct ClassicalControls {
    stack: Vec<Condition>,
    minted: usize,
}

impl ClassicalControls {
    pub(crate) fn mint(&mut self) -> ClassicalWireId {
        let id = ClassicalWireId(self.minted);
        self.minted += 1;
        id
    }

    pub(crate) fn check(&self, wire: ClassicalWireId) -> Result<(), Error> {
        if wire.0 < self.minted {
            Ok(())
        } else {
            Err(Error::UnknownClassicalWire(wire))
        }
    }

    pub(crate) fn push(&mut self, condition: Condition) {
        self.stack.push(condition);
    }

    pub(crate) fn pop(&mut self, expected: Condition) {
        let popped = self.stack.pop();
        debug_assert_eq!(popped, Some(expected), "regions must be exited in order");
    }

    /// Innermost region last.
    pub(crate) fn active(&self) -> &[Condition] {
        &self.stack
    }
}
