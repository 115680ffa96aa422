//! Instrumented element types shared by the integration tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

/// Counts constructions, clones and drops of every `Tracked` created from it.
#[derive(Debug, Default)]
pub struct Ledger {
    made: Cell<usize>,
    cloned: Cell<usize>,
    dropped: Cell<usize>,
}

impl Ledger {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn made(&self) -> usize {
        self.made.get()
    }

    pub fn cloned(&self) -> usize {
        self.cloned.get()
    }

    pub fn dropped(&self) -> usize {
        self.dropped.get()
    }

    /// Objects constructed (directly or by clone) and not yet dropped.
    pub fn live(&self) -> usize {
        self.made() + self.cloned() - self.dropped()
    }
}

/// A value whose lifecycle is recorded in a `Ledger`.
#[derive(Debug)]
pub struct Tracked {
    pub value: i32,
    ledger: Rc<Ledger>,
}

impl Tracked {
    pub fn new(value: i32, ledger: &Rc<Ledger>) -> Self {
        ledger.made.set(ledger.made.get() + 1);
        Self {
            value,
            ledger: ledger.clone(),
        }
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.ledger.cloned.set(self.ledger.cloned.get() + 1);
        Self {
            value: self.value,
            ledger: self.ledger.clone(),
        }
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.ledger.dropped.set(self.ledger.dropped.get() + 1);
    }
}
