//! Entry identifier generation

use std::cell::Cell;
use uuid::Uuid;

/// Source of ids for extracted entries. Injectable so tests can assert on
/// entry content with predictable ids.
pub trait IdGenerator {
    fn next_id(&self) -> String;
}

/// Production generator: random UUID v4 per entry.
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic counter-based generator ("1", "2", ...).
#[derive(Default)]
pub struct SequentialIds {
    counter: Cell<u64>,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let next = self.counter.get() + 1;
        self.counter.set(next);
        next.to_string()
    }
}
