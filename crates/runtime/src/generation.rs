//! Request generation tokens.
//!
//! Every recompute issues a new generation. A response is applied only if it
//! carries the latest issued generation; anything older is stale and must be
//! dropped without touching overlays or panels.
//!
//! Ordering contract:
//! - Generations are strictly increasing in issue order.
//! - `invalidate` makes every previously issued generation stale without
//!   issuing a new one.

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(pub u64);

#[derive(Debug, Default)]
pub struct RequestGenerations {
    latest: u64,
}

impl RequestGenerations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> Generation {
        self.latest += 1;
        Generation(self.latest)
    }

    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        generation.0 == self.latest
    }

    pub fn latest(&self) -> Generation {
        Generation(self.latest)
    }
}
