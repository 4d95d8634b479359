use std::cell::Cell;

use crate::config::StaleResponsePolicy;

/// Per-endpoint request counter. Generation 0 means "nothing applied yet".
#[derive(Debug, Default)]
pub struct Generations {
    issued: Cell<u64>,
    applied: Cell<u64>,
}

impl Generations {
    pub fn issue(&self) -> u64 {
        let next = self.issued.get() + 1;
        self.issued.set(next);
        next
    }

    /// Whether the response to request `generation` may be applied. Marks it applied if so.
    pub fn accept(&self, generation: u64, policy: StaleResponsePolicy) -> bool {
        let applied = self.applied.get();
        match policy {
            StaleResponsePolicy::ApplyInArrivalOrder => {
                self.applied.set(applied.max(generation));
                true
            }
            StaleResponsePolicy::DiscardStale => {
                if generation < applied {
                    return false;
                }
                self.applied.set(generation);
                true
            }
        }
    }
}
