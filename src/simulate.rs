use crate::topology::{State, Topology};

/// Filled neighbors an empty cell needs before it fills.
pub const THRESHOLD: u32 = 2;

impl Topology {
    /// One synchronous update. Neighbor counts are taken from `state` only, so
    /// cells filled during this step do not influence each other.
    pub fn step(&self, state: State) -> (State, bool) {
        let mut next = state;

        for ix in 0..self.size().cells() {
            if !state.is_filled(ix) && self.neighbors(ix).intersect(state).count() >= THRESHOLD {
                next = next.filled(ix);
            }
        }

        (next, next != state)
    }

    /// Number of steps until a fixed point, counting `initial` as step 1.
    pub fn stabilization_length(&self, initial: State) -> u32 {
        let mut state = initial;
        let mut steps = 1;

        loop {
            let (next, changed) = self.step(state);
            if !changed {
                return steps;
            }
            state = next;
            steps += 1;
        }
    }
}
