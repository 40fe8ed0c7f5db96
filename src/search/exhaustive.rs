use {
    super::Best,
    crate::{
        progress::Progress,
        symmetry::Canonicalizer,
        topology::{State, Topology},
    },
    std::{num::NonZeroU64, time::Instant},
};

pub const PROGRESS_INTERVAL: NonZeroU64 = match NonZeroU64::new(10_000_000) {
    Some(interval) => interval,
    None => panic!("progress interval must be positive"),
};

/// Scores one representative of every symmetry class, visiting states in
/// increasing order. A progress sample is taken every `every` states visited,
/// skipped ones included.
pub fn search(topology: &Topology, every: NonZeroU64, mut report: impl FnMut(Progress)) -> Best {
    let size = topology.size();
    let canon = Canonicalizer::new(size);
    let total = size.state_count();
    let start = Instant::now();

    let mut best = Best::default();
    let mut scored: u64 = 0;

    for state in State::all(size) {
        let ix = state.bits();
        if ix != 0 && ix % every.get() == 0 {
            report(Progress::timed(ix as u128, total, start.elapsed()));
        }

        if !canon.is_canonical(state) {
            continue;
        }

        scored += 1;
        best.offer(topology.stabilization_length(state), state);
    }

    tracing::debug!(scored, elapsed = ?start.elapsed(), "exhaustive scan done");

    best
}
