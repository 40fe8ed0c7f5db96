//! Parallel scan of every state, one contiguous range per worker.
//!
//! No symmetry pruning here: each worker scores its whole range.

use {
    super::Best,
    crate::{
        error::Error,
        progress::{self, Progress},
        topology::{State, Topology},
    },
    rayon::prelude::*,
    std::{
        num::NonZeroUsize,
        ops::Range,
        sync::atomic::{AtomicBool, AtomicU64, Ordering},
        time::Duration,
    },
};

/// Splits `[0, total)` into `count` contiguous ranges in order. The first
/// `total % count` ranges are one longer than the rest.
pub fn partitions(total: u128, count: NonZeroUsize) -> Vec<Range<u128>> {
    let count = count.get() as u128;
    let chunk = total / count;
    let mut remainder = total % count;

    let mut start = 0;
    (0..count)
        .map(|_| {
            let mut end = start + chunk;
            if remainder > 0 {
                end += 1;
                remainder -= 1;
            }
            let range = start..end;
            start = end;
            range
        })
        .collect()
}

/// Scores every state on `threads` workers while a reporter thread polls the
/// shared counter. Local bests are folded in partition order, so the result
/// does not depend on the thread count or on scheduling.
pub fn search(
    topology: &Topology,
    threads: NonZeroUsize,
    poll_interval: Duration,
    report: impl FnMut(Progress) + Send,
) -> Result<Best, Error> {
    let total = topology.size().state_count();
    let ranges = partitions(total, threads);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads.get())
        .thread_name(|i| format!("percolation-worker-{i}"))
        .build()?;

    tracing::debug!(threads = threads.get(), %total, "partitioned scan");

    let processed = AtomicU64::new(0);
    let finished = AtomicBool::new(false);

    let locals = std::thread::scope(|s| {
        let (processed, finished) = (&processed, &finished);

        s.spawn(move || progress::poll_counter(processed, finished, total, poll_interval, report));

        let locals: Vec<Best> = pool.install(|| {
            ranges
                .par_iter()
                .enumerate()
                .map(|(i, range)| {
                    let local = scan(topology, range.clone(), processed);
                    tracing::debug!(
                        partition = i,
                        start = %range.start,
                        end = %range.end,
                        length = local.length,
                        "partition done"
                    );
                    local
                })
                .collect()
        });

        finished.store(true, Ordering::Release);
        locals
    });

    let mut best = Best::default();
    for local in locals {
        best.merge(local);
    }

    Ok(best)
}

fn scan(topology: &Topology, range: Range<u128>, processed: &AtomicU64) -> Best {
    let mut best = Best::default();
    if range.is_empty() {
        return best;
    }

    // both ends fit in a u64 even when the range ends at 2^64
    let (first, last) = (range.start as u64, (range.end - 1) as u64);

    for bits in first..=last {
        let state = State::from_bits(bits);
        best.offer(topology.stabilization_length(state), state);
        processed.fetch_add(1, Ordering::Relaxed);
    }

    best
}
