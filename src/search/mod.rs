pub mod exhaustive;
pub mod partitioned;
pub mod recursive;

use crate::{
    config::{Mode, RunConfig},
    error::Error,
    progress::Progress,
    topology::{State, Topology},
};

/// Longest stabilization seen so far and the first state that reached it.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Best {
    pub length: u32,
    pub state: State,
}

impl Best {
    /// Replaces the current best only on a strictly longer length, so the
    /// earliest candidate wins ties.
    #[inline]
    pub fn offer(&mut self, length: u32, state: State) -> bool {
        if length > self.length {
            *self = Self { length, state };
            true
        } else {
            false
        }
    }

    pub fn merge(&mut self, other: Best) -> bool {
        self.offer(other.length, other.state)
    }
}

/// Runs the strategy `config.mode` selects. `report` only observes progress.
pub fn run(config: &RunConfig, report: impl FnMut(Progress) + Send) -> Result<Best, Error> {
    let topology = Topology::new(config.size);

    tracing::info!(n = config.size.num(), mode = %config.mode, "starting search");

    let best = match config.mode {
        Mode::RecursiveBounded => recursive::search(&topology, config.depth(), report),
        Mode::ExhaustiveSingle => exhaustive::search(&topology, config.progress_every, report),
        Mode::ExhaustivePartitioned => {
            partitioned::search(&topology, config.threads, config.poll_interval, report)?
        }
    };

    tracing::info!(length = best.length, state = %best.state, "search finished");

    Ok(best)
}

#[cfg(test)]
mod tests {
    use {super::*, crate::topology::GridSize, std::time::Duration};

    #[test]
    fn test_offer_is_strict() {
        let mut best = Best::default();
        assert!(best.offer(1, State::from_bits(4)));
        assert!(!best.offer(1, State::from_bits(2)));
        assert!(best.offer(3, State::from_bits(9)));
        assert!(!best.merge(Best {
            length: 3,
            state: State::from_bits(1)
        }));
        assert_eq!(
            best,
            Best {
                length: 3,
                state: State::from_bits(9)
            }
        );
    }

    #[test]
    fn test_modes_agree() {
        // known maxima for n = 1..=4
        for (n, length) in [(1, 1), (2, 2), (3, 5), (4, 10)] {
            let size = GridSize::new(n).unwrap();

            for mode in [
                Mode::RecursiveBounded,
                Mode::ExhaustiveSingle,
                Mode::ExhaustivePartitioned,
            ] {
                let mut config = RunConfig::new(size, mode);
                config.poll_interval = Duration::from_millis(1);

                let best = run(&config, |_| {}).unwrap();
                assert_eq!(best.length, length, "{mode} on n = {n}");

                let topology = Topology::new(size);
                assert_eq!(topology.stabilization_length(best.state), length);
            }
        }
    }
}
