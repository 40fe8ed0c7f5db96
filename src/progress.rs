use std::{
    fmt,
    io::Write,
    sync::atomic::{AtomicBool, AtomicU64, Ordering},
    time::Duration,
};

/// Poll period of the parallel reporter thread.
pub const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// A status sample: how much of the search space has been covered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Progress {
    pub done: u128,
    pub total: u128,
    detail: Detail,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Detail {
    Bare,
    Percent,
    MinutesLeft(f64),
}

impl Progress {
    pub fn counted(done: u128, total: u128) -> Self {
        Self {
            done,
            total,
            detail: Detail::Percent,
        }
    }

    /// Extrapolates the remaining time assuming the throughput so far holds.
    /// Without any elapsed time (or work done) there is no rate to go on.
    pub fn timed(done: u128, total: u128, elapsed: Duration) -> Self {
        let detail = if elapsed.is_zero() || done == 0 {
            Detail::Bare
        } else {
            let rate = done as f64 / elapsed.as_secs_f64();
            let secs_left = total.saturating_sub(done) as f64 / rate;
            Detail::MinutesLeft(secs_left / 60.0)
        };

        Self {
            done,
            total,
            detail,
        }
    }

    pub fn percent(&self) -> f64 {
        100.0 * self.done as f64 / self.total as f64
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.done, self.total)?;
        match self.detail {
            Detail::Bare => Ok(()),
            Detail::Percent => write!(f, " ({:.2}%)", self.percent()),
            Detail::MinutesLeft(m) => {
                write!(f, " ({:.2}%), approx {:.1} minutes left", self.percent(), m)
            }
        }
    }
}

/// Polls `counter` every `interval` until `finished` is set or the counter
/// reaches `total`. Runs on its own thread next to the workers.
pub fn poll_counter(
    counter: &AtomicU64,
    finished: &AtomicBool,
    total: u128,
    interval: Duration,
    mut report: impl FnMut(Progress),
) {
    loop {
        let done = counter.load(Ordering::Relaxed) as u128;
        if finished.load(Ordering::Acquire) || done >= total {
            break;
        }

        report(Progress::counted(done, total));
        std::thread::sleep(interval);
    }
}

/// Rewrites the current terminal line in place.
#[derive(Default)]
pub struct Overwriter {
    len: usize,
}

impl Overwriter {
    pub fn print(&mut self, str: String) {
        let mut stdout = std::io::stdout().lock();

        let _ = write!(stdout, "\r{}\r{str}", " ".repeat(self.len + 1))
            .and_then(|_| stdout.flush());

        self.len = str.len();
    }

    /// Moves past the overwritten line, if anything was printed.
    pub fn finish(&mut self) {
        if self.len > 0 {
            println!();
            self.len = 0;
        }
    }
}
