use {
    crate::{
        error::Error,
        progress::POLL_INTERVAL,
        search::{exhaustive, recursive},
        topology::GridSize,
    },
    std::{
        fmt,
        num::{NonZeroU64, NonZeroUsize},
        str::FromStr,
        time::Duration,
    },
};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Mode {
    /// Every set of at most `depth` filled cells, grown from the empty grid.
    RecursiveBounded,
    /// Every state, skipping those that are not canonical under symmetry.
    #[default]
    ExhaustiveSingle,
    /// Every state, split into one contiguous range per worker.
    ExhaustivePartitioned,
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recursive" | "recursive-bounded" => Ok(Self::RecursiveBounded),
            "exhaustive" | "exhaustive-single" => Ok(Self::ExhaustiveSingle),
            "parallel" | "partitioned" | "exhaustive-partitioned" => {
                Ok(Self::ExhaustivePartitioned)
            }
            _ => Err(Error::UnknownMode(s.to_owned())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::RecursiveBounded => "recursive-bounded",
            Self::ExhaustiveSingle => "exhaustive-single",
            Self::ExhaustivePartitioned => "exhaustive-partitioned",
        };
        write!(f, "{s}")
    }
}

#[derive(Clone, Debug)]
pub struct RunConfig {
    pub size: GridSize,
    pub mode: Mode,
    /// Workers for `ExhaustivePartitioned`; ignored otherwise.
    pub threads: NonZeroUsize,
    /// Overrides the recursive depth budget of `n + 2`.
    pub depth: Option<usize>,
    /// States between progress lines of the single-threaded scan.
    pub progress_every: NonZeroU64,
    /// Poll period of the parallel reporter.
    pub poll_interval: Duration,
}

impl RunConfig {
    pub fn new(size: GridSize, mode: Mode) -> Self {
        Self {
            size,
            mode,
            threads: std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN),
            depth: None,
            progress_every: exhaustive::PROGRESS_INTERVAL,
            poll_interval: POLL_INTERVAL,
        }
    }

    /// `[GRID_SIZE] [--mode M] [--threads N] [--depth D] [--progress-every N]`.
    /// Without a positional grid size, `prompt` is asked for one.
    pub fn from_args(
        mut args: pico_args::Arguments,
        prompt: impl FnOnce() -> Result<String, Error>,
    ) -> Result<Self, Error> {
        let mode = args
            .opt_value_from_str::<_, String>("--mode")?
            .map(|s| s.parse::<Mode>())
            .transpose()?
            .unwrap_or_default();
        let threads = args
            .opt_value_from_str::<_, usize>("--threads")?
            .map(|t| NonZeroUsize::new(t).ok_or(Error::ZeroThreads))
            .transpose()?;
        let depth = args.opt_value_from_str("--depth")?;
        let progress_every = args.opt_value_from_str("--progress-every")?;

        let size = args.opt_free_from_str::<String>()?;

        let unused = args.finish();
        if !unused.is_empty() {
            return Err(Error::UnusedArgs(unused));
        }

        let size = match size {
            Some(size) => size,
            None => prompt()?,
        };

        let mut config = Self::new(size.parse()?, mode);
        config.depth = depth;
        if let Some(threads) = threads {
            config.threads = threads;
        }
        if let Some(progress_every) = progress_every {
            config.progress_every = progress_every;
        }

        Ok(config)
    }

    pub fn depth(&self) -> usize {
        self.depth
            .unwrap_or_else(|| recursive::default_depth(self.size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<RunConfig, Error> {
        let args = pico_args::Arguments::from_vec(args.iter().map(|&s| s.into()).collect());
        RunConfig::from_args(args, || Err(Error::MissingGridSize))
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["4"]).unwrap();
        assert_eq!(config.size.num(), 4);
        assert_eq!(config.mode, Mode::ExhaustiveSingle);
        assert_eq!(config.depth(), 6);
        assert_eq!(config.progress_every, exhaustive::PROGRESS_INTERVAL);
    }

    #[test]
    fn test_options() {
        let config = parse(&[
            "--mode",
            "parallel",
            "--threads",
            "7",
            "--depth",
            "3",
            "--progress-every",
            "1000",
            "5",
        ])
        .unwrap();

        assert_eq!(config.size.num(), 5);
        assert_eq!(config.mode, Mode::ExhaustivePartitioned);
        assert_eq!(config.threads.get(), 7);
        assert_eq!(config.depth(), 3);
        assert_eq!(config.progress_every.get(), 1000);
    }

    #[test]
    fn test_mode_names() {
        for mode in [
            Mode::RecursiveBounded,
            Mode::ExhaustiveSingle,
            Mode::ExhaustivePartitioned,
        ] {
            assert_eq!(mode.to_string().parse::<Mode>().unwrap(), mode);
        }
        assert_eq!("recursive".parse::<Mode>().unwrap(), Mode::RecursiveBounded);
        assert!(matches!("random".parse::<Mode>(), Err(Error::UnknownMode(_))));
    }

    #[test]
    fn test_prompt_fallback() {
        let args = pico_args::Arguments::from_vec(vec![]);
        let config = RunConfig::from_args(args, || Ok("3\n".to_owned())).unwrap();
        assert_eq!(config.size.num(), 3);

        assert!(matches!(parse(&[]), Err(Error::MissingGridSize)));
    }

    #[test]
    fn test_rejected() {
        assert!(matches!(parse(&["0"]), Err(Error::InvalidGridSize(0))));
        assert!(matches!(parse(&["9"]), Err(Error::InvalidGridSize(9))));
        assert!(matches!(parse(&["x"]), Err(Error::UnparsableGridSize(_))));
        assert!(matches!(
            parse(&["--threads", "0", "3"]),
            Err(Error::ZeroThreads)
        ));
        assert!(matches!(
            parse(&["--threads", "many", "3"]),
            Err(Error::Args(_))
        ));
        assert!(matches!(
            parse(&["--mode", "fast", "3"]),
            Err(Error::UnknownMode(_))
        ));
        assert!(matches!(parse(&["3", "4"]), Err(Error::UnusedArgs(_))));
    }
}
