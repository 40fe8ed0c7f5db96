#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("grid size must be between 1 and 8, got {0}")]
    InvalidGridSize(usize),

    #[error("grid size must be a number between 1 and 8, got {0:?}")]
    UnparsableGridSize(String),

    #[error("missing grid size")]
    MissingGridSize,

    #[error("unknown mode {0:?}, expected one of: recursive, exhaustive, parallel")]
    UnknownMode(String),

    #[error("thread count must be positive")]
    ZeroThreads,

    #[error("error parsing arguments: {0}")]
    Args(#[from] pico_args::Error),

    #[error("unexpected arguments: {0:?}")]
    UnusedArgs(Vec<std::ffi::OsString>),

    #[error("unable to start worker threads: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
