pub mod config;
pub mod error;
pub mod progress;
pub mod render;
pub mod search;
pub mod simulate;
pub mod symmetry;
pub mod topology;

pub use {
    config::{Mode, RunConfig},
    error::Error,
    search::Best,
    topology::{GridSize, State, Topology},
};
