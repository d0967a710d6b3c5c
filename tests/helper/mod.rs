//! Shared fixtures for integration tests

pub mod registry;

#[allow(unused_imports)]
pub use registry::{
    CountingRegistry, no_delay, node_delay, standard, strategies, write_json,
    write_snapshot,
};
