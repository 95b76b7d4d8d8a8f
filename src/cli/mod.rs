// file: src/cli/mod.rs
// version: 2.0.0
// guid: 3dd77baa-7ea2-4bb2-a1a7-74f33fa2fb1f

//! Command line interface for the buildbot update step

pub mod args;

pub use args::WorkerArgs;
