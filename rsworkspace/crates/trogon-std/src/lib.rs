//! Zero-cost abstractions over `std` for TrogonStack projects.
//!
//! | Concern | Trait | Production | Test |
//! |---------|-------|------------|------|
//! | Env vars | [`ReadEnv`] | [`SystemEnv`] | `InMemoryEnv`* |
//!
//! *Available with `#[cfg(test)]` or the `"test-support"` feature.
//!
//! [`SystemEnv`] is zero-sized and trivially `Send + Sync`. `InMemoryEnv`
//! is backed by a `RefCell` and is neither.

pub mod env;

pub use env::{ReadEnv, SystemEnv};
