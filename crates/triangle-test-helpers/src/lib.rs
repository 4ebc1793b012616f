//! Test utilities and fixtures for the Triangle optimiser
//!
//! Shared by the unit tests of `triangle-core` and the integration tests of
//! every crate in the workspace.

pub mod fixtures;
pub mod optimize;
