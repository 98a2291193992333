//! Test utilities for route and use case testing.
//!
//! This module provides:
//! - In-memory waitlist stores and a recording connector for mocking the hosted table
//! - A map-backed configuration source
//! - `TestAppStateBuilder` for building an `AppState` around those mocks

mod app_state_builder;
mod waitlist_mocks;

pub use app_state_builder::*;
pub use waitlist_mocks::*;
