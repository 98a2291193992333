pub mod adapters;
pub mod application;
pub mod domain;
pub mod infra;

// Test utilities (in-memory stores and config sources for route and use case tests)
#[cfg(test)]
pub mod test_utils;

// Re-exports for shorter use statements.
pub use application::*;
pub use domain::*;
