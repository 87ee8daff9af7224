//! Shared test fixtures.

pub mod mock_engine;

pub use mock_engine::MockEngine;
