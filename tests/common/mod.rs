//! Shared test utilities for the roster
//!
//! This module provides common helpers for integration tests:
//! - Deterministic ids and timestamps for legacy records
//! - Temporary data directories with each storage backend

pub mod determinism;
pub mod fixtures;
