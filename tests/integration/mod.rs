//! Integration tests for the roster
//!
//! These tests verify that multiple components work together correctly.

#[path = "../common/mod.rs"]
pub mod common;

pub mod cli;
pub mod legacy_migration;
pub mod roster_flow;
