//! # Custody-Chain Test Suite
//!
//! Cross-subsystem integration tests: full custody flows through the
//! coordinator, registry-driven destination gating, and concurrent
//! commit behavior.

pub mod integration;
