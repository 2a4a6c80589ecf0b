//! Shared test utilities for the depgate workspace.
//!
//! This crate provides standardised fixtures for writing target manifests to
//! disk. It is a dev-dependency only, never published.

pub mod target;

pub use target::TestTarget;
