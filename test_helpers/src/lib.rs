//! Test helpers shared across crates.
//!
//! This crate provides sample value-object types built at runtime and small
//! helpers for writing stored documents as JSON literals.

pub mod json;
pub mod types;
