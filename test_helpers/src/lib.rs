//! Test helpers shared across crates.
//!
//! This crate provides environment variable guards and `figment::Jail`
//! wrappers for registry configuration tests.

pub mod env;
pub mod figment;
