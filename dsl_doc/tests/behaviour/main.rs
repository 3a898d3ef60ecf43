//! `rstest-bdd` scenarios for method documentation lookup.
//!
//! [`scenarios`] binds `tests/features/method_docs.feature` to the
//! [`fixtures`], and [`steps`] drives a registry builder through each one.

mod fixtures;
mod scenarios;
mod steps;
