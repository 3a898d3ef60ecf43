//! Shared fixtures for the behavioural scenarios.

use dsl_doc::{DocError, MethodDocRegistry, RegistryBuilder};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// Signature shared by every method the scenarios mention.
pub const SIGNATURE: &str = "&mut self";

/// State threaded through a method documentation scenario.
#[derive(Debug, Default, ScenarioState)]
pub struct MethodDocsContext {
    pub builder: Slot<RegistryBuilder>,
    pub registry: Slot<MethodDocRegistry>,
    pub error: Slot<DocError>,
}

#[fixture]
pub fn method_docs_context() -> MethodDocsContext {
    MethodDocsContext::default()
}
