//! Binds the method documentation feature file to the step registry.

use crate::fixtures::{MethodDocsContext, method_docs_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/method_docs.feature",
    fixtures = [method_docs_context: MethodDocsContext]
);
