//! Conflicting compiled declarations surface when the registry is built.

use dsl_doc::{DocError, MethodDocRegistry, MethodId, SchemaVariant, dsl_methods};
use rstest::rstest;

/// Publisher claiming the shared `status` identity.
pub struct GitHubPublisher;
/// Second publisher claiming the same `status` identity.
pub struct GitLabPublisher;

#[dsl_methods(owner = "PublisherContext")]
impl GitHubPublisher {
    /// Reports build status to GitHub.
    #[dsl_method_doc(plugin = "github")]
    pub fn status(&self) {}
}

#[dsl_methods(owner = "PublisherContext")]
impl GitLabPublisher {
    /// Reports build status to GitLab.
    #[dsl_method_doc(plugin = "gitlab-plugin")]
    pub fn status(&self) {}
}

#[rstest]
#[case(SchemaVariant::Full)]
#[case(SchemaVariant::Reduced)]
fn shared_identity_is_rejected(#[case] schema: SchemaVariant) {
    let result = MethodDocRegistry::from_inventory(schema);
    let expected = MethodId::new("PublisherContext", "status", "&self");
    assert!(
        matches!(result, Err(DocError::DuplicateDeclaration { ref method }) if *method == expected),
        "unexpected result: {result:?}"
    );
}
