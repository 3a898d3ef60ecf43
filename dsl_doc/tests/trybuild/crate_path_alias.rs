//! Trybuild fixture: `crate = "..."` routes registrations through an alias.

use dsl_doc as docs;
use docs::{MethodDocRegistry, MethodId, SchemaVariant, dsl_methods};

struct PublisherContext;

#[dsl_methods(crate = "docs")]
impl PublisherContext {
    #[dsl_method_doc(plugin = "mailer")]
    fn mailer(&mut self, recipients: &str) {
        let _ = recipients;
    }
}

fn main() {
    PublisherContext.mailer("dev@example.com");
    let registry = match MethodDocRegistry::from_inventory(SchemaVariant::Reduced) {
        Ok(registry) => registry,
        Err(err) => panic!("registry failed to build: {err}"),
    };
    let method = MethodId::new(
        format!("{}::PublisherContext", module_path!()),
        "mailer",
        "&mut self, &str",
    );
    assert!(registry.lookup(&method).is_some());
}
