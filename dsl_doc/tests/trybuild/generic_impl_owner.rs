//! Trybuild fixture: a generic impl block names its owner explicitly.

use dsl_doc::{MethodDocRegistry, MethodId, SchemaVariant, dsl_methods};

struct WrapperContext<T> {
    inner: T,
}

#[dsl_methods(owner = "WrapperContext")]
impl<T: Clone> WrapperContext<T> {
    #[dsl_method_doc(plugin = "build-timeout", example_xml = "<timeout/>")]
    fn timeout(&mut self, minutes: u32) -> T {
        let _ = minutes;
        self.inner.clone()
    }
}

fn main() {
    let mut context = WrapperContext { inner: 3_u8 };
    assert_eq!(context.timeout(10), 3);

    let registry = match MethodDocRegistry::from_inventory(SchemaVariant::Full) {
        Ok(registry) => registry,
        Err(err) => panic!("registry failed to build: {err}"),
    };
    let method = MethodId::new("WrapperContext", "timeout", "&mut self, u32");
    assert_eq!(
        registry.lookup(&method).map(|m| m.plugin.as_str()),
        Some("build-timeout")
    );
}
