//! Trybuild fixture: trait default bodies keep compiling and inheriting.

use dsl_doc::{MethodDocRegistry, MethodId, SchemaVariant, dsl_methods};

#[dsl_methods]
trait WrapperContext {
    #[dsl_method_doc(plugin = "timestamper", available_since_version = "1.19")]
    fn timestamps(&mut self) {}

    fn colorize(&mut self, scheme: &str);
}

struct JobWrappers;

#[dsl_methods]
impl WrapperContext for JobWrappers {
    fn colorize(&mut self, scheme: &str) {
        let _ = scheme;
    }
}

fn main() {
    let mut wrappers = JobWrappers;
    wrappers.timestamps();
    wrappers.colorize("xterm");

    let registry = match MethodDocRegistry::from_inventory(SchemaVariant::Full) {
        Ok(registry) => registry,
        Err(err) => panic!("registry failed to build: {err}"),
    };
    let owner = |name: &str| format!("{}::{name}", module_path!());
    let declared = MethodId::new(owner("WrapperContext"), "timestamps", "&mut self");
    assert!(registry.lookup(&declared).is_some());
    let inherited = declared.with_owner(owner("JobWrappers"));
    assert_eq!(registry.declaring_method(&inherited), Some(&declared));
    let colorize = MethodId::new(owner("JobWrappers"), "colorize", "&mut self, &str");
    assert!(registry.lookup(&colorize).is_none());
}
