//! Steps for method documentation scenarios.

use crate::fixtures::{MethodDocsContext, SIGNATURE};
use anyhow::{Result, anyhow, ensure};
use dsl_doc::{DocError, DocFields, MethodDocMetadata, MethodDocRegistry, MethodId, SchemaVariant};
use rstest_bdd_macros::{given, then, when};

/// Parses `Owner.name` into a method identity.
fn method_id(reference: &str) -> Result<MethodId> {
    let (owner, name) = reference
        .split_once('.')
        .ok_or_else(|| anyhow!("expected Owner.name, got {reference}"))?;
    Ok(MethodId::new(owner, name, SIGNATURE))
}

fn with_builder<T>(
    context: &MethodDocsContext,
    f: impl FnOnce(&mut dsl_doc::RegistryBuilder) -> Result<T, DocError>,
) -> Result<Option<T>> {
    let mut builder = context
        .builder
        .take()
        .ok_or_else(|| anyhow!("registry builder not initialised"))?;
    let outcome = f(&mut builder);
    context.builder.set(builder);
    match outcome {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            context.error.set(err);
            Ok(None)
        }
    }
}

fn lookup(context: &MethodDocsContext, reference: &str) -> Result<Option<MethodDocMetadata>> {
    let method = method_id(reference)?;
    context
        .registry
        .with_ref(|registry| registry.lookup(&method).cloned())
        .ok_or_else(|| anyhow!("registry not built"))
}

fn record(context: &MethodDocsContext, reference: &str) -> Result<MethodDocMetadata> {
    lookup(context, reference)?.ok_or_else(|| anyhow!("{reference} has no metadata"))
}

#[given("a registry builder for the {schema} schema")]
fn builder_for(method_docs_context: &MethodDocsContext, schema: String) -> Result<()> {
    let schema = match schema.as_str() {
        "full" => SchemaVariant::Full,
        "reduced" => SchemaVariant::Reduced,
        other => return Err(anyhow!("unknown schema {other}")),
    };
    method_docs_context
        .builder
        .set(MethodDocRegistry::builder(schema));
    Ok(())
}

#[given("method {method} declares plugin {plugin} and example {example}")]
fn declare(
    method_docs_context: &MethodDocsContext,
    method: String,
    plugin: String,
    example: String,
) -> Result<()> {
    let id = method_id(&method)?;
    let fields = DocFields::new().plugin(plugin).example_xml(example);
    let declared = with_builder(method_docs_context, |builder| {
        builder.declare(id, fields).map(|_| ())
    })?;
    ensure!(declared.is_some(), "declaring {method} failed");
    Ok(())
}

#[given("method {method} overrides {ancestor}")]
fn overrides(
    method_docs_context: &MethodDocsContext,
    method: String,
    ancestor: String,
) -> Result<()> {
    let (id, ancestor_id) = (method_id(&method)?, method_id(&ancestor)?);
    let recorded = with_builder(method_docs_context, |builder| {
        builder.inherit(id, ancestor_id).map(|_| ())
    })?;
    ensure!(recorded.is_some(), "recording {method} -> {ancestor} failed");
    Ok(())
}

#[given("owner {owner} extends {parent}")]
fn extends(method_docs_context: &MethodDocsContext, owner: String, parent: String) -> Result<()> {
    let recorded = with_builder(method_docs_context, |builder| {
        builder.extend_owner(owner.as_str(), parent.as_str()).map(|_| ())
    })?;
    ensure!(recorded.is_some(), "recording {owner} extends {parent} failed");
    Ok(())
}

#[when("method {method} declares plugin {plugin} again")]
fn declare_again(
    method_docs_context: &MethodDocsContext,
    method: String,
    plugin: String,
) -> Result<()> {
    let id = method_id(&method)?;
    with_builder(method_docs_context, |builder| {
        builder.declare(id, DocFields::new().plugin(plugin)).map(|_| ())
    })?;
    Ok(())
}

#[when("the registry is built")]
fn build(method_docs_context: &MethodDocsContext) -> Result<()> {
    let builder = method_docs_context
        .builder
        .take()
        .ok_or_else(|| anyhow!("registry builder not initialised"))?;
    match builder.build() {
        Ok(registry) => method_docs_context.registry.set(registry),
        Err(err) => method_docs_context.error.set(err),
    }
    Ok(())
}

#[then("lookup of {method} has plugin {expected}")]
fn has_plugin(method_docs_context: &MethodDocsContext, method: String, expected: String) -> Result<()> {
    let actual = record(method_docs_context, &method)?.plugin;
    ensure!(actual == expected, "expected plugin {expected}, got {actual}");
    Ok(())
}

#[then("lookup of {method} has example {expected}")]
fn has_example(
    method_docs_context: &MethodDocsContext,
    method: String,
    expected: String,
) -> Result<()> {
    let actual = record(method_docs_context, &method)?.example_xml;
    ensure!(actual == expected, "expected example {expected}, got {actual}");
    Ok(())
}

#[then("lookup of {method} has no version fields")]
fn has_no_versions(method_docs_context: &MethodDocsContext, method: String) -> Result<()> {
    let metadata = record(method_docs_context, &method)?;
    ensure!(
        metadata.available_since_version.is_empty() && metadata.deprecated_since_version.is_empty(),
        "unexpected versions: {metadata:?}"
    );
    Ok(())
}

#[then("lookup of {method} is absent")]
fn is_absent(method_docs_context: &MethodDocsContext, method: String) -> Result<()> {
    let found = lookup(method_docs_context, &method)?;
    ensure!(found.is_none(), "expected no metadata, got {found:?}");
    Ok(())
}

#[then("{method} is documented by {origin}")]
fn documented_by(
    method_docs_context: &MethodDocsContext,
    method: String,
    origin: String,
) -> Result<()> {
    let (id, expected) = (method_id(&method)?, method_id(&origin)?);
    let actual = method_docs_context
        .registry
        .with_ref(|registry| registry.declaring_method(&id).cloned())
        .ok_or_else(|| anyhow!("registry not built"))?;
    ensure!(actual.as_ref() == Some(&expected), "expected {expected}, got {actual:?}");
    Ok(())
}

#[then("the declaration is rejected as a duplicate")]
fn rejected_duplicate(method_docs_context: &MethodDocsContext) -> Result<()> {
    let err = method_docs_context
        .error
        .take()
        .ok_or_else(|| anyhow!("no error recorded"))?;
    ensure!(
        matches!(err, DocError::DuplicateDeclaration { .. }),
        "unexpected error: {err}"
    );
    Ok(())
}

#[then("the build is rejected as cyclic")]
fn rejected_cyclic(method_docs_context: &MethodDocsContext) -> Result<()> {
    ensure!(method_docs_context.registry.is_empty(), "registry unexpectedly built");
    let err = method_docs_context
        .error
        .take()
        .ok_or_else(|| anyhow!("no error recorded"))?;
    ensure!(matches!(err, DocError::CyclicOverride { .. }), "unexpected error: {err}");
    Ok(())
}
