//! Generated-code naming conventions and attribute-name transforms.
//!
//! The engine's protobuf codegen emits one outer `<Service>Grpc` class per
//! service, with the synchronous RPC surface on an inner
//! `<Service>BlockingStub`. The helpers here assemble and pick apart those
//! names, and normalize generated field names for comparison against stream
//! attribute names.

use crate::error::NameError;

/// Suffix of the generated outer class holding a service's stubs.
pub const GRPC_OUTER_SUFFIX: &str = "Grpc";

/// Separator between the generated outer class and its inner stub class.
pub const STUB_SEPARATOR: char = '$';

/// Suffix of the generated synchronous stub class.
pub const BLOCKING_STUB_SUFFIX: &str = "BlockingStub";

/// Returns the simple (unqualified) name of a dotted service reference: the
/// final `.`-separated segment.
pub fn service_simple_name(service_reference: &str) -> &str {
    service_reference
        .rsplit('.')
        .next()
        .unwrap_or(service_reference)
}

/// Assembles the fully qualified reference of the generated blocking stub
/// for a service: `<ServiceReference>Grpc$<ServiceName>BlockingStub`.
pub fn blocking_stub_reference(service_reference: &str) -> String {
    format!(
        "{service_reference}{GRPC_OUTER_SUFFIX}{STUB_SEPARATOR}{}{BLOCKING_STUB_SUFFIX}",
        service_simple_name(service_reference)
    )
}

/// Upper-cases the first character of an attribute name, leaving the rest
/// untouched. Getter and setter names on generated builders are formed this
/// way.
pub fn to_upper_camel_case(name: &str) -> Result<String, NameError> {
    let mut chars = name.chars();
    let first = chars.next().ok_or(NameError::Empty)?;
    let mut out = String::with_capacity(name.len());
    out.push(first.to_ascii_uppercase());
    out.push_str(chars.as_str());
    Ok(out)
}

/// Removes underscores and upper-cases the character following each one, so
/// protobuf field names compare against camelCase attribute names:
/// `service_name` becomes `serviceName`.
pub fn remove_underscore(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut capitalize_next = false;
    for c in name.chars() {
        if c == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            out.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            out.push(c);
        }
    }
    out
}
