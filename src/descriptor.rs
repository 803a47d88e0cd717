//! Hydration of stub metadata from compiled protobuf descriptor sets.
//!
//! Deployments ship the `FileDescriptorSet` their codegen produced; walking
//! it yields exactly the services, methods, and message shapes the generated
//! stubs expose.

use prost::Message as _;
use prost_reflect::{DescriptorPool, Kind, MessageDescriptor};
use prost_types::FileDescriptorSet;
use tracing::debug;

use crate::error::DescriptorError;
use crate::fields::MessageField;
use crate::naming::{blocking_stub_reference, remove_underscore};
use crate::stub::StubRegistry;

/// Builds a [`StubRegistry`] from an encoded `FileDescriptorSet`.
pub fn registry_from_descriptor_set(bytes: &[u8]) -> Result<StubRegistry, DescriptorError> {
    let descriptor_set = FileDescriptorSet::decode(bytes)?;
    let pool = DescriptorPool::from_file_descriptor_set(descriptor_set)?;
    let registry = StubRegistry::new();
    register_pool_services(&registry, &pool);
    Ok(registry)
}

/// Registers every service in `pool` under its blocking-stub reference.
///
/// Method names are recorded the way the generated stubs declare them:
/// lower-camelled, so `Consume` becomes `consume`.
pub fn register_pool_services(registry: &StubRegistry, pool: &DescriptorPool) {
    for service in pool.services() {
        let stub_reference = blocking_stub_reference(service.full_name());
        let methods: Vec<String> = service
            .methods()
            .map(|method| stub_method_name(method.name()))
            .collect();
        debug!(
            service = %service.full_name(),
            methods = methods.len(),
            "Hydrating stub metadata from descriptor pool"
        );
        registry.register(stub_reference, methods);
    }
}

/// The declared-field records of a message, shaped the way the generated
/// message class declares them: camelCase `_`-suffixed names, `Object` for
/// strings, `MapField` for maps, list-assignable repeated fields.
pub fn message_fields(message: &MessageDescriptor) -> Vec<MessageField> {
    message
        .fields()
        .map(|field| {
            let name = format!("{}_", remove_underscore(field.name()));
            if field.is_map() {
                return MessageField::new(name, "com.google.protobuf.MapField");
            }
            if field.is_list() {
                return MessageField::new(name, "java.util.List").with_list_like(true);
            }
            MessageField::new(name, declared_type_name(&field.kind()))
        })
        .collect()
}

fn stub_method_name(rpc_name: &str) -> String {
    let mut chars = rpc_name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// The type the generated message class declares for a singular field.
fn declared_type_name(kind: &Kind) -> String {
    match kind {
        Kind::Double => "double".to_owned(),
        Kind::Float => "float".to_owned(),
        Kind::Int32 | Kind::Sint32 | Kind::Sfixed32 | Kind::Uint32 | Kind::Fixed32 => {
            "int".to_owned()
        }
        Kind::Int64 | Kind::Sint64 | Kind::Sfixed64 | Kind::Uint64 | Kind::Fixed64 => {
            "long".to_owned()
        }
        Kind::Bool => "boolean".to_owned(),
        // string fields come out of codegen declared as Object
        Kind::String => "java.lang.Object".to_owned(),
        Kind::Bytes => "com.google.protobuf.ByteString".to_owned(),
        Kind::Message(message) => message.full_name().to_owned(),
        Kind::Enum(_) => "int".to_owned(),
    }
}
