//! Naming, schema, and annotation helpers for mapping gRPC service calls
//! onto stream events.
//!
//! A stream-processing engine's protobuf mapper needs a handful of glue
//! operations before any event flows: pull the service and method out of the
//! endpoint URL a stream annotation carries, check the stream's attribute
//! types against the native types the generated message builders accept,
//! resolve a service reference to the RPC methods its generated blocking
//! stub exposes, and normalize generated field names for comparison against
//! attribute names. This crate is exactly that layer; the transport, the
//! codegen, and the engine itself live elsewhere.
//!
//! Stub metadata comes from a [`stub::StubRegistry`] populated at startup,
//! either directly by generated code or from a compiled descriptor set via
//! [`descriptor::registry_from_descriptor_set`].

pub mod annotation;
pub mod attribute;
pub mod descriptor;
pub mod error;
pub mod fields;
pub mod naming;
pub mod path;
pub mod scope;
pub mod stub;

pub use annotation::{Annotation, Element, StreamCatalog, UrlQuery, find_url};
pub use attribute::{AttributeType, NativeType, native_type};
pub use error::{
    DescriptorError, NameError, ResolveError, StubLookupError, TypeMapError, UrlError,
};
pub use fields::{MessageField, describe_fields};
pub use naming::{
    blocking_stub_reference, remove_underscore, service_simple_name, to_upper_camel_case,
};
pub use path::{MethodPath, method_name, service_name};
pub use scope::StreamScope;
pub use stub::StubRegistry;
