use thiserror::Error;

use crate::attribute::AttributeType;
use crate::scope::StreamScope;

/// Errors that can occur while validating RPC endpoint URLs carried in stream
/// annotations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum UrlError {
    /// The path contains an empty segment between two `/` separators.
    #[error("{scope}: malformed url '{path}', expected no empty segments between '/' separators")]
    EmptySegment { scope: StreamScope, path: String },

    /// The path is shorter than `/<ServiceName>/<MethodName>`.
    #[error("{scope}: malformed url '{path}', expected '/<ServiceName>/<MethodName>'")]
    MissingSegments { scope: StreamScope, path: String },

    /// The full URL could not be parsed at all.
    #[error("{scope}: malformed url '{url}'")]
    Unparseable {
        scope: StreamScope,
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Errors that can occur while resolving a service reference against generated
/// stub metadata.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ResolveError {
    /// No blocking stub is registered for the referenced service.
    #[error("{scope}: invalid service name '{service}' in url")]
    UnknownService {
        scope: StreamScope,
        service: String,
        #[source]
        source: StubLookupError,
    },
}

/// The underlying lookup failure inside the stub registry.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StubLookupError {
    #[error("no blocking stub registered under '{0}'")]
    NotRegistered(String),
}

/// Errors that can occur when mapping stream attribute types to native types.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TypeMapError {
    /// The attribute kind is legal in a stream schema but has no protobuf
    /// counterpart; callers are expected to reject such schemas up front.
    #[error("internal error: attribute type {0:?} has no protobuf counterpart")]
    Unmappable(AttributeType),
}

/// Errors that can occur while transforming attribute names.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NameError {
    #[error("attribute name must not be empty")]
    Empty,
}

/// Errors that can occur while hydrating stub metadata from a compiled
/// descriptor set.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DescriptorError {
    /// The bytes are not an encoded `FileDescriptorSet`.
    #[error("failed to decode file descriptor set")]
    Decode(#[from] prost::DecodeError),

    /// The descriptor set contains unresolvable or conflicting definitions.
    #[error("failed to build descriptor pool")]
    Pool(#[from] prost_reflect::DescriptorError),
}
