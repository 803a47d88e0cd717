//! Registry of generated blocking-stub metadata.
//!
//! Populated once at startup, either directly by generated code or from a
//! compiled descriptor set (see [`crate::descriptor`]). Lookups are
//! lock-free and safe from concurrent callers.

use dashmap::DashMap;
use tracing::{info, warn};

use crate::error::{ResolveError, StubLookupError};
use crate::naming::{blocking_stub_reference, service_simple_name};
use crate::scope::StreamScope;

/// Maps fully qualified blocking-stub references to the RPC method names
/// declared directly on the stub.
///
/// Only the stub's own RPC methods belong here; inherited plumbing methods
/// are never registered.
#[derive(Debug)]
pub struct StubRegistry {
    stubs: DashMap<String, Vec<String>, ahash::RandomState>,
}

impl StubRegistry {
    pub fn new() -> Self {
        Self {
            stubs: DashMap::default(),
        }
    }

    /// Registers the RPC methods of one blocking stub, replacing any
    /// previous entry under the same reference.
    pub fn register(&self, stub_reference: impl Into<String>, methods: Vec<String>) {
        let stub_reference = stub_reference.into();
        info!(stub = %stub_reference, methods = methods.len(), "Registered blocking stub");
        self.stubs.insert(stub_reference, methods);
    }

    /// Whether a stub reference is registered.
    pub fn contains(&self, stub_reference: &str) -> bool {
        self.stubs.contains_key(stub_reference)
    }

    /// Number of registered stubs.
    pub fn len(&self) -> usize {
        self.stubs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stubs.is_empty()
    }

    /// The RPC method names invocable on the blocking stub of the referenced
    /// service.
    ///
    /// The stub reference is derived from `service_reference` via the
    /// generated naming convention; an unregistered stub fails with
    /// [`ResolveError::UnknownService`] wrapping the underlying lookup
    /// failure.
    pub fn rpc_method_names(
        &self,
        service_reference: &str,
        scope: &StreamScope,
    ) -> Result<Vec<String>, ResolveError> {
        let stub_reference = blocking_stub_reference(service_reference);
        match self.stubs.get(&stub_reference) {
            Some(methods) => Ok(methods.clone()),
            None => {
                warn!(
                    stub = %stub_reference,
                    scope = %scope,
                    "Service reference does not match any registered stub"
                );
                Err(ResolveError::UnknownService {
                    scope: scope.clone(),
                    service: service_simple_name(service_reference).to_owned(),
                    source: StubLookupError::NotRegistered(stub_reference),
                })
            }
        }
    }
}

impl Default for StubRegistry {
    fn default() -> Self {
        Self::new()
    }
}
