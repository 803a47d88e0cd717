//! Parsing of RPC endpoint URLs carried in stream annotations.

use url::Url;

use crate::error::UrlError;
use crate::scope::StreamScope;

/// A parsed RPC endpoint path: `{service}/{method}`
///
/// The service segment is the full dotted service reference and is not
/// split further.
///
/// Example: `/org.example.EventService/consume`
/// - `service`: `org.example.EventService`
/// - `method`: `consume`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodPath {
    pub service: String,
    pub method: String,
}

impl MethodPath {
    /// Parses a path of the form `/<ServiceName>/<MethodName>`.
    ///
    /// A leading host or port section is tolerated: the service and method
    /// are always the last two segments. Empty segments (`//`, a trailing
    /// `/`) are malformed.
    pub fn parse(path: &str, scope: &StreamScope) -> Result<Self, UrlError> {
        let trimmed = path.strip_prefix('/').unwrap_or(path);

        let segments: Vec<&str> = trimmed.split('/').collect();
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(UrlError::EmptySegment {
                scope: scope.clone(),
                path: path.to_owned(),
            });
        }
        if segments.len() < 2 {
            return Err(UrlError::MissingSegments {
                scope: scope.clone(),
                path: path.to_owned(),
            });
        }

        Ok(MethodPath {
            service: segments[segments.len() - 2].to_owned(),
            method: segments[segments.len() - 1].to_owned(),
        })
    }

    /// Parses the path component of a full endpoint URL, e.g.
    /// `grpc://host:8889/org.example.EventService/consume`.
    pub fn from_url(url: &str, scope: &StreamScope) -> Result<Self, UrlError> {
        let parsed = Url::parse(url).map_err(|source| UrlError::Unparseable {
            scope: scope.clone(),
            url: url.to_owned(),
            source,
        })?;
        Self::parse(parsed.path(), scope)
    }

    /// Returns the full path: `{service}/{method}`.
    pub fn full_path(&self) -> String {
        format!("{}/{}", self.service, self.method)
    }
}

/// Extracts the service reference from an endpoint path.
pub fn service_name(path: &str, scope: &StreamScope) -> Result<String, UrlError> {
    Ok(MethodPath::parse(path, scope)?.service)
}

/// Extracts the RPC method name from an endpoint path.
pub fn method_name(path: &str, scope: &StreamScope) -> Result<String, UrlError> {
    Ok(MethodPath::parse(path, scope)?.method)
}
