//! Stream-definition annotations and the transport-URL lookup.
//!
//! The parsed application is owned by the engine; this module defines the
//! read-only view it must expose and the matching logic over it.

use tracing::debug;

/// One `key = value` entry of an annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub key: String,
    pub value: String,
}

/// A metadata block attached to a stream definition, e.g.
/// `@sink(type = "grpc", publisher.url = "grpc://host:8889/org.example.EventService/consume")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    name: String,
    elements: Vec<Element>,
}

impl Annotation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            elements: Vec::new(),
        }
    }

    /// Appends an element.
    pub fn with_element(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.elements.push(Element {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value of the first element whose key matches case-insensitively.
    pub fn element(&self, key: &str) -> Option<&str> {
        self.elements
            .iter()
            .find(|element| element.key.eq_ignore_ascii_case(key))
            .map(|element| element.value.as_str())
    }
}

/// Read-only view of a parsed application's stream definitions.
///
/// Implemented by the engine's application model; this crate never owns the
/// application. Iteration order over definitions is whatever the
/// implementation provides and is not required to be stable.
pub trait StreamCatalog {
    /// Iterates `(stream_id, annotations)` for every stream definition.
    fn stream_definitions(&self) -> Box<dyn Iterator<Item = (&str, &[Annotation])> + '_>;
}

/// Criteria for locating a transport URL in stream annotations. All matching
/// is case-insensitive.
#[derive(Debug, Clone)]
pub struct UrlQuery<'a> {
    /// Annotation name to match, e.g. `sink` or `source`.
    pub category: &'a str,
    /// Required value of the annotation's `type` element, e.g. `grpc`.
    pub annotation_type: &'a str,
    /// Element holding the URL to return, e.g. `publisher.url`.
    pub url_key: &'a str,
    /// Element carrying the mapping identifier, e.g. `sink.id`.
    pub mapping_key: &'a str,
    /// Required value of the `mapping_key` element.
    pub id: &'a str,
}

/// Finds the transport URL of the annotation matching `query`.
///
/// The first annotation (in catalog iteration order) whose name, `type`
/// element, and mapping element all match decides the result: the value of
/// its `url_key` element, or `None` when that element is absent. Returns
/// `None` when nothing matches. Configurations with more than one matching
/// annotation are a caller error; the catalog's iteration order decides
/// which one wins.
pub fn find_url(app: &impl StreamCatalog, query: &UrlQuery<'_>) -> Option<String> {
    for (stream_id, annotations) in app.stream_definitions() {
        for annotation in annotations {
            if !annotation.name().eq_ignore_ascii_case(query.category) {
                continue;
            }
            let type_matches = annotation
                .element("type")
                .is_some_and(|value| value.eq_ignore_ascii_case(query.annotation_type));
            let id_matches = annotation
                .element(query.mapping_key)
                .is_some_and(|value| value.eq_ignore_ascii_case(query.id));
            if type_matches && id_matches {
                debug!(
                    stream = %stream_id,
                    annotation = %annotation.name(),
                    "Matched transport annotation"
                );
                return annotation.element(query.url_key).map(str::to_owned);
            }
        }
    }
    None
}
