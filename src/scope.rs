use std::fmt;

/// Attribution for validation errors: which application and which stream
/// definition produced the value being checked.
///
/// Every URL and service reference this crate validates comes out of an
/// annotation on a stream definition; errors carry this pair so failures can
/// be traced back to the offending definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StreamScope {
    pub app_name: String,
    pub stream_id: String,
}

impl StreamScope {
    pub fn new(app_name: impl Into<String>, stream_id: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            stream_id: stream_id.into(),
        }
    }
}

impl fmt::Display for StreamScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.app_name, self.stream_id)
    }
}
