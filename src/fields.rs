//! Declared-field listings of generated message classes.

/// One declared field of a generated message class.
///
/// `name` is the raw generated field name (camelCase with a trailing `_`),
/// `type_name` the fully qualified declared type, and `list_like` whether
/// the declared type is assignable to a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageField {
    pub name: String,
    pub type_name: String,
    pub list_like: bool,
}

impl MessageField {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            list_like: false,
        }
    }

    /// Marks the declared type as assignable to a list.
    pub fn with_list_like(mut self, list_like: bool) -> Self {
        self.list_like = list_like;
        self
    }

    /// The name as shown to users: the generated trailing `_` stripped.
    pub fn display_name(&self) -> &str {
        self.name.strip_suffix('_').unwrap_or(&self.name)
    }

    /// Coarse display type: `String` for fields declared as `Object`, `Map`
    /// for `MapField`, `List` for list-assignable types, otherwise the final
    /// `.`-segment of the declared type name.
    pub fn display_type(&self) -> &str {
        let simple = self
            .type_name
            .rsplit('.')
            .next()
            .unwrap_or(&self.type_name);
        if simple == "Object" {
            // generated message classes declare string fields as Object
            "String"
        } else if simple == "MapField" {
            "Map"
        } else if self.list_like {
            "List"
        } else {
            simple
        }
    }

    /// Whether this is generated bookkeeping (`bitField<N>_`) rather than a
    /// data field.
    pub fn is_internal(&self) -> bool {
        let Some(rest) = self.name.strip_prefix("bitField") else {
            return false;
        };
        let Some(digits) = rest.strip_suffix('_') else {
            return false;
        };
        !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
    }
}

/// Renders the data fields of a generated message as a `{ 'name' : Type }`
/// map for diagnostics, skipping internal bookkeeping fields.
///
/// Produces `{ }` when no eligible fields remain.
pub fn describe_fields(fields: &[MessageField]) -> String {
    let entries: Vec<String> = fields
        .iter()
        .filter(|field| !field.is_internal())
        .map(|field| format!("'{}' : {}", field.display_name(), field.display_type()))
        .collect();

    if entries.is_empty() {
        "{ }".to_owned()
    } else {
        format!("{{ {} }}", entries.join(" , "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_internal_bookkeeping() {
        let fields = vec![
            MessageField::new("value_", "java.util.List").with_list_like(true),
            MessageField::new("bitField0_", "int"),
        ];
        assert_eq!(describe_fields(&fields), "{ 'value' : List }");
    }

    #[test]
    fn test_classifies_declared_types() {
        let fields = vec![
            MessageField::new("message_", "java.lang.Object"),
            MessageField::new("attrs_", "com.google.protobuf.MapField"),
            MessageField::new("tags_", "com.google.protobuf.LazyStringArrayList")
                .with_list_like(true),
            MessageField::new("count_", "long"),
            MessageField::new("payload_", "com.google.protobuf.ByteString"),
        ];
        assert_eq!(
            describe_fields(&fields),
            "{ 'message' : String , 'attrs' : Map , 'tags' : List , 'count' : long , 'payload' : ByteString }"
        );
    }

    #[test]
    fn test_no_eligible_fields() {
        let fields = vec![MessageField::new("bitField0_", "int")];
        assert_eq!(describe_fields(&fields), "{ }");
        assert_eq!(describe_fields(&[]), "{ }");
    }

    #[test]
    fn test_internal_detection() {
        assert!(MessageField::new("bitField0_", "int").is_internal());
        assert!(MessageField::new("bitField12_", "int").is_internal());
        assert!(!MessageField::new("bitField_", "int").is_internal());
        assert!(!MessageField::new("bitFieldX_", "int").is_internal());
        assert!(!MessageField::new("value_", "int").is_internal());
    }

    #[test]
    fn test_display_name_strips_suffix_once() {
        assert_eq!(MessageField::new("value_", "int").display_name(), "value");
        assert_eq!(MessageField::new("value", "int").display_name(), "value");
    }
}
