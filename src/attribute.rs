//! Stream attribute types and their native counterparts.

use std::any::TypeId;

use crate::error::TypeMapError;

/// The attribute kinds a stream schema can declare.
///
/// `Object` is legal in stream schemas but has no protobuf counterpart, so
/// it never crosses the mapping boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeType {
    String,
    Int,
    Long,
    Bool,
    Double,
    Float,
    Object,
}

/// The native type a mapped attribute is carried as when invoking generated
/// message builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeType {
    String,
    Int32,
    Int64,
    Bool,
    Float64,
    Float32,
}

impl NativeType {
    /// The `TypeId` of the Rust type backing this mapping, used to match
    /// generated setter signatures.
    pub fn type_id(&self) -> TypeId {
        match self {
            NativeType::String => TypeId::of::<String>(),
            NativeType::Int32 => TypeId::of::<i32>(),
            NativeType::Int64 => TypeId::of::<i64>(),
            NativeType::Bool => TypeId::of::<bool>(),
            NativeType::Float64 => TypeId::of::<f64>(),
            NativeType::Float32 => TypeId::of::<f32>(),
        }
    }

    /// The display name of the backing type.
    pub fn name(&self) -> &'static str {
        match self {
            NativeType::String => "String",
            NativeType::Int32 => "i32",
            NativeType::Int64 => "i64",
            NativeType::Bool => "bool",
            NativeType::Float64 => "f64",
            NativeType::Float32 => "f32",
        }
    }
}

/// Maps a stream attribute type to the native type used for builder
/// invocation.
///
/// Total over the six mappable kinds; `Object` attributes fail with
/// [`TypeMapError::Unmappable`]. Callers are expected to have rejected such
/// schemas during validation, so hitting that error indicates a bug upstream.
pub fn native_type(ty: AttributeType) -> Result<NativeType, TypeMapError> {
    match ty {
        AttributeType::String => Ok(NativeType::String),
        AttributeType::Int => Ok(NativeType::Int32),
        AttributeType::Long => Ok(NativeType::Int64),
        AttributeType::Bool => Ok(NativeType::Bool),
        AttributeType::Double => Ok(NativeType::Float64),
        AttributeType::Float => Ok(NativeType::Float32),
        AttributeType::Object => Err(TypeMapError::Unmappable(ty)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mappable_kinds() {
        assert_eq!(
            native_type(AttributeType::String).unwrap(),
            NativeType::String
        );
        assert_eq!(native_type(AttributeType::Int).unwrap(), NativeType::Int32);
        assert_eq!(native_type(AttributeType::Long).unwrap(), NativeType::Int64);
        assert_eq!(native_type(AttributeType::Bool).unwrap(), NativeType::Bool);
        assert_eq!(
            native_type(AttributeType::Double).unwrap(),
            NativeType::Float64
        );
        assert_eq!(
            native_type(AttributeType::Float).unwrap(),
            NativeType::Float32
        );
    }

    #[test]
    fn test_object_is_unmappable() {
        assert!(matches!(
            native_type(AttributeType::Object),
            Err(TypeMapError::Unmappable(AttributeType::Object))
        ));
    }

    #[test]
    fn test_type_ids_match_backing_types() {
        assert_eq!(NativeType::String.type_id(), TypeId::of::<String>());
        assert_eq!(NativeType::Int64.type_id(), TypeId::of::<i64>());
        assert_eq!(NativeType::Bool.type_id(), TypeId::of::<bool>());
        assert_ne!(NativeType::Float32.type_id(), NativeType::Float64.type_id());
    }

    #[test]
    fn test_names() {
        assert_eq!(NativeType::Int32.name(), "i32");
        assert_eq!(NativeType::Float64.name(), "f64");
    }
}
