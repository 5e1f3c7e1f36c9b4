//! Wire-type resolution to documentation labels

use prost_types::field_descriptor_proto::Type;
use prost_types::FieldDescriptorProto;

/// Resolve a field's declared wire type to its documentation label
///
/// Scalars resolve to a fixed literal. Message, enum, and group fields
/// resolve to an AsciiDoc cross-reference anchor carrying the
/// fully-qualified type name exactly as the schema gives it. Resolution
/// is total: a missing or unrecognized type tag yields "Unknown".
pub fn resolve_type(field: &FieldDescriptorProto) -> String {
    // Match on the raw tag rather than the defaulting getter so unknown
    // tags stay observable instead of collapsing to the first variant.
    let kind = field.r#type.and_then(|tag| Type::try_from(tag).ok());

    match kind {
        Some(Type::Double) => "double".to_string(),
        Some(Type::Float) => "float".to_string(),
        Some(Type::Int64) => "int64".to_string(),
        // historical "unit64" spelling, kept so regenerated documents
        // stay byte-compatible with published ones
        Some(Type::Uint64) => "unit64".to_string(),
        Some(Type::Int32) => "int32".to_string(),
        Some(Type::Fixed64) => "fixed64".to_string(),
        Some(Type::Fixed32) => "fixed32".to_string(),
        Some(Type::Bool) => "bool".to_string(),
        Some(Type::String) => "string".to_string(),
        Some(Type::Group) => format!("<<group-{}>>", field.type_name()),
        Some(Type::Message) => format!("<<message-{}>>", field.type_name()),
        Some(Type::Bytes) => "bytes".to_string(),
        Some(Type::Uint32) => "uint32".to_string(),
        Some(Type::Enum) => format!("<<enum-{}>>", field.type_name()),
        Some(Type::Sfixed32) => "sfixed32".to_string(),
        Some(Type::Sfixed64) => "sfixed64".to_string(),
        Some(Type::Sint32) => "sint32".to_string(),
        Some(Type::Sint64) => "sint64".to_string(),
        None => "Unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar_field(kind: Type) -> FieldDescriptorProto {
        FieldDescriptorProto {
            r#type: Some(kind as i32),
            ..Default::default()
        }
    }

    fn reference_field(kind: Type, type_name: &str) -> FieldDescriptorProto {
        FieldDescriptorProto {
            r#type: Some(kind as i32),
            type_name: Some(type_name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_scalar_labels() {
        let cases = [
            (Type::Double, "double"),
            (Type::Float, "float"),
            (Type::Int64, "int64"),
            (Type::Uint64, "unit64"),
            (Type::Int32, "int32"),
            (Type::Fixed64, "fixed64"),
            (Type::Fixed32, "fixed32"),
            (Type::Bool, "bool"),
            (Type::String, "string"),
            (Type::Bytes, "bytes"),
            (Type::Uint32, "uint32"),
            (Type::Sfixed32, "sfixed32"),
            (Type::Sfixed64, "sfixed64"),
            (Type::Sint32, "sint32"),
            (Type::Sint64, "sint64"),
        ];

        for (kind, label) in cases {
            assert_eq!(resolve_type(&scalar_field(kind)), label);
        }
    }

    #[test]
    fn test_reference_labels() {
        assert_eq!(
            resolve_type(&reference_field(Type::Message, ".shop.Customer")),
            "<<message-.shop.Customer>>"
        );
        assert_eq!(
            resolve_type(&reference_field(Type::Enum, ".shop.OrderStatus")),
            "<<enum-.shop.OrderStatus>>"
        );
        assert_eq!(
            resolve_type(&reference_field(Type::Group, "Legacy")),
            "<<group-Legacy>>"
        );
    }

    #[test]
    fn test_unknown_type() {
        let unset = FieldDescriptorProto::default();
        assert_eq!(resolve_type(&unset), "Unknown");

        let out_of_range = FieldDescriptorProto {
            r#type: Some(999),
            ..Default::default()
        };
        assert_eq!(resolve_type(&out_of_range), "Unknown");
    }
}
