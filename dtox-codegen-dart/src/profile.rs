//! Dart type tables.

use dtox_codegen::mapping::TargetProfile;

fn list(element: &str) -> String {
    format!("List<{}>", element)
}

fn nullable(ty: &str) -> String {
    format!("{}?", ty)
}

/// Dart type profile. List elements are nullable (`List<User?>`).
pub const DART_PROFILE: TargetProfile = TargetProfile {
    primitives: &[
        ("string", "String"),
        ("int", "int"),
        ("integer", "int"),
        ("float", "double"),
        ("double", "double"),
        ("bool", "bool"),
        ("boolean", "bool"),
    ],
    temporal: "DateTime",
    any: "dynamic",
    entity_reference: "String",
    list,
    nullable,
    nullable_elements: true,
};

#[cfg(test)]
mod tests {
    use dtox_codegen::mapping::TypeMapper;
    use dtox_ir::{FieldMetadata, Namespaces};

    use super::*;

    fn collection(element: &str) -> FieldMetadata {
        FieldMetadata {
            name: "items".into(),
            declared_type: "array".into(),
            is_nullable: false,
            is_built_in: true,
            default_value: None,
            list_element_type: Some(element.into()),
            description: None,
        }
    }

    #[test]
    fn test_primitive_table() {
        let ns = Namespaces::default();
        let mapper = TypeMapper::new(&DART_PROFILE, &ns);
        for (source, expected) in [
            ("string", "String"),
            ("int", "int"),
            ("float", "double"),
            ("boolean", "bool"),
            ("DateTime", "DateTime"),
            ("mixed", "dynamic"),
            ("App.Entity.Account", "String"),
        ] {
            assert_eq!(mapper.map_type(source, None), expected, "{source}");
        }
    }

    #[test]
    fn test_collections_have_nullable_elements() {
        let ns = Namespaces::new("Domain", "Domain.Entity");
        let mapper = TypeMapper::new(&DART_PROFILE, &ns);

        assert_eq!(
            mapper.map_type("array", Some(&collection("Domain.User"))),
            "List<User?>"
        );
        assert_eq!(
            mapper.map_type("array", Some(&collection("int"))),
            "List<int?>"
        );
    }
}
