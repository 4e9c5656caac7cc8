//! Source type to target type mapping.

use dtox_core::basename;
use dtox_ir::{ANY_MARKER, COLLECTION_MARKER, FieldMetadata, Namespaces, TEMPORAL_TYPES, is_built_in};

/// Type tables of one export target.
///
/// Every target shares the mapping algorithm in [`TypeMapper`]; only these
/// tables differ.
#[derive(Debug, Clone, Copy)]
pub struct TargetProfile {
    /// Built-in source type to target type (e.g., "int" -> "number")
    pub primitives: &'static [(&'static str, &'static str)],
    /// Target type for date/time classes
    pub temporal: &'static str,
    /// Target catch-all type, used for `mixed` and untyped collections
    pub any: &'static str,
    /// Target type for entity references
    pub entity_reference: &'static str,
    /// Wrap an element type into a list type (e.g., "User" -> "User[]")
    pub list: fn(&str) -> String,
    /// Make a type nullable (e.g., "string" -> "string | null")
    pub nullable: fn(&str) -> String,
    /// Whether list elements are themselves nullable (`List<User?>`)
    pub nullable_elements: bool,
}

impl TargetProfile {
    /// Look up a primitive mapping.
    pub fn primitive(&self, source: &str) -> Option<&'static str> {
        self.primitives
            .iter()
            .find(|(from, _)| *from == source)
            .map(|(_, to)| *to)
    }
}

/// Maps declared source types to target type expressions.
#[derive(Debug, Clone, Copy)]
pub struct TypeMapper<'a> {
    profile: &'a TargetProfile,
    namespaces: &'a Namespaces,
}

impl<'a> TypeMapper<'a> {
    pub fn new(profile: &'a TargetProfile, namespaces: &'a Namespaces) -> Self {
        Self {
            profile,
            namespaces,
        }
    }

    pub fn profile(&self) -> &TargetProfile {
        self.profile
    }

    /// Map a declared type, in order:
    ///
    /// 1. entity references map to the entity reference type
    /// 2. primitives use the primitive table
    /// 3. date/time classes map to the temporal type
    /// 4. collections map their element type and wrap it in a list
    /// 5. `mixed` maps to the catch-all type
    /// 6. other built-ins are returned unchanged
    /// 7. class paths are reduced to their basename and mapped again
    ///
    /// `field` supplies the element type of collections; without it a
    /// collection is a list of the catch-all type.
    pub fn map_type(&self, declared: &str, field: Option<&FieldMetadata>) -> String {
        let declared = declared.trim();

        if self.namespaces.is_entity(declared) {
            return self.profile.entity_reference.to_string();
        }
        if let Some(primitive) = self.profile.primitive(declared) {
            return primitive.to_string();
        }
        if TEMPORAL_TYPES.contains(&basename(declared)) {
            return self.profile.temporal.to_string();
        }
        if declared == COLLECTION_MARKER {
            let element = field
                .and_then(|f| f.list_element_type.as_deref())
                .map(|element| self.map_type(element, None))
                .unwrap_or_else(|| self.profile.any.to_string());
            return self.list_of(&element);
        }
        if declared == ANY_MARKER {
            return self.profile.any.to_string();
        }

        let built_in = field
            .filter(|f| f.declared_type == declared)
            .map_or_else(|| is_built_in(declared), |f| f.is_built_in);
        if built_in {
            return declared.to_string();
        }

        let short = basename(declared);
        if short == declared {
            short.to_string()
        } else {
            self.map_type(short, None)
        }
    }

    /// Map a field's type, applying the nullable form when the field is nullable.
    pub fn map_field(&self, field: &FieldMetadata) -> String {
        let ty = self.map_type(&field.declared_type, Some(field));
        if field.is_nullable && ty != self.profile.any {
            (self.profile.nullable)(&ty)
        } else {
            ty
        }
    }

    fn list_of(&self, element: &str) -> String {
        if self.profile.nullable_elements && element != self.profile.any {
            (self.profile.list)(&(self.profile.nullable)(element))
        } else {
            (self.profile.list)(element)
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn ts_list(element: &str) -> String {
        format!("{}[]", element)
    }

    fn ts_nullable(ty: &str) -> String {
        format!("{} | null", ty)
    }

    fn dart_list(element: &str) -> String {
        format!("List<{}>", element)
    }

    fn dart_nullable(ty: &str) -> String {
        format!("{}?", ty)
    }

    const TS: TargetProfile = TargetProfile {
        primitives: &[
            ("string", "string"),
            ("int", "number"),
            ("float", "number"),
            ("bool", "boolean"),
        ],
        temporal: "Date",
        any: "any",
        entity_reference: "string",
        list: ts_list,
        nullable: ts_nullable,
        nullable_elements: false,
    };

    const DART: TargetProfile = TargetProfile {
        primitives: &[("string", "String"), ("int", "int"), ("float", "double")],
        temporal: "DateTime",
        any: "dynamic",
        entity_reference: "String",
        list: dart_list,
        nullable: dart_nullable,
        nullable_elements: true,
    };

    fn field(declared: &str, element: Option<&str>) -> FieldMetadata {
        FieldMetadata {
            name: "f".into(),
            declared_type: declared.into(),
            is_nullable: false,
            is_built_in: is_built_in(declared),
            default_value: None,
            list_element_type: element.map(String::from),
            description: None,
        }
    }

    #[test]
    fn test_primitives() {
        let ns = Namespaces::default();
        let mapper = TypeMapper::new(&TS, &ns);
        assert_eq!(mapper.map_type("string", None), "string");
        assert_eq!(mapper.map_type("int", None), "number");
        assert_eq!(mapper.map_type("bool", None), "boolean");
    }

    #[test]
    fn test_entity_reference_wins() {
        let ns = Namespaces::default();
        let mapper = TypeMapper::new(&TS, &ns);
        assert_eq!(mapper.map_type("App.Entity.Account", None), "string");
    }

    #[test]
    fn test_temporal_types() {
        let ns = Namespaces::default();
        let mapper = TypeMapper::new(&DART, &ns);
        assert_eq!(mapper.map_type("DateTime", None), "DateTime");
        assert_eq!(mapper.map_type("DateTimeImmutable", None), "DateTime");
        assert_eq!(mapper.map_type("Vendor.Time.DateTimeInterface", None), "DateTime");
    }

    #[test]
    fn test_collections() {
        let ns = Namespaces::default();
        let ts = TypeMapper::new(&TS, &ns);
        let dart = TypeMapper::new(&DART, &ns);

        let users = field("array", Some("App.DTO.User"));
        assert_eq!(ts.map_type("array", Some(&users)), "User[]");
        assert_eq!(dart.map_type("array", Some(&users)), "List<User?>");

        let tags = field("array", Some("string"));
        assert_eq!(ts.map_type("array", Some(&tags)), "string[]");
        assert_eq!(dart.map_type("array", Some(&tags)), "List<String?>");

        let accounts = field("array", Some("App.Entity.Account"));
        assert_eq!(ts.map_type("array", Some(&accounts)), "string[]");
        assert_eq!(dart.map_type("array", Some(&accounts)), "List<String?>");

        assert_eq!(ts.map_type("array", None), "any[]");
        assert_eq!(dart.map_type("array", None), "List<dynamic>");
    }

    #[test]
    fn test_any_and_unknown_built_ins() {
        let ns = Namespaces::default();
        let mapper = TypeMapper::new(&TS, &ns);
        assert_eq!(mapper.map_type("mixed", None), "any");
        assert_eq!(mapper.map_type("object", None), "object");
        assert_eq!(mapper.map_type("Money", None), "Money");
    }

    #[test]
    fn test_class_paths_reduce_to_basename() {
        let ns = Namespaces::default();
        let mapper = TypeMapper::new(&TS, &ns);
        assert_eq!(mapper.map_type("App.DTO.Billing.Address", None), "Address");
        assert_eq!(mapper.map_type("App\\DTO\\User", None), "User");
    }

    #[test]
    fn test_nullable_fields() {
        let ns = Namespaces::default();
        let ts = TypeMapper::new(&TS, &ns);
        let dart = TypeMapper::new(&DART, &ns);

        let mut email = field("string", None);
        email.is_nullable = true;
        assert_eq!(ts.map_field(&email), "string | null");
        assert_eq!(dart.map_field(&email), "String?");

        let mut anything = field("mixed", None);
        anything.is_nullable = true;
        assert_eq!(dart.map_field(&anything), "dynamic");
    }

    proptest! {
        #[test]
        fn prop_class_path_maps_like_its_basename(
            segments in prop::collection::vec("[A-Z][a-zA-Z]{0,8}", 1..4),
            name in "[A-Z][a-zA-Z]{0,10}",
        ) {
            prop_assume!(!TEMPORAL_TYPES.contains(&name.as_str()));
            let ns = Namespaces::default();
            let mapper = TypeMapper::new(&TS, &ns);
            let path = format!("App.DTO.{}.{}", segments.join("."), name);
            prop_assert_eq!(mapper.map_type(&path, None), mapper.map_type(&name, None));
        }

        #[test]
        fn prop_entities_always_map_to_reference(name in "[A-Z][a-zA-Z]{0,10}") {
            let ns = Namespaces::default();
            let mapper = TypeMapper::new(&DART, &ns);
            prop_assert_eq!(mapper.map_type(&format!("App.Entity.{}", name), None), "String");
        }
    }
}
