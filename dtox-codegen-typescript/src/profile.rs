//! TypeScript type tables.

use dtox_codegen::mapping::TargetProfile;

fn list(element: &str) -> String {
    format!("{}[]", element)
}

fn nullable(ty: &str) -> String {
    format!("{} | null", ty)
}

/// TypeScript type profile.
pub const TS_PROFILE: TargetProfile = TargetProfile {
    primitives: &[
        ("string", "string"),
        ("int", "number"),
        ("integer", "number"),
        ("float", "number"),
        ("double", "number"),
        ("bool", "boolean"),
        ("boolean", "boolean"),
    ],
    temporal: "Date",
    any: "any",
    entity_reference: "string",
    list,
    nullable,
    nullable_elements: false,
};
