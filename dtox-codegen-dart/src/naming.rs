//! Dart naming conventions.

/// Words that cannot name a Dart field.
pub const DART_RESERVED: &[&str] = &[
    "assert", "break", "case", "catch", "class", "const", "continue", "default", "do", "else",
    "enum", "extends", "false", "final", "finally", "for", "if", "in", "is", "new", "null",
    "rethrow", "return", "super", "switch", "this", "throw", "true", "try", "var", "void",
    "while", "with",
];

/// Field name safe to use in Dart, suffixing reserved words with `_`.
pub fn field_name(name: &str) -> String {
    if DART_RESERVED.contains(&name) {
        format!("{}_", name)
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use dtox_core::to_snake_case;

    use super::*;

    #[test]
    fn test_field_name() {
        assert_eq!(field_name("amount"), "amount");
        assert_eq!(field_name("default"), "default_");
        assert_eq!(field_name("class"), "class_");
    }

    #[test]
    fn test_file_names_are_snake_case() {
        assert_eq!(to_snake_case("CreateInvoice"), "create_invoice");
        assert_eq!(to_snake_case("HTTPRequestInput"), "http_request_input");
    }
}
