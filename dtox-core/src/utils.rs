//! Shared utility functions for code generation.

/// Characters accepted as namespace separators in source class paths.
pub const PATH_SEPARATORS: [char; 3] = ['.', '/', '\\'];

/// Split a class path into its non-empty segments (e.g., "App.DTO.User" -> ["App", "DTO", "User"])
pub fn split_path(path: &str) -> Vec<&str> {
    path.split(PATH_SEPARATORS)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Last segment of a class path (e.g., "App\\DTO\\User" -> "User")
pub fn basename(path: &str) -> &str {
    split_path(path).last().copied().unwrap_or(path)
}

/// Lowercase the first character (e.g., "CreateInvoice" -> "createInvoice")
pub fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a string to snake_case (e.g., "HTTPRequest" -> "http_request")
///
/// A run of capitals is treated as one word, its last capital starting the
/// next word when followed by a lowercase letter.
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '-' || c == ' ' || c == '_' {
            if !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
            continue;
        }

        if c.is_uppercase() && i > 0 && !result.ends_with('_') {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                result.push('_');
            }
        }

        result.extend(c.to_lowercase());
    }

    result
}

/// Relative module specifier from a directory to a module path, both given as segments.
///
/// ```
/// use dtox_core::relative_module_path;
///
/// assert_eq!(relative_module_path(&["Billing", "Input"], &["user"]), "../../user");
/// assert_eq!(relative_module_path(&["Billing"], &["Billing", "Input", "line"]), "./Input/line");
/// ```
pub fn relative_module_path<S: AsRef<str>, T: AsRef<str>>(from_dir: &[S], to: &[T]) -> String {
    let common = from_dir
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a.as_ref() == b.as_ref())
        .count();

    let ups = from_dir.len() - common;
    let rest = to[common..]
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("/");

    if ups == 0 {
        format!("./{}", rest)
    } else {
        format!("{}{}", "../".repeat(ups), rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_path() {
        assert_eq!(split_path("App.DTO.User"), vec!["App", "DTO", "User"]);
        assert_eq!(split_path("App\\DTO\\User"), vec!["App", "DTO", "User"]);
        assert_eq!(split_path("App/DTO/User"), vec!["App", "DTO", "User"]);
        assert_eq!(split_path("App\\\\DTO"), vec!["App", "DTO"]);
        assert!(split_path("").is_empty());
    }

    #[test]
    fn test_basename() {
        assert_eq!(basename("Domain.Billing.Input.CreateInvoice"), "CreateInvoice");
        assert_eq!(basename("App\\Entity\\User"), "User");
        assert_eq!(basename("User"), "User");
        assert_eq!(basename(""), "");
    }

    #[test]
    fn test_lowercase_first() {
        assert_eq!(lowercase_first("CreateInvoice"), "createInvoice");
        assert_eq!(lowercase_first("user"), "user");
        assert_eq!(lowercase_first(""), "");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("User"), "user");
        assert_eq!(to_snake_case("CreateInvoice"), "create_invoice");
        assert_eq!(to_snake_case("HTTPRequest"), "http_request");
        assert_eq!(to_snake_case("UserV2"), "user_v2");
        assert_eq!(to_snake_case("hello-world"), "hello_world");
        assert_eq!(to_snake_case("already_snake"), "already_snake");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_relative_module_path() {
        assert_eq!(relative_module_path::<&str, &str>(&[], &["user"]), "./user");
        assert_eq!(
            relative_module_path(&["Billing", "Input"], &["Billing", "Input", "line"]),
            "./line"
        );
        assert_eq!(
            relative_module_path(&["Billing", "Input"], &["Billing", "Output", "invoice"]),
            "../Output/invoice"
        );
    }
}
