//! Class path to generated module path mapping.

use dtox_core::relative_module_path;
use dtox_ir::Namespaces;

/// Maps class paths to module paths of the generated files.
///
/// The root namespace is stripped and segments are joined with `/`. Only the
/// basename goes through the target's file naming; directory segments keep
/// their case.
#[derive(Debug, Clone, Copy)]
pub struct PathMapper<'a> {
    namespaces: &'a Namespaces,
    naming: fn(&str) -> String,
}

impl<'a> PathMapper<'a> {
    pub fn new(namespaces: &'a Namespaces, naming: fn(&str) -> String) -> Self {
        Self { namespaces, naming }
    }

    /// Module path segments of a class, with the basename renamed.
    pub fn module_segments(&self, class_path: &str) -> Vec<String> {
        let mut segments: Vec<String> = self
            .namespaces
            .strip_root(class_path)
            .into_iter()
            .map(String::from)
            .collect();
        if let Some(last) = segments.last_mut() {
            *last = (self.naming)(last);
        }
        segments
    }

    /// Module path of a class, without extension.
    ///
    /// ```
    /// use dtox_codegen::mapping::PathMapper;
    /// use dtox_core::to_snake_case;
    /// use dtox_ir::Namespaces;
    ///
    /// let ns = Namespaces::default();
    /// let paths = PathMapper::new(&ns, to_snake_case);
    /// assert_eq!(paths.map_path("App.DTO.Billing.Input.CreateInvoice"), "Billing/Input/create_invoice");
    /// ```
    pub fn map_path(&self, class_path: &str) -> String {
        self.module_segments(class_path).join("/")
    }

    /// Relative module specifier from the file of `from` to the file of `to`.
    pub fn relative_import(&self, from: &str, to: &str) -> String {
        let from = self.module_segments(from);
        let from_dir = &from[..from.len().saturating_sub(1)];
        relative_module_path(from_dir, &self.module_segments(to))
    }
}

#[cfg(test)]
mod tests {
    use dtox_core::{lowercase_first, to_snake_case};
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_map_path_standard() {
        let ns = Namespaces::default();
        let paths = PathMapper::new(&ns, lowercase_first);
        assert_eq!(paths.map_path("App.DTO.User"), "user");
        assert_eq!(paths.map_path("App\\DTO\\UserProfile"), "userProfile");
    }

    #[test]
    fn test_map_path_keeps_directories() {
        let ns = Namespaces::new("Domain", "Domain.Entity");
        let paths = PathMapper::new(&ns, lowercase_first);
        assert_eq!(
            paths.map_path("Domain.Billing.Input.CreateInvoice"),
            "Billing/Input/createInvoice"
        );
    }

    #[test]
    fn test_relative_import() {
        let ns = Namespaces::default();
        let paths = PathMapper::new(&ns, lowercase_first);

        assert_eq!(paths.relative_import("App.DTO.Team", "App.DTO.User"), "./user");
        assert_eq!(
            paths.relative_import("App.DTO.Billing.Input.CreateInvoiceInput", "App.DTO.User"),
            "../../user"
        );
        assert_eq!(
            paths.relative_import(
                "App.DTO.Billing.Output.InvoiceOutput",
                "App.DTO.Billing.Input.LineInput"
            ),
            "../Input/lineInput"
        );
    }

    proptest! {
        #[test]
        fn prop_map_path_strips_root_and_renames_basename(
            segments in prop::collection::vec("[A-Z][a-zA-Z]{0,8}", 1..5),
        ) {
            let ns = Namespaces::default();
            let paths = PathMapper::new(&ns, lowercase_first);
            let class_path = format!("App.DTO.{}", segments.join("."));
            let mapped = paths.map_path(&class_path);

            let mut expected = segments.clone();
            if let Some(last) = expected.last_mut() {
                *last = lowercase_first(last);
            }
            prop_assert_eq!(mapped, expected.join("/"));
        }

        #[test]
        fn prop_snake_case_map_path_keeps_segment_count(
            segments in prop::collection::vec("[A-Z][a-zA-Z]{0,8}", 1..5),
        ) {
            let ns = Namespaces::default();
            let paths = PathMapper::new(&ns, to_snake_case);
            let class_path = format!("App.DTO.{}", segments.join("."));
            let mapped = paths.map_path(&class_path);

            let parts: Vec<_> = mapped.split('/').collect();
            prop_assert_eq!(parts.len(), segments.len());
            let (file, dirs) = parts.split_last().unwrap();
            prop_assert_eq!(dirs, &segments[..segments.len() - 1]);
            let want = to_snake_case(&segments[segments.len() - 1]);
            prop_assert_eq!(*file, want.as_str());
        }
    }
}
