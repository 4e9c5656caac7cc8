//! Export targets and the registry that dispatches to them.

use dtox_ir::Namespaces;

use crate::{
    Error, Result,
    mapping::{PathMapper, TargetProfile, TypeMapper},
    render::TemplateSet,
};

/// A language the exporter can generate.
#[derive(Debug)]
pub struct ExportTarget {
    /// Canonical name, as accepted by `--type`.
    pub name: &'static str,
    /// Other accepted names.
    pub aliases: &'static [&'static str],
    /// Extension of generated files, without the dot.
    pub extension: &'static str,
    /// Whether rendering needs a project name.
    pub requires_project_name: bool,
    pub profile: TargetProfile,
    /// Basename to file stem (e.g., "CreateInvoice" -> "create_invoice").
    pub file_naming: fn(&str) -> String,
    pub templates: TemplateSet,
}

impl ExportTarget {
    /// Check a name against the canonical name and aliases, ignoring case.
    pub fn matches(&self, name: &str) -> bool {
        let name = name.trim();
        self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }

    pub fn type_mapper<'a>(&'a self, namespaces: &'a Namespaces) -> TypeMapper<'a> {
        TypeMapper::new(&self.profile, namespaces)
    }

    pub fn path_mapper<'a>(&self, namespaces: &'a Namespaces) -> PathMapper<'a> {
        PathMapper::new(namespaces, self.file_naming)
    }

    /// File name for a class basename, with extension.
    pub fn file_name(&self, object_name: &str) -> String {
        format!("{}.{}", (self.file_naming)(object_name), self.extension)
    }
}

/// Dispatch table of export targets, in registration order.
#[derive(Debug, Default)]
pub struct TargetRegistry {
    targets: Vec<ExportTarget>,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a target. A target with the same name replaces the earlier one.
    pub fn with(mut self, target: ExportTarget) -> Self {
        self.register(target);
        self
    }

    pub fn register(&mut self, target: ExportTarget) {
        match self.targets.iter_mut().find(|t| t.name == target.name) {
            Some(existing) => *existing = target,
            None => self.targets.push(target),
        }
    }

    /// Resolve a target by name or alias, ignoring case.
    pub fn get(&self, name: &str) -> Result<&ExportTarget> {
        self.targets
            .iter()
            .find(|t| t.matches(name))
            .ok_or_else(|| Error::UnsupportedExportType {
                name: name.to_string(),
                available: self.names().join(", "),
            })
    }

    /// Canonical names of all targets.
    pub fn names(&self) -> Vec<&'static str> {
        self.targets.iter().map(|t| t.name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExportTarget> {
        self.targets.iter()
    }
}

#[cfg(test)]
mod tests {
    use dtox_core::lowercase_first;

    use super::*;
    use crate::testing::TEST_PROFILE;

    fn target(name: &'static str, aliases: &'static [&'static str]) -> ExportTarget {
        ExportTarget {
            name,
            aliases,
            extension: "ts",
            requires_project_name: false,
            profile: TEST_PROFILE,
            file_naming: lowercase_first,
            templates: TemplateSet::new("ts", "ts"),
        }
    }

    #[test]
    fn test_lookup_by_name_and_alias() {
        let registry = TargetRegistry::new()
            .with(target("typescript", &["ts"]))
            .with(target("dart", &[]));

        assert_eq!(registry.get("typescript").unwrap().name, "typescript");
        assert_eq!(registry.get("TS").unwrap().name, "typescript");
        assert_eq!(registry.get(" Dart ").unwrap().name, "dart");
        assert_eq!(registry.names(), vec!["typescript", "dart"]);
    }

    #[test]
    fn test_unknown_target_lists_available() {
        let registry = TargetRegistry::new()
            .with(target("typescript", &["ts"]))
            .with(target("dart", &[]));

        match registry.get("kotlin").unwrap_err() {
            Error::UnsupportedExportType { name, available } => {
                assert_eq!(name, "kotlin");
                assert_eq!(available, "typescript, dart");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut registry = TargetRegistry::new().with(target("dart", &[]));
        registry.register(target("dart", &["flutter"]));

        assert_eq!(registry.iter().count(), 1);
        assert!(registry.get("flutter").is_ok());
    }

    #[test]
    fn test_file_name() {
        let t = target("typescript", &[]);
        assert_eq!(t.file_name("CreateInvoice"), "createInvoice.ts");
    }
}
