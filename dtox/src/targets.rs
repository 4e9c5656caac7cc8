//! The export targets this binary ships with.

use dtox_codegen::TargetRegistry;

/// Export type used when neither `--type` nor `[project] target` is set.
pub const DEFAULT_EXPORT_TYPE: &str = "dart";

/// Build the dispatch table of every supported export type.
pub fn registry() -> TargetRegistry {
    TargetRegistry::new()
        .with(dtox_codegen_dart::target())
        .with(dtox_codegen_typescript::target())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_resolves_builtin_targets() {
        let registry = registry();
        assert_eq!(registry.names(), vec!["dart", "typescript"]);
        assert!(registry.get(DEFAULT_EXPORT_TYPE).is_ok());
        assert_eq!(registry.get("ts").unwrap().name, "typescript");
        assert!(registry.get("dart").unwrap().requires_project_name);
        assert!(!registry.get("typescript").unwrap().requires_project_name);
    }
}
