//! Check operation - manifest validation.

use std::path::Path;

use dtox_codegen::{Extractor, mapping::find_basename_collisions};
use dtox_ir::{Category, DtoClass};
use dtox_manifest::Manifest;

use crate::{error::CliError, reports::CheckReport};

/// Extract the metadata of every class in the manifest.
pub fn extract(manifest: &Manifest) -> Result<Vec<DtoClass>, CliError> {
    let extractor = Extractor::new(manifest.project.namespaces());
    Ok(extractor.extract(&manifest.dtos)?)
}

/// Execute the check operation.
///
/// Extracts every class, as an export would, and collects warnings.
pub fn check(manifest: &Manifest, config_path: &Path) -> Result<CheckReport, CliError> {
    let classes = extract(manifest)?;

    let warnings = find_basename_collisions(&classes)
        .into_iter()
        .map(|c| {
            format!(
                "{} and {} both export as '{}'",
                c.first, c.second, c.basename
            )
        })
        .collect();

    let count = |category: Category| classes.iter().filter(|c| c.category == category).count();

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        standard: count(Category::Standard),
        input: count(Category::Input),
        output: count(Category::Output),
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_check_counts_categories() {
        let manifest = Manifest::from_str(
            r#"
            [[dto]]
            path = "App.DTO.User"

            [[dto]]
            path = "App.DTO.Billing.Input.CreateInvoice"

            [[dto]]
            path = "App.DTO.Billing.Output.Invoice"

            [[dto]]
            path = "App.DTO.Shipping.Output.Invoice"
            "#,
        )
        .unwrap();

        let report = check(&manifest, Path::new("dto.toml")).unwrap();
        assert_eq!(report.standard, 1);
        assert_eq!(report.input, 1);
        assert_eq!(report.output, 2);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("'Invoice'"));
    }

    #[test]
    fn test_check_fails_on_union_field() {
        let manifest = Manifest::from_str(
            r#"
            [[dto]]
            path = "App.DTO.User"

            [[dto.fields]]
            name = "id"
            type = "int|string"
            "#,
        )
        .unwrap();

        let err = check(&manifest, Path::new("dto.toml")).unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("'id'"));
    }
}
