//! List command report data structures.

use dtox_ir::{DtoClass, FieldMetadata};

use super::output::{Output, Report};

/// Extracted metadata of every class.
#[derive(Debug)]
pub struct ListReport {
    pub classes: Vec<DtoClass>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.classes.is_empty() {
            out.preformatted("No DTOs defined");
            return;
        }

        for (index, class) in self.classes.iter().enumerate() {
            if index > 0 {
                out.newline();
            }
            let location = match class.subdirectory() {
                Some(dir) => format!("{}, {}", class.category, dir),
                None => class.category.to_string(),
            };
            out.section(&format!("{} ({})", class.class_path, location));
            for field in class.fields.values() {
                out.list_item(&describe(field));
            }
        }
    }
}

fn describe(field: &FieldMetadata) -> String {
    let mut ty = match &field.list_element_type {
        Some(element) => format!("{}<{}>", field.declared_type, element),
        None => field.declared_type.clone(),
    };
    if field.is_nullable {
        ty.insert(0, '?');
    }
    if field.has_default_value() {
        ty.push_str(" (default)");
    }
    format!("{}: {}", field.name, ty)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use dtox_codegen::Extractor;
    use dtox_manifest::Manifest;

    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render_classes() {
        let manifest = Manifest::from_str(
            r#"
            [[dto]]
            path = "App.DTO.User"

            [[dto.fields]]
            name = "email"
            type = "?string"

            [[dto]]
            path = "App.DTO.Team.Input.CreateTeam"

            [[dto.fields]]
            name = "members"
            type = "array"
            list_of = "App.DTO.User"
            default = []
            "#,
        )
        .unwrap();
        let classes = Extractor::new(manifest.project.namespaces())
            .extract(&manifest.dtos)
            .unwrap();

        let mut out = BufferOutput::default();
        ListReport { classes }.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "App.DTO.User (standard):",
                "- email: ?string",
                "",
                "App.DTO.Team.Input.CreateTeam (input, Team/Input):",
                "- members: array<App.DTO.User> (default)",
            ]
        );
    }

    #[test]
    fn test_render_empty() {
        let mut out = BufferOutput::default();
        ListReport { classes: vec![] }.render(&mut out);
        assert_eq!(out.lines, vec!["No DTOs defined"]);
    }
}
