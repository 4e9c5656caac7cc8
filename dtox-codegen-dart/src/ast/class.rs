//! Dart class builder.

use dtox_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A field of a Dart class, initialized through a named constructor parameter.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: String,
    pub doc: Option<String>,
    /// Default value expression of the constructor parameter.
    pub default: Option<String>,
    pub nullable: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            doc: None,
            default: None,
            nullable: false,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn default_value(mut self, expr: impl Into<String>) -> Self {
        self.default = Some(expr.into());
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    fn parameter(&self) -> String {
        match (&self.default, self.nullable) {
            (Some(expr), _) => format!("this.{} = {},", self.name, expr),
            (None, true) => format!("this.{},", self.name),
            (None, false) => format!("required this.{},", self.name),
        }
    }
}

/// Builder for Dart data classes.
///
/// Immutable classes get `final` fields and a `const` constructor.
#[derive(Debug, Clone)]
pub struct Class {
    name: String,
    immutable: bool,
    fields: Vec<Field>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            immutable: false,
            fields: Vec::new(),
        }
    }

    pub fn immutable(mut self) -> Self {
        self.immutable = true;
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::dart();
        builder.emit(self);
        builder.build()
    }

    fn constructor(&self) -> CodeFragment {
        let keyword = if self.immutable { "const " } else { "" };
        CodeFragment::block(
            format!("{}{}({{", keyword, self.name),
            self.fields
                .iter()
                .map(|f| CodeFragment::line(f.parameter()))
                .collect(),
            Some("});".to_string()),
        )
    }
}

impl Renderable for Class {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.fields.is_empty() {
            return vec![CodeFragment::line(format!("class {} {{}}", self.name))];
        }

        let modifier = if self.immutable { "final " } else { "" };
        let mut body = Vec::new();
        for field in &self.fields {
            if let Some(doc) = &field.doc {
                body.push(CodeFragment::line_doc(doc.as_str()));
            }
            body.push(CodeFragment::line(format!(
                "{}{} {};",
                modifier, field.ty, field.name
            )));
        }
        body.push(CodeFragment::blank());
        body.push(self.constructor());

        vec![CodeFragment::block(
            format!("class {} {{", self.name),
            body,
            Some("}".to_string()),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_class() {
        assert_eq!(Class::new("Ping").immutable().build(), "class Ping {}\n");
    }

    #[test]
    fn test_immutable_class() {
        let code = Class::new("Point")
            .immutable()
            .field(Field::new("x", "int"))
            .field(Field::new("label", "String?").nullable().doc("Shown on hover"))
            .build();

        assert_eq!(
            code,
            "class Point {\n  final int x;\n  /// Shown on hover\n  final String? label;\n\n  const Point({\n    required this.x,\n    this.label,\n  });\n}\n"
        );
    }

    #[test]
    fn test_mutable_class_with_defaults() {
        let code = Class::new("Filter")
            .field(Field::new("page", "int").default_value("1"))
            .build();

        assert_eq!(
            code,
            "class Filter {\n  int page;\n\n  Filter({\n    this.page = 1,\n  });\n}\n"
        );
    }
}
