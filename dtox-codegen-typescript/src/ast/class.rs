//! TypeScript class builder.

use dtox_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A property of a TypeScript class.
#[derive(Debug, Clone)]
pub struct ClassField {
    pub name: String,
    pub ty: String,
    /// Initializer expression, e.g. `null` or `"EUR"`.
    pub initializer: Option<String>,
    pub doc: Option<String>,
}

impl ClassField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            initializer: None,
            doc: None,
        }
    }

    pub fn initializer(mut self, expr: impl Into<String>) -> Self {
        self.initializer = Some(expr.into());
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Properties without initializer use a definite assignment (`name!: T`).
    fn declaration(&self) -> String {
        match &self.initializer {
            Some(expr) => format!("{}: {} = {};", self.name, self.ty, expr),
            None => format!("{}!: {};", self.name, self.ty),
        }
    }
}

/// Builder for exported TypeScript classes holding plain properties.
#[derive(Debug, Clone)]
pub struct Class {
    name: String,
    fields: Vec<ClassField>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: ClassField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Class {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.fields.is_empty() {
            return vec![CodeFragment::line(format!("export class {} {{}}", self.name))];
        }

        let body = self
            .fields
            .iter()
            .flat_map(|field| {
                let mut fragments = Vec::with_capacity(2);
                if let Some(doc) = &field.doc {
                    fragments.push(CodeFragment::jsdoc(doc.as_str()));
                }
                fragments.push(CodeFragment::line(field.declaration()));
                fragments
            })
            .collect();

        vec![CodeFragment::block(
            format!("export class {} {{", self.name),
            body,
            Some("}".to_string()),
        )]
    }
}
