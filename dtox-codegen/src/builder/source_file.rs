//! Composition of a generated file: header, imports and body.

use super::{CodeBuilder, CodeFragment, Indent, Renderable};

/// Text of the header placed at the top of every generated file.
pub const GENERATED_HEADER: &str = "Generated by dtox. Do not edit by hand.";

/// A generated source file.
///
/// Sections are separated by a single blank line; empty sections are skipped.
#[derive(Debug, Clone)]
pub struct SourceFile {
    indent: Indent,
    header: Vec<String>,
    imports: Vec<String>,
    body: Vec<CodeFragment>,
}

impl SourceFile {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent,
            header: Vec::new(),
            imports: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Add a header comment line, written as `// <text>`.
    pub fn header(mut self, text: &str) -> Self {
        self.header.push(format!("// {}", text));
        self
    }

    /// Add an import line. Duplicates are ignored.
    pub fn import(mut self, line: impl Into<String>) -> Self {
        let line = line.into();
        if !self.imports.contains(&line) {
            self.imports.push(line);
        }
        self
    }

    /// Append a node to the body.
    pub fn push(mut self, node: impl Renderable) -> Self {
        self.body.extend(node.to_fragments());
        self
    }

    pub fn has_imports(&self) -> bool {
        !self.imports.is_empty()
    }

    pub fn render(self) -> String {
        let mut builder = CodeBuilder::new(self.indent);
        let sections = [
            self.header
                .into_iter()
                .map(CodeFragment::Line)
                .collect::<Vec<_>>(),
            self.imports
                .into_iter()
                .map(CodeFragment::Line)
                .collect::<Vec<_>>(),
            self.body,
        ];

        let mut first = true;
        for section in sections.into_iter().filter(|s| !s.is_empty()) {
            if !first {
                builder.push_blank();
            }
            first = false;
            for fragment in section {
                builder.apply_fragment(fragment);
            }
        }
        builder.build()
    }
}
