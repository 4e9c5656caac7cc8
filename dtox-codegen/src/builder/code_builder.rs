//! Code builder for generating properly indented source.

use super::{CodeFragment, Indent, Renderable};

/// Indentation-aware writer that AST nodes render into.
///
/// ```
/// use dtox_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::typescript();
/// builder
///     .push_line("export interface User {")
///     .push_indent()
///     .push_line("name: string;")
///     .push_dedent()
///     .push_line("}");
///
/// let code = builder.build();
/// assert_eq!(code, "export interface User {\n  name: string;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    pub fn dart() -> Self {
        Self::new(Indent::DART)
    }

    /// Add a line of code with current indentation.
    ///
    /// Empty lines are written without trailing indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        if !s.is_empty() {
            self.write_indent();
            self.buffer.push_str(s);
        }
        self.buffer.push('\n');
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a JSDoc comment. Multi-line text becomes a block comment.
    pub fn push_jsdoc(&mut self, text: &str) -> &mut Self {
        let lines: Vec<&str> = text.lines().collect();
        if lines.len() <= 1 {
            let line = format!("/** {} */", text.trim());
            return self.push_line(&line);
        }
        self.push_line("/**");
        for line in lines {
            let line = format!(" * {}", line.trim_end());
            self.push_line(line.trim_end());
        }
        self.push_line(" */")
    }

    /// Add a `///` doc comment, one per line of text.
    pub fn push_line_doc(&mut self, text: &str) -> &mut Self {
        for line in text.lines() {
            let line = format!("/// {}", line.trim_end());
            self.push_line(line.trim_end());
        }
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::JsDoc(text) => {
                self.push_jsdoc(&text);
            }
            CodeFragment::LineDoc(text) => {
                self.push_line_doc(&text);
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indentation() {
        let mut builder = CodeBuilder::typescript();
        builder
            .push_line("export class A {")
            .push_indent()
            .push_line("x = 1;")
            .push_dedent()
            .push_line("}");

        assert_eq!(builder.build(), "export class A {\n  x = 1;\n}\n");
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        let mut builder = CodeBuilder::dart();
        builder
            .push_indent()
            .push_line("a;")
            .push_line("")
            .push_blank()
            .push_line("b;");

        assert_eq!(builder.build(), "  a;\n\n\n  b;\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::dart();
        builder.push_dedent().push_dedent().push_line("x;");
        assert_eq!(builder.build(), "x;\n");
    }

    #[test]
    fn test_single_line_jsdoc() {
        let mut builder = CodeBuilder::typescript();
        builder.push_jsdoc("The user name");
        assert_eq!(builder.build(), "/** The user name */\n");
    }

    #[test]
    fn test_multi_line_jsdoc() {
        let mut builder = CodeBuilder::typescript();
        builder.push_indent().push_jsdoc("First line\n\nThird line");
        assert_eq!(
            builder.build(),
            "  /**\n   * First line\n   *\n   * Third line\n   */\n"
        );
    }

    #[test]
    fn test_line_doc() {
        let mut builder = CodeBuilder::dart();
        builder.push_line_doc("One\nTwo");
        assert_eq!(builder.build(), "/// One\n/// Two\n");
    }

    #[test]
    fn test_emit_block_fragment() {
        struct BlockNode;
        impl Renderable for BlockNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::jsdoc("A user"),
                    CodeFragment::block(
                        "export interface User {",
                        vec![CodeFragment::line("name: string;")],
                        Some("}".to_string()),
                    ),
                ]
            }
        }

        let mut builder = CodeBuilder::typescript();
        builder.emit(&BlockNode);
        assert_eq!(
            builder.build(),
            "/** A user */\nexport interface User {\n  name: string;\n}\n"
        );
    }

    #[test]
    fn test_emit_nested_blocks() {
        let mut builder = CodeBuilder::dart();
        builder.apply_fragment(CodeFragment::block(
            "class A {",
            vec![
                CodeFragment::block("const A({", vec![], Some("});".into())),
                CodeFragment::blank(),
                CodeFragment::line_doc("Name"),
            ],
            Some("}".into()),
        ));
        assert_eq!(
            builder.build(),
            "class A {\n  const A({\n  });\n\n  /// Name\n}\n"
        );
    }
}
