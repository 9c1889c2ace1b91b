//! Builders for Dart source text.

/// One indentation level in generated Dart code.
pub const INDENT: &str = "  ";

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use strata_codegen::CodeBuilder;
///
/// let code = CodeBuilder::new()
///     .block_with_close("void main() {", "}", |b| b.line("print('hi');"))
///     .build();
///
/// assert_eq!(code, "void main() {\n  print('hi');\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add several lines at the current indentation, keeping their
    /// relative indentation. Empty lines stay empty.
    pub fn lines(mut self, text: &str) -> Self {
        for line in text.lines() {
            if line.trim().is_empty() {
                self.buffer.push('\n');
            } else {
                self.write_indent();
                self.buffer.push_str(line);
                self.buffer.push('\n');
            }
        }
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a block with a closing line.
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// `header {` ... `}`
    pub fn block<F>(self, header: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        self.block_with_close(&format!("{} {{", header), "}", f)
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }
}

/// A Dart import directive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Import {
    uri: String,
    alias: Option<String>,
}

impl Import {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            alias: None,
        }
    }

    /// `package:<uri>`
    pub fn package(uri: &str) -> Self {
        Self::new(format!("package:{}", uri))
    }

    /// `dart:<library>`
    pub fn dart(library: &str) -> Self {
        Self::new(format!("dart:{}", library))
    }

    /// Import with a prefix (`import '...' as alias;`).
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// 0 for `dart:`, 1 for `package:`, 2 for relative imports.
    fn group(&self) -> u8 {
        if self.uri.starts_with("dart:") {
            0
        } else if self.uri.starts_with("package:") {
            1
        } else {
            2
        }
    }

    fn render(&self) -> String {
        match &self.alias {
            Some(alias) => format!("import '{}' as {};", self.uri, alias),
            None => format!("import '{}';", self.uri),
        }
    }
}

/// A Dart library: imports, `part` directives and body sections.
///
/// Imports are de-duplicated and grouped as `dart:`, `package:`, then
/// relative, each group sorted and separated by a blank line.
#[derive(Debug, Default)]
pub struct DartFile {
    imports: Vec<Import>,
    parts: Vec<String>,
    body: Vec<String>,
}

impl DartFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn import(mut self, import: Import) -> Self {
        if !self.imports.contains(&import) {
            self.imports.push(import);
        }
        self
    }

    pub fn imports(self, imports: impl IntoIterator<Item = Import>) -> Self {
        imports.into_iter().fold(self, DartFile::import)
    }

    /// Add an import only when `condition` holds.
    pub fn import_if(self, condition: bool, import: Import) -> Self {
        if condition { self.import(import) } else { self }
    }

    /// `part '<file>';`
    pub fn part(mut self, file: impl Into<String>) -> Self {
        self.parts.push(file.into());
        self
    }

    /// Add a body section, separated from the previous one by a blank line.
    #[allow(clippy::should_implement_trait)]
    pub fn add(mut self, section: impl Into<String>) -> Self {
        let section = section.into();
        if !section.trim().is_empty() {
            self.body.push(section);
        }
        self
    }

    pub fn render(&self) -> String {
        let mut sections: Vec<String> = Vec::new();

        let mut imports = self.imports.clone();
        imports.sort_by(|a, b| (a.group(), &a.uri).cmp(&(b.group(), &b.uri)));
        let mut groups: Vec<(u8, Vec<String>)> = Vec::new();
        for import in &imports {
            match groups.last_mut() {
                Some((group, lines)) if *group == import.group() => lines.push(import.render()),
                _ => groups.push((import.group(), vec![import.render()])),
            }
        }
        sections.extend(groups.into_iter().map(|(_, lines)| lines.join("\n")));

        if !self.parts.is_empty() {
            sections.push(
                self.parts
                    .iter()
                    .map(|p| format!("part '{}';", p))
                    .collect::<Vec<_>>()
                    .join("\n"),
            );
        }

        sections.extend(self.body.iter().map(|s| s.trim_end().to_string()));

        let mut out = sections.join("\n\n");
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::new().line("final x = 1;").build();
        assert_eq!(code, "final x = 1;\n");
    }

    #[test]
    fn test_block_indents_two_spaces() {
        let code = CodeBuilder::new()
            .block("class Foo", |b| b.line("const Foo();"))
            .build();
        assert_eq!(code, "class Foo {\n  const Foo();\n}\n");
    }

    #[test]
    fn test_lines_keep_relative_indent() {
        let code = CodeBuilder::new()
            .indent()
            .lines("a(\n  b,\n\n)")
            .build();
        assert_eq!(code, "  a(\n    b,\n\n  )\n");
    }

    #[test]
    fn test_when_and_each() {
        let code = CodeBuilder::new()
            .when(false, |b| b.line("skipped"))
            .each(["a", "b"], |b, s| b.line(s))
            .build();
        assert_eq!(code, "a\nb\n");
    }

    #[test]
    fn test_import_groups() {
        let file = DartFile::new()
            .import(Import::new("../entities/item_entity.dart"))
            .import(Import::package("flutter/material.dart"))
            .import(Import::dart("convert"))
            .import(Import::package("dartz/dartz.dart"))
            .import(Import::package("flutter/material.dart"))
            .add("class A {}");

        assert_eq!(
            file.render(),
            "import 'dart:convert';\n\n\
             import 'package:dartz/dartz.dart';\n\
             import 'package:flutter/material.dart';\n\n\
             import '../entities/item_entity.dart';\n\n\
             class A {}\n"
        );
    }

    #[test]
    fn test_alias_and_parts() {
        let file = DartFile::new()
            .import(Import::package("http/http.dart").alias("http"))
            .part("item.g.dart")
            .add("class A {}\n\n");

        assert_eq!(
            file.render(),
            "import 'package:http/http.dart' as http;\n\npart 'item.g.dart';\n\nclass A {}\n"
        );
    }
}
