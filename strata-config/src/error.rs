use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for configuration operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source content and filename for error reporting.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error, pointing at the line/column serde_json reports.
    pub fn parse_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = span_at(&self.src, source.line(), source.column());
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }
}

/// Convert a 1-based line/column pair into a byte span of the source.
///
/// serde_json reports line 0 when the error has no position.
pub(crate) fn span_at(src: &str, line: usize, column: usize) -> Option<SourceSpan> {
    if line == 0 {
        return None;
    }

    let mut offset = 0;
    for (i, text) in src.split_inclusive('\n').enumerate() {
        if i + 1 == line {
            let column = column.saturating_sub(1).min(text.len());
            let start = (offset + column).min(src.len());
            let len = usize::from(start < src.len());
            return Some(SourceSpan::from((start, len)));
        }
        offset += text.len();
    }

    Some(SourceSpan::from((src.len(), 0)))
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(strata::io),
        help("run 'strata init <name>' to create a new project")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}'")]
    #[diagnostic(code(strata::io))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse strata.json")]
    #[diagnostic(
        code(strata::parse_error),
        help("fix the JSON or delete the file and run 'strata setup' again")
    )]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize configuration")]
    #[diagnostic(code(strata::serialize_error))]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_at_first_line() {
        let span = span_at("{ x }", 1, 3).unwrap();
        assert_eq!(span.offset(), 2);
        assert_eq!(span.len(), 1);
    }

    #[test]
    fn test_span_at_later_line() {
        let src = "{\n  \"org\": ,\n}";
        let span = span_at(src, 2, 10).unwrap();
        assert_eq!(&src[span.offset()..span.offset() + 1], ",");
    }

    #[test]
    fn test_span_at_without_position() {
        assert!(span_at("{}", 0, 0).is_none());
    }

    #[test]
    fn test_span_at_end_of_input() {
        let span = span_at("{", 1, 1).unwrap();
        assert_eq!(span.offset(), 0);
        let span = span_at("{", 3, 1).unwrap();
        assert_eq!(span.offset(), 1);
        assert_eq!(span.len(), 0);
    }
}
