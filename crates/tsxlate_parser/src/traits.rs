//! The parser seam of the translator.

use tsxlate_ast::{AstArena, SyntaxNode};

use crate::ParseError;

/// Turns source text into a syntax tree rooted at a `SourceFile` node.
///
/// The translator only depends on this trait, so tests can hand it a fixed
/// tree instead of running a real grammar.
///
/// ```rust
/// use tsxlate_ast::{AstArena, SyntaxKind};
/// use tsxlate_parser::{Parser, TypeScriptParser};
///
/// let parser = TypeScriptParser::new();
/// assert!(parser.can_parse("MTS"));
///
/// let arena = AstArena::new();
/// let root = parser.parse(&arena, "let total = 1;").unwrap();
/// assert_eq!(root.kind, SyntaxKind::SourceFile);
/// ```
pub trait Parser {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// File extensions handled, without the leading dot.
    fn extensions(&self) -> &[&str];

    /// Parses `source` into nodes allocated in `arena`.
    ///
    /// Fails with [`ParseError::InvalidSource`] on the first syntax error.
    fn parse<'a>(&self, arena: &'a AstArena, source: &str) -> Result<SyntaxNode<'a>, ParseError>;

    /// Returns true if `extension` is one of [`Parser::extensions`],
    /// ignoring ASCII case.
    fn can_parse(&self, extension: &str) -> bool {
        self.extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}
