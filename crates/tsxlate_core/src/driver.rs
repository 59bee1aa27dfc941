//! Traversal driver: dispatches syntax nodes to visitor handlers.

use std::fs;
use std::path::Path;

use tracing::debug;
use tsxlate_ast::{AstArena, SourceFile, SyntaxKind, SyntaxNode};
use tsxlate_parser::Parser;

use crate::visitor::fallback;
use crate::{Context, OutputTree, TranslateError, Visitor};

/// Reads, parses and translates the file at `path`.
///
/// # Errors
///
/// Fails with [`TranslateError::Io`] if the file cannot be read, and
/// otherwise as [`translate_source`] does.
pub fn translate(
    parser: &dyn Parser,
    path: impl AsRef<Path>,
    visitor: &dyn Visitor,
) -> Result<OutputTree, TranslateError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| TranslateError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    translate_source(parser, &SourceFile::new(path, text), visitor)
}

/// Parses and translates an in-memory source file.
///
/// # Errors
///
/// - [`TranslateError::Parse`] if the source has syntax errors
/// - [`TranslateError::RootNotFound`] if the parser's root is not a source file
/// - any error raised by a handler
pub fn translate_source(
    parser: &dyn Parser,
    source: &SourceFile,
    visitor: &dyn Visitor,
) -> Result<OutputTree, TranslateError> {
    debug!(
        "Translating {} with the {} parser",
        source.path().display(),
        parser.name()
    );

    let arena = AstArena::for_source(source.text().len());
    let root = parser.parse(&arena, source.text())?;
    if root.kind != SyntaxKind::SourceFile {
        return Err(TranslateError::RootNotFound {
            path: source.path().to_path_buf(),
        });
    }

    let output = visit(source, &root, visitor)?;
    debug!(
        "Translated {} ({} unknown syntax nodes)",
        source.path().display(),
        output.unknown_count()
    );
    Ok(output)
}

/// Translates `node` and its descendants with `visitor`.
///
/// Source files render as their children. Statement lists go to
/// [`Visitor::syntax_list`], punctuation renders as its (usually empty)
/// children without a handler call, and every meaningful kind goes to its
/// handler. Anything else is rendered by [`fallback`].
pub fn visit<'a>(
    source: &SourceFile,
    node: &SyntaxNode<'a>,
    visitor: &dyn Visitor,
) -> Result<OutputTree, TranslateError> {
    let ctx = Context::new(source, node, visitor);

    match node.kind {
        SyntaxKind::SourceFile => Ok(OutputTree::new("", ctx.all()?)),
        SyntaxKind::SyntaxList => visitor.syntax_list(node, &ctx),
        SyntaxKind::Punctuation => ctx.nodes(node.children),
        SyntaxKind::ImportDeclaration => visitor.import_declaration(node, &ctx),
        SyntaxKind::StringLiteral => visitor.string_literal(node, &ctx),
        SyntaxKind::FunctionDeclaration => visitor.function_declaration(node, &ctx),
        SyntaxKind::Identifier => visitor.identifier(node, &ctx),
        SyntaxKind::Block => visitor.block(node, &ctx),
        SyntaxKind::Parameter => visitor.parameter(node, &ctx),
        SyntaxKind::ReturnStatement => visitor.return_statement(node, &ctx),
        SyntaxKind::BinaryExpression => visitor.binary_expression(node, &ctx),
        SyntaxKind::IfStatement => visitor.if_statement(node, &ctx),
        SyntaxKind::PropertyAccessExpression => visitor.property_access_expression(node, &ctx),
        SyntaxKind::CallExpression => visitor.call_expression(node, &ctx),
        SyntaxKind::ExpressionStatement => visitor.expression_statement(node, &ctx),
        SyntaxKind::Token => visitor.token(node, &ctx),
        SyntaxKind::Other(_) => fallback(node, &ctx),
    }
}
