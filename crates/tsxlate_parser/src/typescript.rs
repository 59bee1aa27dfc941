//! TypeScript parser using tree-sitter (tree-sitter/tree-sitter-typescript).
//!
//! This parser converts tree-sitter's concrete syntax tree into a tsxlate
//! syntax tree. The conversion reshapes a few places where tree-sitter and
//! the TypeScript compiler disagree on structure, so visitors see the
//! compiler's shape:
//!
//! - statement sequences of a file or a `{ ... }` block are grouped in a
//!   [`SyntaxKind::SyntaxList`] node;
//! - the parentheses around an `if`/`while`/`do` condition belong to the
//!   statement, and the condition field holds the bare expression;
//! - comments are trivia and are dropped.

use tree_sitter::Node;
use tsxlate_ast::{AstArena, Span, SyntaxKind, SyntaxNode};

use crate::{ParseError, Parser};

/// Anonymous tokens that only delimit or separate other syntax.
const DELIMITERS: &[&str] = &["{", "}", "(", ")", "[", "]", ";", ","];

/// Statements whose `condition` field is a parenthesized expression.
const PARENTHESIZED_CONDITIONS: &[&str] = &["if_statement", "while_statement", "do_statement"];

/// TypeScript parser implementation.
///
/// JavaScript sources are accepted too, since the TypeScript grammar is a
/// superset of it.
pub struct TypeScriptParser;

impl TypeScriptParser {
    /// Creates a new TypeScript parser.
    pub fn new() -> Self {
        Self
    }

    /// Converts a tree-sitter node to a SyntaxNode.
    fn convert_node<'a>(
        &self,
        arena: &'a AstArena,
        node: Node<'_>,
        field: Option<&'static str>,
    ) -> SyntaxNode<'a> {
        let kind = classify(&node);
        let span = node_span(&node);

        let mut children = Vec::with_capacity(node.child_count());
        let mut cursor = node.walk();
        if cursor.goto_first_child() {
            loop {
                let child = cursor.node();
                if !child.is_extra() {
                    self.push_child(arena, &mut children, &node, child, cursor.field_name());
                }
                if !cursor.goto_next_sibling() {
                    break;
                }
            }
        }

        let children = match kind {
            SyntaxKind::SourceFile => vec![self.syntax_list(arena, &children, span.start)],
            SyntaxKind::Block => self.group_block(arena, children, span),
            _ => children,
        };

        let mut converted = SyntaxNode::new(kind, span, arena.alloc_slice_copy(&children));
        if let Some(field) = field {
            converted = converted.with_field(field);
        }
        if !node.is_named() {
            converted = converted.anonymous();
        }
        converted
    }

    /// Converts `child` and appends it, splicing a parenthesized condition
    /// into its parent statement.
    fn push_child<'a>(
        &self,
        arena: &'a AstArena,
        children: &mut Vec<SyntaxNode<'a>>,
        parent: &Node<'_>,
        child: Node<'_>,
        field: Option<&'static str>,
    ) {
        let lift = field == Some("condition")
            && child.kind() == "parenthesized_expression"
            && PARENTHESIZED_CONDITIONS.contains(&parent.kind());

        if !lift {
            children.push(self.convert_node(arena, child, field));
            return;
        }

        let mut condition_seen = false;
        let mut cursor = child.walk();
        for inner in child.children(&mut cursor) {
            if inner.is_extra() {
                continue;
            }
            let inner_field = if inner.is_named() && !condition_seen {
                condition_seen = true;
                Some("condition")
            } else {
                None
            };
            children.push(self.convert_node(arena, inner, inner_field));
        }
    }

    /// Keeps a block's braces and groups everything between them.
    fn group_block<'a>(
        &self,
        arena: &'a AstArena,
        children: Vec<SyntaxNode<'a>>,
        span: Span,
    ) -> Vec<SyntaxNode<'a>> {
        let open = usize::from(children.first().is_some_and(is_punctuation));
        let close = if children.len() > open && children.last().is_some_and(is_punctuation) {
            children.len() - 1
        } else {
            children.len()
        };
        let anchor = children[..open]
            .last()
            .map_or(span.start, |brace| brace.span.end);

        let mut grouped = Vec::with_capacity(open + 1 + children.len() - close);
        grouped.extend_from_slice(&children[..open]);
        grouped.push(self.syntax_list(arena, &children[open..close], anchor));
        grouped.extend_from_slice(&children[close..]);
        grouped
    }

    /// Creates a synthesized list node around `items`.
    fn syntax_list<'a>(
        &self,
        arena: &'a AstArena,
        items: &[SyntaxNode<'a>],
        anchor: u32,
    ) -> SyntaxNode<'a> {
        let span = match (items.first(), items.last()) {
            (Some(first), Some(last)) => first.span.merge(&last.span),
            _ => Span::empty_at(anchor),
        };
        SyntaxNode::new(SyntaxKind::SyntaxList, span, arena.alloc_slice_copy(items))
    }
}

impl Default for TypeScriptParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for TypeScriptParser {
    fn name(&self) -> &str {
        "typescript"
    }

    fn extensions(&self) -> &[&str] {
        &["ts", "mts", "cts", "js", "mjs", "cjs"]
    }

    fn parse<'a>(&self, arena: &'a AstArena, source: &str) -> Result<SyntaxNode<'a>, ParseError> {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into())
            .map_err(|e| ParseError::internal(format!("Failed to load grammar: {}", e)))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| ParseError::internal("tree-sitter returned no tree"))?;

        let root = tree.root_node();
        if let Some(error) = first_syntax_error(root) {
            return Err(syntax_error(error, source));
        }

        Ok(self.convert_node(arena, root, None))
    }
}

/// Maps a tree-sitter node kind to a SyntaxKind.
fn classify(node: &Node<'_>) -> SyntaxKind {
    let kind = node.kind();
    if !node.is_named() {
        return if DELIMITERS.contains(&kind) {
            SyntaxKind::Punctuation
        } else {
            SyntaxKind::Token
        };
    }

    match kind {
        "program" => SyntaxKind::SourceFile,
        "import_statement" | "import_alias" => SyntaxKind::ImportDeclaration,
        "string" => SyntaxKind::StringLiteral,
        "function_declaration" | "generator_function_declaration" => {
            SyntaxKind::FunctionDeclaration
        }
        "identifier"
        | "property_identifier"
        | "private_property_identifier"
        | "shorthand_property_identifier"
        | "shorthand_property_identifier_pattern"
        | "statement_identifier"
        | "type_identifier" => SyntaxKind::Identifier,
        "statement_block" => SyntaxKind::Block,
        "required_parameter" | "optional_parameter" => SyntaxKind::Parameter,
        "return_statement" => SyntaxKind::ReturnStatement,
        "binary_expression" | "assignment_expression" | "augmented_assignment_expression" => {
            SyntaxKind::BinaryExpression
        }
        "if_statement" => SyntaxKind::IfStatement,
        "member_expression" => SyntaxKind::PropertyAccessExpression,
        "call_expression" => SyntaxKind::CallExpression,
        "expression_statement" => SyntaxKind::ExpressionStatement,
        // Named leaves (number, true, this, string_fragment, ...) are tokens.
        _ if node.child_count() == 0 => SyntaxKind::Token,
        other => SyntaxKind::Other(other),
    }
}

fn is_punctuation(node: &SyntaxNode<'_>) -> bool {
    node.kind == SyntaxKind::Punctuation
}

/// Gets the span for a tree-sitter node.
fn node_span(node: &Node<'_>) -> Span {
    Span::new(node.start_byte() as u32, node.end_byte() as u32)
}

/// Finds the first `ERROR` or `MISSING` node in source order.
fn first_syntax_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    node.children(&mut cursor).find_map(first_syntax_error)
}

fn syntax_error(node: Node<'_>, source: &str) -> ParseError {
    let offset = node.start_byte();
    let message = if node.is_missing() {
        format!("missing `{}`", node.kind())
    } else {
        let near: String = source
            .get(offset..node.end_byte())
            .unwrap_or_default()
            .chars()
            .take(20)
            .collect();
        format!("syntax error near `{}`", near)
    };
    ParseError::invalid_source_at(message, offset)
}
