//! Visitor that renders the syntax tree itself.

use tsxlate_ast::SyntaxNode;

use crate::visitor::fallback;
use crate::{Context, OutputTree, TranslateError, Visitor};

/// Renders every node as unknown syntax.
///
/// The output is an indented dump of the tree: one `(<kind> <text>)` line per
/// node, children two spaces deeper than their parent. Useful for seeing
/// what a handler will be given.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopVisitor;

impl Visitor for NoopVisitor {
    fn import_declaration<'a>(
        &self,
        node: &SyntaxNode<'a>,
        ctx: &Context<'_, 'a>,
    ) -> Result<OutputTree, TranslateError> {
        fallback(node, ctx)
    }

    fn string_literal<'a>(
        &self,
        node: &SyntaxNode<'a>,
        ctx: &Context<'_, 'a>,
    ) -> Result<OutputTree, TranslateError> {
        fallback(node, ctx)
    }

    fn function_declaration<'a>(
        &self,
        node: &SyntaxNode<'a>,
        ctx: &Context<'_, 'a>,
    ) -> Result<OutputTree, TranslateError> {
        fallback(node, ctx)
    }

    fn identifier<'a>(
        &self,
        node: &SyntaxNode<'a>,
        ctx: &Context<'_, 'a>,
    ) -> Result<OutputTree, TranslateError> {
        fallback(node, ctx)
    }

    fn syntax_list<'a>(
        &self,
        node: &SyntaxNode<'a>,
        ctx: &Context<'_, 'a>,
    ) -> Result<OutputTree, TranslateError> {
        fallback(node, ctx)
    }

    fn block<'a>(
        &self,
        node: &SyntaxNode<'a>,
        ctx: &Context<'_, 'a>,
    ) -> Result<OutputTree, TranslateError> {
        fallback(node, ctx)
    }

    fn parameter<'a>(
        &self,
        node: &SyntaxNode<'a>,
        ctx: &Context<'_, 'a>,
    ) -> Result<OutputTree, TranslateError> {
        fallback(node, ctx)
    }

    fn return_statement<'a>(
        &self,
        node: &SyntaxNode<'a>,
        ctx: &Context<'_, 'a>,
    ) -> Result<OutputTree, TranslateError> {
        fallback(node, ctx)
    }

    fn binary_expression<'a>(
        &self,
        node: &SyntaxNode<'a>,
        ctx: &Context<'_, 'a>,
    ) -> Result<OutputTree, TranslateError> {
        fallback(node, ctx)
    }

    fn if_statement<'a>(
        &self,
        node: &SyntaxNode<'a>,
        ctx: &Context<'_, 'a>,
    ) -> Result<OutputTree, TranslateError> {
        fallback(node, ctx)
    }

    fn property_access_expression<'a>(
        &self,
        node: &SyntaxNode<'a>,
        ctx: &Context<'_, 'a>,
    ) -> Result<OutputTree, TranslateError> {
        fallback(node, ctx)
    }

    fn call_expression<'a>(
        &self,
        node: &SyntaxNode<'a>,
        ctx: &Context<'_, 'a>,
    ) -> Result<OutputTree, TranslateError> {
        fallback(node, ctx)
    }

    fn expression_statement<'a>(
        &self,
        node: &SyntaxNode<'a>,
        ctx: &Context<'_, 'a>,
    ) -> Result<OutputTree, TranslateError> {
        fallback(node, ctx)
    }

    fn token<'a>(
        &self,
        node: &SyntaxNode<'a>,
        ctx: &Context<'_, 'a>,
    ) -> Result<OutputTree, TranslateError> {
        fallback(node, ctx)
    }
}
