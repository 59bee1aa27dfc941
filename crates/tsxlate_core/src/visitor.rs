//! Visitor trait: one handler per meaningful syntax kind.

use tracing::trace;
use tsxlate_ast::{SyntaxKind, SyntaxNode};

use crate::error::RequiredField;
use crate::literal::string_value;
use crate::{Context, OutputTree, TranslateError};

/// Renders a node the translator has no handler for.
///
/// The result is marked as unknown syntax. It starts with `(<kind> <text>)`,
/// where `<text>` is the node's raw source text, kept byte for byte. The
/// node's translated children follow on the next lines, indented by 2.
///
/// This never fails by itself; errors only come from translating children.
pub fn fallback<'a>(
    node: &SyntaxNode<'a>,
    ctx: &Context<'_, 'a>,
) -> Result<OutputTree, TranslateError> {
    trace!(kind = %node.kind, start = node.span.start, "Rendering unknown syntax");

    let mut parts = vec![
        OutputTree::verbatim(ctx.text_of(node)),
        OutputTree::text(")\n"),
    ];
    parts.extend(ctx.all()?);

    Ok(OutputTree::unknown(format!("({} ", node.kind), parts).with_indent(2))
}

/// Handlers for translating a syntax tree into a target notation.
///
/// Every handler has a default rendering, so an implementation only
/// overrides the kinds its notation renders differently. Handlers get the
/// node and a [`Context`] for translating its children. Kinds without a
/// handler go through [`fallback`].
///
/// Implementations are stateless: the same visitor may translate any number
/// of files.
///
/// # Example
///
/// ```rust,ignore
/// use tsxlate_core::{Context, OutputTree, TranslateError, Visitor};
/// use tsxlate_ast::SyntaxNode;
///
/// struct Shouting;
///
/// impl Visitor for Shouting {
///     fn identifier<'a>(
///         &self,
///         node: &SyntaxNode<'a>,
///         ctx: &Context<'_, 'a>,
///     ) -> Result<OutputTree, TranslateError> {
///         Ok(OutputTree::text(ctx.text_of(node).to_uppercase()))
///     }
/// }
/// ```
pub trait Visitor {
    /// `import ... from "..."` and `import x = require("...")`.
    fn import_declaration<'a>(
        &self,
        node: &SyntaxNode<'a>,
        ctx: &Context<'_, 'a>,
    ) -> Result<OutputTree, TranslateError> {
        fallback(node, ctx)
    }

    /// A quoted string, rendered as a JSON string of its value.
    fn string_literal<'a>(
        &self,
        node: &SyntaxNode<'a>,
        ctx: &Context<'_, 'a>,
    ) -> Result<OutputTree, TranslateError> {
        let value = serde_json::Value::String(string_value(ctx.text_of(node)));
        Ok(OutputTree::text(value.to_string()))
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
        Ok(OutputTree::text(ctx.text_of(node)))
    }

    /// A statement sequence, one statement per line.
    fn syntax_list<'a>(
        &self,
        node: &SyntaxNode<'a>,
        ctx: &Context<'_, 'a>,
    ) -> Result<OutputTree, TranslateError> {
        ctx.separated(node.children, "\n")
    }

    /// A braced block. Statements are indented by 4 and the closing brace
    /// goes on its own line.
    fn block<'a>(
        &self,
        node: &SyntaxNode<'a>,
        ctx: &Context<'_, 'a>,
    ) -> Result<OutputTree, TranslateError> {
        match node.find_child(SyntaxKind::SyntaxList) {
            Some(list) if list.has_children() => Ok(OutputTree::new("{", vec![ctx.visit(list)?])
                .with_newline()
                .with_indent(4)
                .with_suffix("\n}")),
            _ => Ok(OutputTree::text("{}")),
        }
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
        match node.first_named_child() {
            Some(expression) => Ok(OutputTree::new("return ", vec![ctx.visit(expression)?])),
            None => Ok(OutputTree::text("return")),
        }
    }

    /// `left op right`, keeping the operator's source text.
    fn binary_expression<'a>(
        &self,
        node: &SyntaxNode<'a>,
        ctx: &Context<'_, 'a>,
    ) -> Result<OutputTree, TranslateError> {
        let left = node.required_field("left")?;
        let operator = node
            .operator()
            .ok_or_else(|| TranslateError::missing_child(node, "operator"))?;
        let right = node.required_field("right")?;

        Ok(OutputTree::new(
            "",
            vec![
                ctx.visit(left)?,
                OutputTree::text(format!(" {} ", ctx.text_of(operator))),
                ctx.visit(right)?,
            ],
        ))
    }

    fn if_statement<'a>(
        &self,
        node: &SyntaxNode<'a>,
        ctx: &Context<'_, 'a>,
    ) -> Result<OutputTree, TranslateError> {
        fallback(node, ctx)
    }

    /// `object.property`.
    fn property_access_expression<'a>(
        &self,
        node: &SyntaxNode<'a>,
        ctx: &Context<'_, 'a>,
    ) -> Result<OutputTree, TranslateError> {
        let object = node.required_field("object")?;
        let property = node.required_field("property")?;

        Ok(OutputTree::new(
            "",
            vec![ctx.visit(object)?, OutputTree::text("."), ctx.visit(property)?],
        ))
    }

    /// `callee(arg, arg)`.
    fn call_expression<'a>(
        &self,
        node: &SyntaxNode<'a>,
        ctx: &Context<'_, 'a>,
    ) -> Result<OutputTree, TranslateError> {
        let callee = node.required_field("function")?;
        let arguments = node.required_field("arguments")?;

        Ok(OutputTree::new(
            "",
            vec![
                ctx.visit(callee)?,
                OutputTree::text("("),
                ctx.separated(arguments.named_children(), ", ")?,
                OutputTree::text(")"),
            ],
        ))
    }

    fn expression_statement<'a>(
        &self,
        node: &SyntaxNode<'a>,
        ctx: &Context<'_, 'a>,
    ) -> Result<OutputTree, TranslateError> {
        ctx.node(node.first_named_child())
    }

    /// Keywords, operators and literal leaves, kept verbatim.
    fn token<'a>(
        &self,
        node: &SyntaxNode<'a>,
        ctx: &Context<'_, 'a>,
    ) -> Result<OutputTree, TranslateError> {
        Ok(OutputTree::text(ctx.text_of(node)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DefaultVisitor, translate_source};
    use pretty_assertions::assert_eq;
    use tsxlate_ast::SourceFile;
    use tsxlate_parser::TypeScriptParser;

    struct Upper;

    impl Visitor for Upper {
        fn identifier<'a>(
            &self,
            node: &SyntaxNode<'a>,
            ctx: &Context<'_, 'a>,
        ) -> Result<OutputTree, TranslateError> {
            Ok(OutputTree::text(ctx.text_of(node).to_uppercase()))
        }
    }

    fn render(visitor: &dyn Visitor, text: &str) -> String {
        let source = SourceFile::new("test.ts", text);
        translate_source(&TypeScriptParser::new(), &source, visitor)
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_override_wins_over_default() {
        assert_eq!(render(&Upper, "total + count;"), "TOTAL + COUNT");
        assert_eq!(render(&DefaultVisitor, "total + count;"), "total + count");
    }

    #[test]
    fn test_fallback_renders_kind_and_text() {
        let output = render(&DefaultVisitor, "x++;");
        assert_eq!(output, "(update_expression x++)\n  x++");
    }

    #[test]
    fn test_fallback_keeps_multiline_source_text() {
        let text = "class A {\n  m() {}\n}";
        let output = render(&DefaultVisitor, text);

        assert!(output.starts_with("(class_declaration class A {\n  m() {}\n})\n  "));
        assert!(output.contains(text));
    }

    #[test]
    fn test_nested_fallback_keeps_source_text() {
        let text = "while (x) {\n  y++;\n}";
        let output = render(&DefaultVisitor, &format!("{{\n{text}\n}}"));

        assert!(output.contains(&format!("(while_statement {text})")));
    }
}
