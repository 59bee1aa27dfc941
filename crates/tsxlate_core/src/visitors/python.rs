//! Visitor producing Python-like text.
//!
//! This is example code: it shows how a target notation overrides a handful
//! of handlers and inherits the rest. The output reads like Python but is
//! not checked to be valid Python.

use tsxlate_ast::{SyntaxKind, SyntaxNode};

use crate::error::RequiredField;
use crate::{Context, OutputTree, TranslateError, Visitor};

/// Renders TypeScript as Python-like text.
///
/// Overrides imports, identifiers, function declarations, blocks, parameters
/// and `if` statements. Everything else uses the default renderings.
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonVisitor;

impl Visitor for PythonVisitor {
    /// `import <module>`.
    fn import_declaration<'a>(
        &self,
        node: &SyntaxNode<'a>,
        ctx: &Context<'_, 'a>,
    ) -> Result<OutputTree, TranslateError> {
        let module = import_reference(node, ctx)?;
        Ok(OutputTree::text(format!("import {}", module)))
    }

    fn identifier<'a>(
        &self,
        node: &SyntaxNode<'a>,
        ctx: &Context<'_, 'a>,
    ) -> Result<OutputTree, TranslateError> {
        Ok(OutputTree::text(snake_case(ctx.text_of(node))))
    }

    /// `def name(p, q)` followed by the body suite.
    fn function_declaration<'a>(
        &self,
        node: &SyntaxNode<'a>,
        ctx: &Context<'_, 'a>,
    ) -> Result<OutputTree, TranslateError> {
        let name = node.required_field("name")?;
        let parameters = node.required_field("parameters")?;
        let body = node.required_field("body")?;

        let header = OutputTree::new(
            "def ",
            vec![
                ctx.visit(name)?,
                OutputTree::text("("),
                ctx.separated(parameters.named_children(), ", ")?,
                OutputTree::text(")"),
            ],
        );
        Ok(OutputTree::new("", vec![header, ctx.visit(body)?]))
    }

    /// `:` and the statements on the following lines, indented by 4.
    fn block<'a>(
        &self,
        node: &SyntaxNode<'a>,
        ctx: &Context<'_, 'a>,
    ) -> Result<OutputTree, TranslateError> {
        let statements = match node.find_child(SyntaxKind::SyntaxList) {
            Some(list) if list.has_children() => ctx.visit(list)?,
            _ => OutputTree::text("pass"),
        };
        Ok(suite(statements))
    }

    fn parameter<'a>(
        &self,
        node: &SyntaxNode<'a>,
        ctx: &Context<'_, 'a>,
    ) -> Result<OutputTree, TranslateError> {
        ctx.visit(node.required_field("pattern")?)
    }

    /// `if cond:` with its suite, then an `else:` or `elif` branch on the
    /// next line.
    fn if_statement<'a>(
        &self,
        node: &SyntaxNode<'a>,
        ctx: &Context<'_, 'a>,
    ) -> Result<OutputTree, TranslateError> {
        let condition = node.required_field("condition")?;
        let consequence = node.required_field("consequence")?;

        let mut branches = vec![OutputTree::new(
            "if ",
            vec![ctx.visit(condition)?, branch_body(consequence, ctx)?],
        )];

        if let Some(alternative) = node.field("alternative") {
            let statement = alternative
                .first_named_child()
                .ok_or_else(|| TranslateError::missing_child(alternative, "statement"))?;
            if statement.kind == SyntaxKind::IfStatement {
                // `el` + `if ...` reads `elif ...`
                branches.push(OutputTree::new("\nel", vec![ctx.visit(statement)?]));
            } else {
                branches.push(OutputTree::new(
                    "\nelse",
                    vec![branch_body(statement, ctx)?],
                ));
            }
        }

        Ok(OutputTree::new("", branches))
    }
}

/// Wraps statements as an indented suite after a colon.
fn suite(statements: OutputTree) -> OutputTree {
    OutputTree::new(":", vec![statements])
        .with_newline()
        .with_indent(4)
}

/// Renders the statement of an `if` or `else` branch as a suite.
fn branch_body<'a>(
    statement: &SyntaxNode<'a>,
    ctx: &Context<'_, 'a>,
) -> Result<OutputTree, TranslateError> {
    if statement.kind == SyntaxKind::Block {
        ctx.visit(statement)
    } else {
        Ok(suite(ctx.visit(statement)?))
    }
}

/// Finds the module an import refers to.
fn import_reference<'a>(
    node: &SyntaxNode<'a>,
    ctx: &Context<'_, 'a>,
) -> Result<String, TranslateError> {
    // import ... from "module"
    if let Some(source) = node.field("source") {
        return Ok(unquote(ctx.text_of(source)).to_string());
    }

    // import name = require("module")
    if let Some(clause) = node.find_child(SyntaxKind::Other("import_require_clause")) {
        let source = clause
            .field("source")
            .or_else(|| clause.find_child(SyntaxKind::StringLiteral))
            .ok_or_else(|| TranslateError::missing_child(clause, "source"))?;
        return Ok(unquote(ctx.text_of(source)).to_string());
    }

    // import name = Namespace.Entity
    node.named_children()
        .last()
        .map(|entity| ctx.text_of(entity).to_string())
        .ok_or_else(|| TranslateError::missing_child(node, "source"))
}

/// Strips the quotes around a module specifier. Escapes stay as written.
fn unquote(raw: &str) -> &str {
    raw.strip_prefix(['"', '\''])
        .and_then(|inner| inner.strip_suffix(['"', '\'']))
        .unwrap_or(raw)
}

/// Converts a camelCase or PascalCase identifier to snake_case.
///
/// An underscore goes between a lowercase letter or digit and a following
/// uppercase letter, and between the end of an uppercase run and a following
/// capitalized word. Existing underscores are kept.
///
/// ```rust
/// use tsxlate_core::snake_case;
///
/// assert_eq!(snake_case("myHTTPServer"), "my_http_server");
/// assert_eq!(snake_case("parseJSON"), "parse_json");
/// ```
pub fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
    }

    out
}
