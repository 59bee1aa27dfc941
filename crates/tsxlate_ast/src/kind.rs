//! Syntax kind tags.

use std::fmt;

use serde::{Serialize, Serializer};

/// Closed set of node kinds the translator distinguishes.
///
/// The named variants are the kinds a visitor can handle. Everything else the
/// grammar produces is kept as [`SyntaxKind::Other`] with the grammar's own
/// kind name, so a translation can always say what it skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    // Structure
    /// Root of a parsed file.
    SourceFile,
    /// Grouping of statements with no syntax of its own.
    SyntaxList,
    /// Delimiter or separator token (`{`, `}`, `(`, `)`, `[`, `]`, `;`, `,`).
    Punctuation,

    // Meaningful kinds
    /// `import ... from "x"`, `import x = require("x")` or `import x = A.B`.
    ImportDeclaration,
    /// Quoted string literal.
    StringLiteral,
    /// `function name(...) { ... }`.
    FunctionDeclaration,
    /// Any identifier, including property and type names.
    Identifier,
    /// `{ ... }` statement block.
    Block,
    /// Function parameter.
    Parameter,
    /// `return expr;`.
    ReturnStatement,
    /// Binary operation or assignment.
    BinaryExpression,
    /// `if (...) ... else ...`.
    IfStatement,
    /// `object.property`.
    PropertyAccessExpression,
    /// `callee(args)`.
    CallExpression,
    /// Expression used as a statement.
    ExpressionStatement,
    /// Keyword, operator, literal or any other leaf token.
    Token,

    /// Grammar kind without a dedicated variant.
    Other(&'static str),
}

impl SyntaxKind {
    /// Returns the name used for this kind in diagnostics and unknown-syntax
    /// markers.
    pub const fn name(&self) -> &'static str {
        match self {
            SyntaxKind::SourceFile => "SourceFile",
            SyntaxKind::SyntaxList => "SyntaxList",
            SyntaxKind::Punctuation => "Punctuation",
            SyntaxKind::ImportDeclaration => "ImportDeclaration",
            SyntaxKind::StringLiteral => "StringLiteral",
            SyntaxKind::FunctionDeclaration => "FunctionDeclaration",
            SyntaxKind::Identifier => "Identifier",
            SyntaxKind::Block => "Block",
            SyntaxKind::Parameter => "Parameter",
            SyntaxKind::ReturnStatement => "ReturnStatement",
            SyntaxKind::BinaryExpression => "BinaryExpression",
            SyntaxKind::IfStatement => "IfStatement",
            SyntaxKind::PropertyAccessExpression => "PropertyAccessExpression",
            SyntaxKind::CallExpression => "CallExpression",
            SyntaxKind::ExpressionStatement => "ExpressionStatement",
            SyntaxKind::Token => "Token",
            SyntaxKind::Other(name) => *name,
        }
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for SyntaxKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}
