//! # tsxlate_parser
//!
//! Parser abstraction layer for tsxlate.
//!
//! This crate provides:
//! - A `Parser` trait for front-ends producing a tsxlate syntax tree
//! - A TypeScript parser built on `tree-sitter-typescript`
//!
//! ## Architecture
//!
//! Parsers convert source text into [`SyntaxNode`](tsxlate_ast::SyntaxNode)
//! trees. The parser owns syntax-error detection: a tree it returns is
//! syntactically valid, and the translator performs no further validation.
//!
//! ## Example
//!
//! ```rust,ignore
//! use tsxlate_parser::{Parser, TypeScriptParser};
//! use tsxlate_ast::AstArena;
//!
//! let arena = AstArena::new();
//! let parser = TypeScriptParser::new();
//! let source = "function add(a, b) { return a + b; }";
//!
//! let root = parser.parse(&arena, source).unwrap();
//! ```

mod error;
mod traits;
mod typescript;

pub use error::ParseError;
pub use traits::Parser;
pub use typescript::TypeScriptParser;
