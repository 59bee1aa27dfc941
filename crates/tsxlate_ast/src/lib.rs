//! # tsxlate_ast
//!
//! Syntax tree definitions for tsxlate.
//!
//! This crate provides the tree that the translator walks. Parsers produce it
//! once from a source file; after that it is read-only.
//!
//! ## Architecture
//!
//! - Uses `bumpalo` for Arena allocation (Oxc-like architecture)
//! - All nodes of a single file are allocated in one arena
//! - Nodes are `Copy` and only hold spans, so the source text is kept once
//!   in a [`SourceFile`] and sliced on demand
//! - Every node carries a closed [`SyntaxKind`] tag; grammar kinds the
//!   translator has no name for are kept as [`SyntaxKind::Other`]
//!
//! ## Example
//!
//! ```rust
//! use tsxlate_ast::{AstArena, SourceFile, Span, SyntaxKind, SyntaxNode};
//!
//! let arena = AstArena::new();
//! let source = SourceFile::new("add.ts", "add");
//!
//! let ident = SyntaxNode::new(SyntaxKind::Identifier, Span::new(0, 3), &[]);
//! let children = arena.alloc_slice_copy(&[ident]);
//! let root = SyntaxNode::new(SyntaxKind::SourceFile, Span::new(0, 3), children);
//!
//! assert_eq!(root.children[0].text(source.text()), "add");
//! ```

mod arena;
mod kind;
mod node;
mod source;
mod span;

pub use arena::AstArena;
pub use kind::SyntaxKind;
pub use node::SyntaxNode;
pub use source::SourceFile;
pub use span::Span;
