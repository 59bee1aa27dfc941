//! SyntaxNode definition.
//!
//! The node type produced by parsers and walked by the translator.

use serde::Serialize;

use crate::{Span, SyntaxKind};

/// A node in the syntax tree.
///
/// Nodes are allocated in an [`AstArena`](crate::AstArena) and refer to
/// their children through arena slices. They hold no text; use
/// [`SyntaxNode::text`] with the file's source to get the raw text.
///
/// # Lifetime
///
/// The `'a` lifetime parameter ties this node to its arena allocator,
/// ensuring that all child references remain valid.
///
/// # Example
///
/// ```rust
/// use tsxlate_ast::{AstArena, Span, SyntaxKind, SyntaxNode};
///
/// let arena = AstArena::new();
/// let source = "a + b";
///
/// let left = SyntaxNode::new(SyntaxKind::Identifier, Span::new(0, 1), &[]).with_field("left");
/// let op = SyntaxNode::new(SyntaxKind::Token, Span::new(2, 3), &[])
///     .with_field("operator")
///     .anonymous();
/// let right = SyntaxNode::new(SyntaxKind::Identifier, Span::new(4, 5), &[]).with_field("right");
/// let children = arena.alloc_slice_copy(&[left, op, right]);
/// let binary = SyntaxNode::new(SyntaxKind::BinaryExpression, Span::new(0, 5), children);
///
/// assert_eq!(binary.field("left").map(|n| n.text(source)), Some("a"));
/// assert_eq!(binary.operator().map(|n| n.text(source)), Some("+"));
/// assert_eq!(binary.named_children().count(), 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SyntaxNode<'a> {
    /// The kind of this node.
    pub kind: SyntaxKind,

    /// Byte span in the source text.
    pub span: Span,

    /// Grammar field under which the parent holds this node, if any.
    pub field: Option<&'static str>,

    /// False for anonymous grammar tokens (keywords, operators, delimiters).
    pub named: bool,

    /// Child nodes in source order.
    pub children: &'a [SyntaxNode<'a>],
}

impl<'a> Serialize for SyntaxNode<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut len = 2; // type, range
        if self.field.is_some() {
            len += 1;
        }
        if self.has_children() {
            len += 1;
        }

        let mut state = serializer.serialize_struct("SyntaxNode", len)?;

        state.serialize_field("type", &self.kind)?;
        state.serialize_field("range", &[self.span.start, self.span.end])?;

        if let Some(field) = self.field {
            state.serialize_field("field", field)?;
        }

        if self.has_children() {
            state.serialize_field("children", &self.children)?;
        }

        state.end()
    }
}

impl<'a> SyntaxNode<'a> {
    /// Creates a new named node.
    #[inline]
    pub const fn new(kind: SyntaxKind, span: Span, children: &'a [SyntaxNode<'a>]) -> Self {
        Self {
            kind,
            span,
            field: None,
            named: true,
            children,
        }
    }

    /// Returns this node as held under the given grammar field.
    #[inline]
    pub const fn with_field(mut self, field: &'static str) -> Self {
        self.field = Some(field);
        self
    }

    /// Returns this node marked as an anonymous token.
    #[inline]
    pub const fn anonymous(mut self) -> Self {
        self.named = false;
        self
    }

    /// Returns true if this node has children.
    #[inline]
    pub const fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns the raw source text this node spans.
    #[inline]
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        self.span.slice(source)
    }

    /// Returns the first child held under `field`.
    pub fn field(&self, field: &str) -> Option<&'a SyntaxNode<'a>> {
        self.children.iter().find(|c| c.field == Some(field))
    }

    /// Returns the named children in source order.
    pub fn named_children(&self) -> impl Iterator<Item = &'a SyntaxNode<'a>> + use<'a> {
        self.children.iter().filter(|c| c.named)
    }

    /// Returns the first named child.
    pub fn first_named_child(&self) -> Option<&'a SyntaxNode<'a>> {
        self.children.iter().find(|c| c.named)
    }

    /// Returns the first child of the given kind.
    pub fn find_child(&self, kind: SyntaxKind) -> Option<&'a SyntaxNode<'a>> {
        self.children.iter().find(|c| c.kind == kind)
    }

    /// Returns the operator token of a binary-like node.
    ///
    /// Prefers the `operator` field; plain assignments have no such field, so
    /// the first anonymous token without a field is used instead.
    pub fn operator(&self) -> Option<&'a SyntaxNode<'a>> {
        self.field("operator").or_else(|| {
            self.children
                .iter()
                .find(|c| !c.named && c.field.is_none() && c.kind == SyntaxKind::Token)
        })
    }
}
