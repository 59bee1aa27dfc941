//! Per-dispatch context handed to visitor handlers.

use tsxlate_ast::{SourceFile, SyntaxNode};

use crate::{OutputTree, TranslateError, Visitor, driver};

/// Context for translating one node.
///
/// A context is built for every dispatch and only lives for the duration of
/// the handler call. It gives handlers access to the source text and lets
/// them translate child nodes with the same visitor.
pub struct Context<'c, 'a> {
    source: &'c SourceFile,
    node: &'c SyntaxNode<'a>,
    visitor: &'c dyn Visitor,
}

impl<'c, 'a> Context<'c, 'a> {
    /// Creates a context for `node`.
    pub fn new(source: &'c SourceFile, node: &'c SyntaxNode<'a>, visitor: &'c dyn Visitor) -> Self {
        Self {
            source,
            node,
            visitor,
        }
    }

    /// Returns the file being translated.
    pub fn source_file(&self) -> &'c SourceFile {
        self.source
    }

    /// Returns the node this context was built for.
    pub fn current(&self) -> &'c SyntaxNode<'a> {
        self.node
    }

    /// Returns the raw source text of `node`.
    pub fn text_of(&self, node: &SyntaxNode<'_>) -> &'c str {
        node.text(self.source.text())
    }

    /// Translates a single node.
    pub fn visit(&self, node: &SyntaxNode<'a>) -> Result<OutputTree, TranslateError> {
        driver::visit(self.source, node, self.visitor)
    }

    /// Translates every child of the current node, in source order.
    pub fn all(&self) -> Result<Vec<OutputTree>, TranslateError> {
        self.node.children.iter().map(|child| self.visit(child)).collect()
    }

    /// Translates `node`, or returns the empty tree when it is absent.
    pub fn node(&self, node: Option<&SyntaxNode<'a>>) -> Result<OutputTree, TranslateError> {
        match node {
            Some(node) => self.visit(node),
            None => Ok(OutputTree::empty()),
        }
    }

    /// Translates `nodes` into one tree, with nothing between them.
    pub fn nodes<'n, I>(&self, nodes: I) -> Result<OutputTree, TranslateError>
    where
        'a: 'n,
        I: IntoIterator<Item = &'n SyntaxNode<'a>>,
    {
        let children = nodes
            .into_iter()
            .map(|node| self.visit(node))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(OutputTree::new("", children))
    }

    /// Translates `nodes` into one tree, with `separator` between them.
    pub fn separated<'n, I>(&self, nodes: I, separator: &str) -> Result<OutputTree, TranslateError>
    where
        'a: 'n,
        I: IntoIterator<Item = &'n SyntaxNode<'a>>,
    {
        let mut children = Vec::new();
        for (i, node) in nodes.into_iter().enumerate() {
            if i > 0 {
                children.push(OutputTree::text(separator));
            }
            children.push(self.visit(node)?);
        }
        Ok(OutputTree::new("", children))
    }
}
