//! Output tree: the formatted result of a translation.
//!
//! Handlers return [`OutputTree`] values instead of strings. A tree holds a
//! prefix, child trees and layout options, and is turned into text by its
//! [`Display`](fmt::Display) implementation:
//!
//! 1. the prefix, followed by a line break when `newline` is set;
//! 2. the children, rendered and concatenated with nothing in between;
//! 3. the `children_separator`, placed before the children only when they
//!    rendered to something;
//! 4. every line break of the result gains `indent_children` spaces;
//! 5. the `suffix`, which this node does not re-indent.
//!
//! Step 4 runs at every level, so indentation accumulates: a line break
//! three levels deep under nodes indenting by `w` ends up `3 * w` spaces in.
//! The first line of a node is only indented by its ancestors.
//!
//! Leaves built with [`OutputTree::verbatim`] are exempt from step 4 at every
//! level. Their text comes out exactly as given.

use std::fmt;
use std::iter;

/// Layout options of an [`OutputTree`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputOptions {
    /// Break the line after the prefix.
    pub newline: bool,

    /// Spaces added after every line break of prefix and children.
    pub indent_children: usize,

    /// Text placed between the prefix and non-empty children.
    pub children_separator: Option<String>,

    /// Text appended after everything else, without re-indentation.
    pub suffix: Option<String>,
}

impl OutputOptions {
    /// Options with every layout feature off.
    pub const NONE: Self = Self {
        newline: false,
        indent_children: 0,
        children_separator: None,
        suffix: None,
    };
}

/// A node of formatted output.
///
/// # Example
///
/// ```rust
/// use tsxlate_core::OutputTree;
///
/// let body = OutputTree::text("return a + b");
/// let tree = OutputTree::new("def add(a, b):", vec![body])
///     .with_newline()
///     .with_indent(4);
///
/// assert_eq!(tree.to_string(), "def add(a, b):\n    return a + b");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputTree {
    /// Text emitted before the children.
    pub prefix: String,

    /// Child trees in output order.
    pub children: Vec<OutputTree>,

    /// Layout options.
    pub options: OutputOptions,

    /// Marks output produced for syntax no handler understood.
    unknown: bool,

    /// Writes the prefix without re-indenting its line breaks.
    verbatim: bool,
}

/// The empty output tree. It renders to the empty string.
pub const EMPTY_NODE: OutputTree = OutputTree::empty();

impl OutputTree {
    /// Creates a tree with default options.
    pub fn new(prefix: impl Into<String>, children: Vec<OutputTree>) -> Self {
        Self {
            prefix: prefix.into(),
            children,
            options: OutputOptions::NONE,
            unknown: false,
            verbatim: false,
        }
    }

    /// Creates a leaf holding `text`.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(text, Vec::new())
    }

    /// Creates the empty tree.
    pub const fn empty() -> Self {
        Self {
            prefix: String::new(),
            children: Vec::new(),
            options: OutputOptions::NONE,
            unknown: false,
            verbatim: false,
        }
    }

    /// Creates a leaf whose `text` is never re-indented, neither by itself
    /// nor by any ancestor.
    ///
    /// ```rust
    /// use tsxlate_core::OutputTree;
    ///
    /// let raw = OutputTree::verbatim("{\n  x\n}");
    /// let tree = OutputTree::new("", vec![OutputTree::text("\n"), raw]).with_indent(4);
    ///
    /// assert_eq!(tree.to_string(), "\n    {\n  x\n}");
    /// ```
    pub fn verbatim(text: impl Into<String>) -> Self {
        Self {
            verbatim: true,
            ..Self::text(text)
        }
    }

    /// Creates a tree marking syntax that had no handler.
    ///
    /// The marker only feeds [`OutputTree::unknown_count`]; it never changes
    /// the rendered text.
    pub fn unknown(prefix: impl Into<String>, children: Vec<OutputTree>) -> Self {
        Self {
            unknown: true,
            ..Self::new(prefix, children)
        }
    }

    /// Replaces the layout options.
    pub fn with_options(mut self, options: OutputOptions) -> Self {
        self.options = options;
        self
    }

    /// Breaks the line after the prefix.
    pub fn with_newline(mut self) -> Self {
        self.options.newline = true;
        self
    }

    /// Indents every line break of this tree by `indent` spaces.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.options.indent_children = indent;
        self
    }

    /// Places `separator` between the prefix and non-empty children.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.options.children_separator = Some(separator.into());
        self
    }

    /// Appends `suffix` after the rendered tree.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.options.suffix = Some(suffix.into());
        self
    }

    /// Returns true if this tree marks unknown syntax.
    pub fn is_unknown(&self) -> bool {
        self.unknown
    }

    /// Counts unknown-syntax markers in this tree, itself included.
    pub fn unknown_count(&self) -> usize {
        usize::from(self.unknown)
            + self
                .children
                .iter()
                .map(OutputTree::unknown_count)
                .sum::<usize>()
    }
}

impl OutputTree {
    /// Writes this tree under ancestors that indent by `outer` spaces in total.
    fn render(&self, out: &mut String, outer: usize) {
        let indent = outer + self.options.indent_children;

        if self.verbatim {
            out.push_str(&self.prefix);
        } else {
            push_indented(out, &self.prefix, indent);
        }
        if self.options.newline {
            push_indented(out, "\n", indent);
        }

        let mut rendered = String::new();
        for child in &self.children {
            child.render(&mut rendered, indent);
        }
        if !rendered.is_empty()
            && let Some(separator) = &self.options.children_separator
        {
            push_indented(out, separator, indent);
        }
        out.push_str(&rendered);

        if let Some(suffix) = &self.options.suffix {
            push_indented(out, suffix, outer);
        }
    }
}

/// Appends `text`, following each of its line breaks with `indent` spaces.
fn push_indented(out: &mut String, text: &str, indent: usize) {
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
            out.extend(iter::repeat_n(' ', indent));
        }
        out.push_str(line);
    }
}

impl fmt::Display for OutputTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.render(&mut out, 0);
        f.write_str(&out)
    }
}
