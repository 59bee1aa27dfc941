//! Provided visitors.
//!
//! - [`NoopVisitor`]: renders every node as unknown syntax, showing the tree
//! - [`DefaultVisitor`]: the default renderings of [`Visitor`](crate::Visitor)
//! - [`PythonVisitor`]: a Python-like notation

mod default;
mod noop;
mod python;

pub use default::DefaultVisitor;
pub use noop::NoopVisitor;
pub use python::{PythonVisitor, snake_case};
