//! Visitor using the default renderings.

use crate::Visitor;

/// Renders every kind the way [`Visitor`]'s default methods do.
///
/// Imports, function declarations, parameters and `if` statements have no
/// default rendering and show up as unknown syntax.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultVisitor;

impl Visitor for DefaultVisitor {}
