//! Triangle abstract syntax tree
//!
//! Trees are immutable and arena-allocated. A parent refers to its children
//! through `&'a` references and children never point back, so a
//! transformation that leaves a subtree alone simply returns the same
//! reference. Use [`same_node`] to test that identity.

pub mod builder;
pub mod command;
pub mod declaration;
pub mod expression;
pub mod parameter;
pub mod terminal;
pub mod types;
pub mod visitor;
pub mod vname;

pub use builder::AstBuilder;
pub use command::*;
pub use declaration::*;
pub use expression::*;
pub use parameter::{ActualParameter, FormalParameter};
pub use terminal::{CharacterLiteral, Identifier, IntegerLiteral, Operator};
pub use types::{FieldType, TypeDenoter};
pub use visitor::{CommandVisitor, DeclarationVisitor, ExpressionVisitor, VnameVisitor};
pub use vname::*;

use crate::span::Span;

/// Top-level program: a single command
#[derive(Debug, Clone, PartialEq)]
pub struct Program<'a> {
    pub command: &'a Command<'a>,
    pub span: Span,
}

impl<'a> Program<'a> {
    pub fn new(command: &'a Command<'a>, span: Span) -> Self {
        Program { command, span }
    }
}

/// True when both references point at the same arena node
pub fn same_node<T>(a: &T, b: &T) -> bool {
    std::ptr::eq(a, b)
}
