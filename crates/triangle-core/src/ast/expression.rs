use super::declaration::Declaration;
use super::parameter::ActualParameter;
use super::terminal::{CharacterLiteral, Identifier, IntegerLiteral, Operator};
use super::vname::Vname;
use crate::span::Span;

#[derive(Debug, Clone, PartialEq)]
pub enum Expression<'a> {
    Empty(EmptyExpression),
    Integer(IntegerExpression<'a>),
    Character(CharacterExpression<'a>),
    Vname(VnameExpression<'a>),
    Unary(UnaryExpression<'a>),
    Binary(BinaryExpression<'a>),
    If(IfExpression<'a>),
    Let(LetExpression<'a>),
    Call(CallExpression<'a>),
    Array(ArrayExpression<'a>),
    Record(RecordExpression<'a>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmptyExpression {
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntegerExpression<'a> {
    pub literal: IntegerLiteral<'a>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CharacterExpression<'a> {
    pub literal: CharacterLiteral<'a>,
    pub span: Span,
}

/// A variable read
#[derive(Debug, Clone, PartialEq)]
pub struct VnameExpression<'a> {
    pub vname: &'a Vname<'a>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpression<'a> {
    pub operator: Operator<'a>,
    pub operand: &'a Expression<'a>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression<'a> {
    pub operator: Operator<'a>,
    pub left: &'a Expression<'a>,
    pub right: &'a Expression<'a>,
    pub span: Span,
}

/// `if condition then then_branch else else_branch`
#[derive(Debug, Clone, PartialEq)]
pub struct IfExpression<'a> {
    pub condition: &'a Expression<'a>,
    pub then_branch: &'a Expression<'a>,
    pub else_branch: &'a Expression<'a>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LetExpression<'a> {
    pub declaration: &'a Declaration<'a>,
    pub body: &'a Expression<'a>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression<'a> {
    pub function: Identifier<'a>,
    pub arguments: &'a [ActualParameter<'a>],
    pub span: Span,
}

/// `[e1, e2, ...]`
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayExpression<'a> {
    pub elements: &'a [&'a Expression<'a>],
    pub span: Span,
}

/// `{f1 ~ e1, f2 ~ e2, ...}`
#[derive(Debug, Clone, PartialEq)]
pub struct RecordExpression<'a> {
    pub fields: &'a [RecordField<'a>],
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordField<'a> {
    pub name: Identifier<'a>,
    pub value: &'a Expression<'a>,
}

impl<'a> Expression<'a> {
    pub fn span(&self) -> Span {
        match self {
            Expression::Empty(e) => e.span,
            Expression::Integer(e) => e.span,
            Expression::Character(e) => e.span,
            Expression::Vname(e) => e.span,
            Expression::Unary(e) => e.span,
            Expression::Binary(e) => e.span,
            Expression::If(e) => e.span,
            Expression::Let(e) => e.span,
            Expression::Call(e) => e.span,
            Expression::Array(e) => e.span,
            Expression::Record(e) => e.span,
        }
    }
}
