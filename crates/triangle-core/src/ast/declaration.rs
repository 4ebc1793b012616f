use super::command::Command;
use super::expression::Expression;
use super::parameter::FormalParameter;
use super::terminal::{Identifier, Operator};
use super::types::TypeDenoter;
use crate::span::Span;

#[derive(Debug, Clone, PartialEq)]
pub enum Declaration<'a> {
    Const(ConstDeclaration<'a>),
    Var(VarDeclaration<'a>),
    Proc(ProcDeclaration<'a>),
    Func(FuncDeclaration<'a>),
    Type(TypeDeclaration<'a>),
    UnaryOperator(UnaryOperatorDeclaration<'a>),
    BinaryOperator(BinaryOperatorDeclaration<'a>),
    Sequential(SequentialDeclaration<'a>),
}

/// `const name ~ value`
#[derive(Debug, Clone, PartialEq)]
pub struct ConstDeclaration<'a> {
    pub name: Identifier<'a>,
    pub value: &'a Expression<'a>,
    pub span: Span,
}

/// `var name : ty`
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclaration<'a> {
    pub name: Identifier<'a>,
    pub ty: &'a TypeDenoter<'a>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcDeclaration<'a> {
    pub name: Identifier<'a>,
    pub parameters: &'a [FormalParameter<'a>],
    pub body: &'a Command<'a>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncDeclaration<'a> {
    pub name: Identifier<'a>,
    pub parameters: &'a [FormalParameter<'a>],
    pub result: &'a TypeDenoter<'a>,
    pub body: &'a Expression<'a>,
    pub span: Span,
}

/// `type name ~ ty`
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDeclaration<'a> {
    pub name: Identifier<'a>,
    pub ty: &'a TypeDenoter<'a>,
    pub span: Span,
}

/// Signature of a built-in prefix operator
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryOperatorDeclaration<'a> {
    pub operator: Operator<'a>,
    pub argument: &'a TypeDenoter<'a>,
    pub result: &'a TypeDenoter<'a>,
    pub span: Span,
}

/// Signature of a built-in infix operator
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOperatorDeclaration<'a> {
    pub operator: Operator<'a>,
    pub left: &'a TypeDenoter<'a>,
    pub right: &'a TypeDenoter<'a>,
    pub result: &'a TypeDenoter<'a>,
    pub span: Span,
}

/// `first; second`
#[derive(Debug, Clone, PartialEq)]
pub struct SequentialDeclaration<'a> {
    pub first: &'a Declaration<'a>,
    pub second: &'a Declaration<'a>,
    pub span: Span,
}

impl<'a> Declaration<'a> {
    pub fn span(&self) -> Span {
        match self {
            Declaration::Const(d) => d.span,
            Declaration::Var(d) => d.span,
            Declaration::Proc(d) => d.span,
            Declaration::Func(d) => d.span,
            Declaration::Type(d) => d.span,
            Declaration::UnaryOperator(d) => d.span,
            Declaration::BinaryOperator(d) => d.span,
            Declaration::Sequential(d) => d.span,
        }
    }

    /// Flattens a `Sequential` chain into its leaf declarations, left to right
    pub fn flatten(&'a self) -> Vec<&'a Declaration<'a>> {
        let mut out = Vec::new();
        let mut pending = vec![self];
        while let Some(decl) = pending.pop() {
            match decl {
                Declaration::Sequential(seq) => {
                    pending.push(seq.second);
                    pending.push(seq.first);
                }
                other => out.push(other),
            }
        }
        out
    }
}
