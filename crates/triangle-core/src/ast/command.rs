use super::declaration::Declaration;
use super::expression::Expression;
use super::parameter::ActualParameter;
use super::terminal::Identifier;
use super::vname::Vname;
use crate::span::Span;

#[derive(Debug, Clone, PartialEq)]
pub enum Command<'a> {
    Assign(AssignCommand<'a>),
    Call(CallCommand<'a>),
    Empty(EmptyCommand),
    If(IfCommand<'a>),
    Let(LetCommand<'a>),
    Sequential(SequentialCommand<'a>),
    While(WhileCommand<'a>),
}

/// `target := value`
#[derive(Debug, Clone, PartialEq)]
pub struct AssignCommand<'a> {
    pub target: &'a Vname<'a>,
    pub value: &'a Expression<'a>,
    pub span: Span,
}

/// `procedure(arguments)`
#[derive(Debug, Clone, PartialEq)]
pub struct CallCommand<'a> {
    pub procedure: Identifier<'a>,
    pub arguments: &'a [ActualParameter<'a>],
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmptyCommand {
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfCommand<'a> {
    pub condition: &'a Expression<'a>,
    pub then_branch: &'a Command<'a>,
    pub else_branch: &'a Command<'a>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LetCommand<'a> {
    pub declaration: &'a Declaration<'a>,
    pub body: &'a Command<'a>,
    pub span: Span,
}

/// `first; second`
#[derive(Debug, Clone, PartialEq)]
pub struct SequentialCommand<'a> {
    pub first: &'a Command<'a>,
    pub second: &'a Command<'a>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileCommand<'a> {
    pub condition: &'a Expression<'a>,
    pub body: &'a Command<'a>,
    pub span: Span,
}

impl<'a> Command<'a> {
    pub fn span(&self) -> Span {
        match self {
            Command::Assign(c) => c.span,
            Command::Call(c) => c.span,
            Command::Empty(c) => c.span,
            Command::If(c) => c.span,
            Command::Let(c) => c.span,
            Command::Sequential(c) => c.span,
            Command::While(c) => c.span,
        }
    }
}
