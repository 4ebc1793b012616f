use super::expression::Expression;
use super::terminal::Identifier;
use crate::span::Span;

/// Assignable name path: `x`, `r.f`, `a[i]`, or any nesting of them
#[derive(Debug, Clone, PartialEq)]
pub enum Vname<'a> {
    Simple(SimpleVname<'a>),
    Dot(DotVname<'a>),
    Subscript(SubscriptVname<'a>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimpleVname<'a> {
    pub name: Identifier<'a>,
    pub span: Span,
}

/// Record field access `base.field`
#[derive(Debug, Clone, PartialEq)]
pub struct DotVname<'a> {
    pub base: &'a Vname<'a>,
    pub field: Identifier<'a>,
    pub span: Span,
}

/// Array indexing `base[index]`
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptVname<'a> {
    pub base: &'a Vname<'a>,
    pub index: &'a Expression<'a>,
    pub span: Span,
}

impl<'a> Vname<'a> {
    pub fn span(&self) -> Span {
        match self {
            Vname::Simple(v) => v.span,
            Vname::Dot(v) => v.span,
            Vname::Subscript(v) => v.span,
        }
    }
}
