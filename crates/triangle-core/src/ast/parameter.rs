use super::expression::Expression;
use super::terminal::Identifier;
use super::types::TypeDenoter;
use super::vname::Vname;

/// Argument at a call site
#[derive(Debug, Clone, PartialEq)]
pub enum ActualParameter<'a> {
    Const(&'a Expression<'a>),
    Var(&'a Vname<'a>),
    Proc(Identifier<'a>),
    Func(Identifier<'a>),
}

/// Parameter in a procedure or function heading
#[derive(Debug, Clone, PartialEq)]
pub enum FormalParameter<'a> {
    Const {
        name: Identifier<'a>,
        ty: &'a TypeDenoter<'a>,
    },
    Var {
        name: Identifier<'a>,
        ty: &'a TypeDenoter<'a>,
    },
    Proc {
        name: Identifier<'a>,
        parameters: &'a [FormalParameter<'a>],
    },
    Func {
        name: Identifier<'a>,
        parameters: &'a [FormalParameter<'a>],
        result: &'a TypeDenoter<'a>,
    },
}

impl<'a> FormalParameter<'a> {
    pub fn name(&self) -> Identifier<'a> {
        match self {
            FormalParameter::Const { name, .. }
            | FormalParameter::Var { name, .. }
            | FormalParameter::Proc { name, .. }
            | FormalParameter::Func { name, .. } => *name,
        }
    }
}
