use super::terminal::{Identifier, IntegerLiteral};

/// Type expression as written in declarations and parameter lists
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDenoter<'a> {
    /// A named type: `Integer`, `Char`, or a user type
    Simple(Identifier<'a>),
    /// `array length of element`
    Array {
        length: IntegerLiteral<'a>,
        element: &'a TypeDenoter<'a>,
    },
    /// `record f1 : T1, f2 : T2 end`
    Record(&'a [FieldType<'a>]),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldType<'a> {
    pub name: Identifier<'a>,
    pub ty: &'a TypeDenoter<'a>,
}
