//! Terminal leaves of the tree
//!
//! Terminals borrow their spelling from the arena (or from whatever buffer
//! the tree was built from), so they are `Copy` and cheap to re-share.

use crate::span::Span;
use std::fmt;

/// A name as written in source, e.g. `x`, `Integer`, `$h1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identifier<'a> {
    pub spelling: &'a str,
    pub span: Span,
}

impl<'a> Identifier<'a> {
    pub fn new(spelling: &'a str, span: Span) -> Self {
        Identifier { spelling, span }
    }
}

/// An operator symbol, e.g. `+`, `<`, `\`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operator<'a> {
    pub spelling: &'a str,
    pub span: Span,
}

impl<'a> Operator<'a> {
    pub fn new(spelling: &'a str, span: Span) -> Self {
        Operator { spelling, span }
    }
}

/// Integer literal, kept as its source spelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntegerLiteral<'a> {
    pub spelling: &'a str,
    pub span: Span,
}

impl<'a> IntegerLiteral<'a> {
    pub fn new(spelling: &'a str, span: Span) -> Self {
        IntegerLiteral { spelling, span }
    }

    /// Numeric value, if the spelling is a valid integer
    pub fn value(&self) -> Option<i64> {
        self.spelling.parse().ok()
    }
}

/// Character literal, spelled with its quotes: `'a'`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharacterLiteral<'a> {
    pub spelling: &'a str,
    pub span: Span,
}

impl<'a> CharacterLiteral<'a> {
    pub fn new(spelling: &'a str, span: Span) -> Self {
        CharacterLiteral { spelling, span }
    }
}

impl fmt::Display for Identifier<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spelling)
    }
}

impl fmt::Display for Operator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spelling)
    }
}

impl fmt::Display for IntegerLiteral<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spelling)
    }
}

impl fmt::Display for CharacterLiteral<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spelling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_value() {
        assert_eq!(IntegerLiteral::new("42", Span::dummy()).value(), Some(42));
        assert_eq!(IntegerLiteral::new("4x", Span::dummy()).value(), None);
    }

    #[test]
    fn test_identifier_equality_includes_span() {
        let a = Identifier::new("x", Span::dummy());
        let b = Identifier::new("x", Span::new(0, 1, 1, 1));
        assert_ne!(a, b);
        assert_eq!(a.spelling, b.spelling);
    }
}
