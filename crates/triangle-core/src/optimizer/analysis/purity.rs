use crate::ast::*;

/// Classifies expressions as side-effect free
///
/// Only literals, the empty expression, variable reads and unary or binary
/// operators over pure operands are pure. Everything else, including calls,
/// `let` and conditional expressions and aggregates, is treated as impure.
pub struct PurityCheck;

impl<'a> ExpressionVisitor<'a, (), bool> for PurityCheck {
    fn visit_empty_expression(&mut self, _: &'a EmptyExpression, _: ()) -> bool {
        true
    }

    fn visit_integer_expression(&mut self, _: &'a IntegerExpression<'a>, _: ()) -> bool {
        true
    }

    fn visit_character_expression(&mut self, _: &'a CharacterExpression<'a>, _: ()) -> bool {
        true
    }

    fn visit_vname_expression(&mut self, _: &'a VnameExpression<'a>, _: ()) -> bool {
        true
    }

    fn visit_unary_expression(&mut self, expr: &'a UnaryExpression<'a>, _: ()) -> bool {
        expr.operand.visit(self, ())
    }

    fn visit_binary_expression(&mut self, expr: &'a BinaryExpression<'a>, _: ()) -> bool {
        expr.left.visit(self, ()) && expr.right.visit(self, ())
    }

    fn visit_if_expression(&mut self, _: &'a IfExpression<'a>, _: ()) -> bool {
        false
    }

    fn visit_let_expression(&mut self, _: &'a LetExpression<'a>, _: ()) -> bool {
        false
    }

    fn visit_call_expression(&mut self, _: &'a CallExpression<'a>, _: ()) -> bool {
        false
    }

    fn visit_array_expression(&mut self, _: &'a ArrayExpression<'a>, _: ()) -> bool {
        false
    }

    fn visit_record_expression(&mut self, _: &'a RecordExpression<'a>, _: ()) -> bool {
        false
    }
}

pub fn is_pure<'a>(expr: &'a Expression<'a>) -> bool {
    expr.visit(&mut PurityCheck, ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::Arena;

    #[test]
    fn test_literals_and_reads_are_pure() {
        let arena = Arena::new();
        let b = AstBuilder::new(&arena);
        assert!(is_pure(b.int("1")));
        assert!(is_pure(b.char_lit("'x'")));
        assert!(is_pure(b.empty_expr()));
        assert!(is_pure(b.var("a")));
        assert!(is_pure(b.read(b.dot(b.simple("r"), "f"))));
    }

    #[test]
    fn test_operators_over_pure_operands() {
        let arena = Arena::new();
        let b = AstBuilder::new(&arena);
        let e = b.binary(b.unary("-", b.var("a")), "*", b.binary(b.var("b"), "+", b.int("2")));
        assert!(is_pure(e));
    }

    #[test]
    fn test_call_is_impure_at_any_depth() {
        let arena = Arena::new();
        let b = AstBuilder::new(&arena);
        let call = b.call_expr("f", &[ActualParameter::Const(b.var("a"))]);
        assert!(!is_pure(call));
        assert!(!is_pure(b.unary("-", b.binary(b.int("1"), "+", call))));
    }

    #[test]
    fn test_let_is_impure_at_any_depth() {
        let arena = Arena::new();
        let b = AstBuilder::new(&arena);
        let let_expr = b.let_expr(b.const_decl("k", b.int("1")), b.var("k"));
        assert!(!is_pure(let_expr));
        assert!(!is_pure(b.binary(b.var("a"), "+", let_expr)));
    }

    #[test]
    fn test_unlisted_kinds_default_to_impure() {
        let arena = Arena::new();
        let b = AstBuilder::new(&arena);
        assert!(!is_pure(b.if_expr(b.var("c"), b.int("1"), b.int("2"))));
        assert!(!is_pure(b.array(&[b.int("1"), b.int("2")])));
        assert!(!is_pure(b.record(&[("x", b.int("1"))])));
    }
}
