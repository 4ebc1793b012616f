use super::NameSet;
use crate::ast::*;

/// Collects the base identifiers an expression reads
///
/// A read of `a[i]` contributes both `a` and the variables of `i`. A `let`
/// expression contributes only the variables of its body; its declaration is
/// not analysed.
///
/// Counting index variables is stricter than a base-only rule on purpose.
#[derive(Debug, Default)]
pub struct FreeVariableCollector<'a> {
    free: NameSet<'a>,
}

impl<'a> FreeVariableCollector<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_free(self) -> NameSet<'a> {
        self.free
    }

    fn visit_arguments(&mut self, arguments: &'a [ActualParameter<'a>]) {
        for argument in arguments {
            match argument {
                ActualParameter::Const(expr) => expr.visit(self, ()),
                ActualParameter::Var(vname) => vname.visit(self, ()),
                ActualParameter::Proc(_) | ActualParameter::Func(_) => {}
            }
        }
    }
}

impl<'a> ExpressionVisitor<'a, (), ()> for FreeVariableCollector<'a> {
    fn visit_empty_expression(&mut self, _: &'a EmptyExpression, _: ()) {}

    fn visit_integer_expression(&mut self, _: &'a IntegerExpression<'a>, _: ()) {}

    fn visit_character_expression(&mut self, _: &'a CharacterExpression<'a>, _: ()) {}

    fn visit_vname_expression(&mut self, expr: &'a VnameExpression<'a>, _: ()) {
        expr.vname.visit(self, ());
    }

    fn visit_unary_expression(&mut self, expr: &'a UnaryExpression<'a>, _: ()) {
        expr.operand.visit(self, ());
    }

    fn visit_binary_expression(&mut self, expr: &'a BinaryExpression<'a>, _: ()) {
        expr.left.visit(self, ());
        expr.right.visit(self, ());
    }

    fn visit_if_expression(&mut self, expr: &'a IfExpression<'a>, _: ()) {
        expr.condition.visit(self, ());
        expr.then_branch.visit(self, ());
        expr.else_branch.visit(self, ());
    }

    fn visit_let_expression(&mut self, expr: &'a LetExpression<'a>, _: ()) {
        expr.body.visit(self, ());
    }

    fn visit_call_expression(&mut self, expr: &'a CallExpression<'a>, _: ()) {
        self.visit_arguments(expr.arguments);
    }

    fn visit_array_expression(&mut self, expr: &'a ArrayExpression<'a>, _: ()) {
        for element in expr.elements {
            element.visit(self, ());
        }
    }

    fn visit_record_expression(&mut self, expr: &'a RecordExpression<'a>, _: ()) {
        for field in expr.fields {
            field.value.visit(self, ());
        }
    }
}

impl<'a> VnameVisitor<'a, (), ()> for FreeVariableCollector<'a> {
    fn visit_simple_vname(&mut self, vname: &'a SimpleVname<'a>, _: ()) {
        self.free.insert(vname.name.spelling);
    }

    fn visit_dot_vname(&mut self, vname: &'a DotVname<'a>, _: ()) {
        vname.base.visit(self, ());
    }

    fn visit_subscript_vname(&mut self, vname: &'a SubscriptVname<'a>, _: ()) {
        vname.base.visit(self, ());
        vname.index.visit(self, ());
    }
}

pub fn free_vars<'a>(expr: &'a Expression<'a>) -> NameSet<'a> {
    let mut collector = FreeVariableCollector::new();
    expr.visit(&mut collector, ());
    collector.into_free()
}

/// True when none of the variables `expr` reads is in `assigned`
pub fn is_invariant<'a>(expr: &'a Expression<'a>, assigned: &NameSet<'_>) -> bool {
    free_vars(expr).is_disjoint(assigned)
}
