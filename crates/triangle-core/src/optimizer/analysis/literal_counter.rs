use crate::ast::*;
use serde::Serialize;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiteralStats {
    pub integer_expressions: usize,
    pub character_expressions: usize,
}

/// Counts integer and character literal expressions across a whole program
///
/// Walks every family, including declaration bodies, call arguments,
/// aggregates and subscript indices. The tree is only read.
#[derive(Debug, Default)]
pub struct LiteralCounter {
    stats: LiteralStats,
}

impl LiteralCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count<'a>(program: &'a Program<'a>) -> LiteralStats {
        let mut counter = LiteralCounter::new();
        program.command.visit(&mut counter, ());
        counter.stats
    }

    pub fn stats(&self) -> LiteralStats {
        self.stats
    }

    fn visit_arguments<'a>(&mut self, arguments: &'a [ActualParameter<'a>]) {
        for argument in arguments {
            match argument {
                ActualParameter::Const(expr) => expr.visit(self, ()),
                ActualParameter::Var(vname) => vname.visit(self, ()),
                ActualParameter::Proc(_) | ActualParameter::Func(_) => {}
            }
        }
    }
}

impl<'a> CommandVisitor<'a, (), ()> for LiteralCounter {
    fn visit_assign_command(&mut self, command: &'a AssignCommand<'a>, _: ()) {
        command.target.visit(self, ());
        command.value.visit(self, ());
    }

    fn visit_call_command(&mut self, command: &'a CallCommand<'a>, _: ()) {
        self.visit_arguments(command.arguments);
    }

    fn visit_empty_command(&mut self, _: &'a EmptyCommand, _: ()) {}

    fn visit_if_command(&mut self, command: &'a IfCommand<'a>, _: ()) {
        command.condition.visit(self, ());
        command.then_branch.visit(self, ());
        command.else_branch.visit(self, ());
    }

    fn visit_let_command(&mut self, command: &'a LetCommand<'a>, _: ()) {
        command.declaration.visit(self, ());
        command.body.visit(self, ());
    }

    fn visit_sequential_command(&mut self, command: &'a SequentialCommand<'a>, _: ()) {
        command.first.visit(self, ());
        command.second.visit(self, ());
    }

    fn visit_while_command(&mut self, command: &'a WhileCommand<'a>, _: ()) {
        command.condition.visit(self, ());
        command.body.visit(self, ());
    }
}

impl<'a> DeclarationVisitor<'a, (), ()> for LiteralCounter {
    fn visit_const_declaration(&mut self, decl: &'a ConstDeclaration<'a>, _: ()) {
        decl.value.visit(self, ());
    }

    fn visit_var_declaration(&mut self, _: &'a VarDeclaration<'a>, _: ()) {}

    fn visit_proc_declaration(&mut self, decl: &'a ProcDeclaration<'a>, _: ()) {
        decl.body.visit(self, ());
    }

    fn visit_func_declaration(&mut self, decl: &'a FuncDeclaration<'a>, _: ()) {
        decl.body.visit(self, ());
    }

    fn visit_type_declaration(&mut self, _: &'a TypeDeclaration<'a>, _: ()) {}

    fn visit_unary_operator_declaration(&mut self, _: &'a UnaryOperatorDeclaration<'a>, _: ()) {}

    fn visit_binary_operator_declaration(
        &mut self,
        _: &'a BinaryOperatorDeclaration<'a>,
        _: (),
    ) {
    }

    fn visit_sequential_declaration(&mut self, decl: &'a SequentialDeclaration<'a>, _: ()) {
        decl.first.visit(self, ());
        decl.second.visit(self, ());
    }
}

impl<'a> ExpressionVisitor<'a, (), ()> for LiteralCounter {
    fn visit_empty_expression(&mut self, _: &'a EmptyExpression, _: ()) {}

    fn visit_integer_expression(&mut self, _: &'a IntegerExpression<'a>, _: ()) {
        self.stats.integer_expressions += 1;
    }

    fn visit_character_expression(&mut self, _: &'a CharacterExpression<'a>, _: ()) {
        self.stats.character_expressions += 1;
    }

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
        expr.declaration.visit(self, ());
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

impl<'a> VnameVisitor<'a, (), ()> for LiteralCounter {
    fn visit_simple_vname(&mut self, _: &'a SimpleVname<'a>, _: ()) {}

    fn visit_dot_vname(&mut self, vname: &'a DotVname<'a>, _: ()) {
        vname.base.visit(self, ());
    }

    fn visit_subscript_vname(&mut self, vname: &'a SubscriptVname<'a>, _: ()) {
        vname.base.visit(self, ());
        vname.index.visit(self, ());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::Arena;

    #[test]
    fn test_counts_literals_everywhere() {
        let arena = Arena::new();
        let b = AstBuilder::new(&arena);
        let decls = b.seq_decl(
            b.const_decl("k", b.int("10")),
            b.func_decl(
                "f",
                &[b.const_param("x", b.simple_type("Integer"))],
                b.simple_type("Char"),
                b.char_lit("'y'"),
            ),
        );
        let body = b.seq_all(&[
            b.assign(b.subscript(b.simple("a"), b.int("0")), b.int("1")),
            b.call("put", &[ActualParameter::Const(b.char_lit("'z'"))]),
            b.while_do(
                b.binary(b.var("i"), "<", b.int("3")),
                b.assign(b.simple("r"), b.array(&[b.int("4"), b.int("5")])),
            ),
        ]);
        let program = b.program(b.let_in(decls, body));

        let stats = LiteralCounter::count(program);
        assert_eq!(stats.integer_expressions, 6);
        assert_eq!(stats.character_expressions, 2);
    }

    #[test]
    fn test_empty_program_counts_nothing() {
        let arena = Arena::new();
        let b = AstBuilder::new(&arena);
        let program = b.program(b.skip());
        assert_eq!(LiteralCounter::count(program), LiteralStats::default());
    }
}
