//! Renders trees back into Triangle concrete syntax on a single line
//!
//! The output is meant for logs, diagnostics and tests rather than for
//! round-tripping through a parser, but it follows the Triangle grammar:
//! a sequence nested inside a structured command is bracketed with
//! `begin ... end`, and a binary operand that is itself a binary
//! expression is parenthesised.

use crate::ast::*;

#[derive(Debug, Default)]
pub struct Printer {
    out: String,
}

impl Printer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn write(&mut self, text: &str) {
        self.out.push_str(text);
    }

    /// A command in a position where a bare sequence would bind wrongly
    fn nested_command<'a>(&mut self, command: &'a Command<'a>) {
        if let Command::Sequential(_) = command {
            self.write("begin ");
            command.visit(self, ());
            self.write(" end");
        } else {
            command.visit(self, ());
        }
    }

    fn operand<'a>(&mut self, expr: &'a Expression<'a>) {
        if let Expression::Binary(_) = expr {
            self.write("(");
            expr.visit(self, ());
            self.write(")");
        } else {
            expr.visit(self, ());
        }
    }

    fn actual_parameters<'a>(&mut self, arguments: &'a [ActualParameter<'a>]) {
        self.write("(");
        for (i, argument) in arguments.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            match argument {
                ActualParameter::Const(expr) => expr.visit(self, ()),
                ActualParameter::Var(vname) => {
                    self.write("var ");
                    vname.visit(self, ());
                }
                ActualParameter::Proc(name) => {
                    self.write("proc ");
                    self.write(name.spelling);
                }
                ActualParameter::Func(name) => {
                    self.write("func ");
                    self.write(name.spelling);
                }
            }
        }
        self.write(")");
    }

    fn formal_parameters<'a>(&mut self, parameters: &'a [FormalParameter<'a>]) {
        self.write("(");
        for (i, parameter) in parameters.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            match parameter {
                FormalParameter::Const { name, ty } => {
                    self.write(name.spelling);
                    self.write(" : ");
                    self.type_denoter(ty);
                }
                FormalParameter::Var { name, ty } => {
                    self.write("var ");
                    self.write(name.spelling);
                    self.write(" : ");
                    self.type_denoter(ty);
                }
                FormalParameter::Proc { name, parameters } => {
                    self.write("proc ");
                    self.write(name.spelling);
                    self.formal_parameters(parameters);
                }
                FormalParameter::Func {
                    name,
                    parameters,
                    result,
                } => {
                    self.write("func ");
                    self.write(name.spelling);
                    self.formal_parameters(parameters);
                    self.write(" : ");
                    self.type_denoter(result);
                }
            }
        }
        self.write(")");
    }

    fn type_denoter<'a>(&mut self, ty: &'a TypeDenoter<'a>) {
        match ty {
            TypeDenoter::Simple(name) => self.write(name.spelling),
            TypeDenoter::Array { length, element } => {
                self.write("array ");
                self.write(length.spelling);
                self.write(" of ");
                self.type_denoter(element);
            }
            TypeDenoter::Record(fields) => {
                self.write("record ");
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.write(field.name.spelling);
                    self.write(" : ");
                    self.type_denoter(field.ty);
                }
                self.write(" end");
            }
        }
    }
}

impl<'a> CommandVisitor<'a, (), ()> for Printer {
    fn visit_assign_command(&mut self, command: &'a AssignCommand<'a>, _: ()) {
        command.target.visit(self, ());
        self.write(" := ");
        command.value.visit(self, ());
    }

    fn visit_call_command(&mut self, command: &'a CallCommand<'a>, _: ()) {
        self.write(command.procedure.spelling);
        self.actual_parameters(command.arguments);
    }

    fn visit_empty_command(&mut self, _: &'a EmptyCommand, _: ()) {}

    fn visit_if_command(&mut self, command: &'a IfCommand<'a>, _: ()) {
        self.write("if ");
        command.condition.visit(self, ());
        self.write(" then ");
        self.nested_command(command.then_branch);
        self.write(" else ");
        self.nested_command(command.else_branch);
    }

    fn visit_let_command(&mut self, command: &'a LetCommand<'a>, _: ()) {
        self.write("let ");
        command.declaration.visit(self, ());
        self.write(" in ");
        self.nested_command(command.body);
    }

    fn visit_sequential_command(&mut self, command: &'a SequentialCommand<'a>, _: ()) {
        command.first.visit(self, ());
        self.write("; ");
        command.second.visit(self, ());
    }

    fn visit_while_command(&mut self, command: &'a WhileCommand<'a>, _: ()) {
        self.write("while ");
        command.condition.visit(self, ());
        self.write(" do ");
        self.nested_command(command.body);
    }
}

impl<'a> DeclarationVisitor<'a, (), ()> for Printer {
    fn visit_const_declaration(&mut self, decl: &'a ConstDeclaration<'a>, _: ()) {
        self.write("const ");
        self.write(decl.name.spelling);
        self.write(" ~ ");
        decl.value.visit(self, ());
    }

    fn visit_var_declaration(&mut self, decl: &'a VarDeclaration<'a>, _: ()) {
        self.write("var ");
        self.write(decl.name.spelling);
        self.write(" : ");
        self.type_denoter(decl.ty);
    }

    fn visit_proc_declaration(&mut self, decl: &'a ProcDeclaration<'a>, _: ()) {
        self.write("proc ");
        self.write(decl.name.spelling);
        self.formal_parameters(decl.parameters);
        self.write(" ~ ");
        self.nested_command(decl.body);
    }

    fn visit_func_declaration(&mut self, decl: &'a FuncDeclaration<'a>, _: ()) {
        self.write("func ");
        self.write(decl.name.spelling);
        self.formal_parameters(decl.parameters);
        self.write(" : ");
        self.type_denoter(decl.result);
        self.write(" ~ ");
        decl.body.visit(self, ());
    }

    fn visit_type_declaration(&mut self, decl: &'a TypeDeclaration<'a>, _: ()) {
        self.write("type ");
        self.write(decl.name.spelling);
        self.write(" ~ ");
        self.type_denoter(decl.ty);
    }

    fn visit_unary_operator_declaration(
        &mut self,
        decl: &'a UnaryOperatorDeclaration<'a>,
        _: (),
    ) {
        self.write("operator ");
        self.write(decl.operator.spelling);
        self.write(" (");
        self.type_denoter(decl.argument);
        self.write(") : ");
        self.type_denoter(decl.result);
    }

    fn visit_binary_operator_declaration(
        &mut self,
        decl: &'a BinaryOperatorDeclaration<'a>,
        _: (),
    ) {
        self.write("operator ");
        self.write(decl.operator.spelling);
        self.write(" (");
        self.type_denoter(decl.left);
        self.write(", ");
        self.type_denoter(decl.right);
        self.write(") : ");
        self.type_denoter(decl.result);
    }

    fn visit_sequential_declaration(&mut self, decl: &'a SequentialDeclaration<'a>, _: ()) {
        decl.first.visit(self, ());
        self.write("; ");
        decl.second.visit(self, ());
    }
}

impl<'a> ExpressionVisitor<'a, (), ()> for Printer {
    fn visit_empty_expression(&mut self, _: &'a EmptyExpression, _: ()) {}

    fn visit_integer_expression(&mut self, expr: &'a IntegerExpression<'a>, _: ()) {
        self.write(expr.literal.spelling);
    }

    fn visit_character_expression(&mut self, expr: &'a CharacterExpression<'a>, _: ()) {
        self.write(expr.literal.spelling);
    }

    fn visit_vname_expression(&mut self, expr: &'a VnameExpression<'a>, _: ()) {
        expr.vname.visit(self, ());
    }

    fn visit_unary_expression(&mut self, expr: &'a UnaryExpression<'a>, _: ()) {
        self.write(expr.operator.spelling);
        self.operand(expr.operand);
    }

    fn visit_binary_expression(&mut self, expr: &'a BinaryExpression<'a>, _: ()) {
        self.operand(expr.left);
        self.write(" ");
        self.write(expr.operator.spelling);
        self.write(" ");
        self.operand(expr.right);
    }

    fn visit_if_expression(&mut self, expr: &'a IfExpression<'a>, _: ()) {
        self.write("if ");
        expr.condition.visit(self, ());
        self.write(" then ");
        expr.then_branch.visit(self, ());
        self.write(" else ");
        expr.else_branch.visit(self, ());
    }

    fn visit_let_expression(&mut self, expr: &'a LetExpression<'a>, _: ()) {
        self.write("let ");
        expr.declaration.visit(self, ());
        self.write(" in ");
        expr.body.visit(self, ());
    }

    fn visit_call_expression(&mut self, expr: &'a CallExpression<'a>, _: ()) {
        self.write(expr.function.spelling);
        self.actual_parameters(expr.arguments);
    }

    fn visit_array_expression(&mut self, expr: &'a ArrayExpression<'a>, _: ()) {
        self.write("[");
        for (i, element) in expr.elements.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            element.visit(self, ());
        }
        self.write("]");
    }

    fn visit_record_expression(&mut self, expr: &'a RecordExpression<'a>, _: ()) {
        self.write("{");
        for (i, field) in expr.fields.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.write(field.name.spelling);
            self.write(" ~ ");
            field.value.visit(self, ());
        }
        self.write("}");
    }
}

impl<'a> VnameVisitor<'a, (), ()> for Printer {
    fn visit_simple_vname(&mut self, vname: &'a SimpleVname<'a>, _: ()) {
        self.write(vname.name.spelling);
    }

    fn visit_dot_vname(&mut self, vname: &'a DotVname<'a>, _: ()) {
        vname.base.visit(self, ());
        self.write(".");
        self.write(vname.field.spelling);
    }

    fn visit_subscript_vname(&mut self, vname: &'a SubscriptVname<'a>, _: ()) {
        vname.base.visit(self, ());
        self.write("[");
        vname.index.visit(self, ());
        self.write("]");
    }
}

pub fn print_program<'a>(program: &'a Program<'a>) -> String {
    print_command(program.command)
}

pub fn print_command<'a>(command: &'a Command<'a>) -> String {
    let mut printer = Printer::new();
    command.visit(&mut printer, ());
    printer.finish()
}

pub fn print_declaration<'a>(declaration: &'a Declaration<'a>) -> String {
    let mut printer = Printer::new();
    declaration.visit(&mut printer, ());
    printer.finish()
}

pub fn print_expression<'a>(expr: &'a Expression<'a>) -> String {
    let mut printer = Printer::new();
    expr.visit(&mut printer, ());
    printer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::Arena;

    #[test]
    fn test_print_binary_parenthesises_nested_operands() {
        let arena = Arena::new();
        let b = AstBuilder::new(&arena);
        let e = b.binary(b.binary(b.var("a"), "+", b.int("1")), "*", b.unary("-", b.var("b")));
        assert_eq!(print_expression(e), "(a + 1) * -b");
    }

    #[test]
    fn test_print_vnames() {
        let arena = Arena::new();
        let b = AstBuilder::new(&arena);
        let v = b.dot(b.subscript(b.simple("a"), b.var("i")), "f");
        assert_eq!(print_expression(b.read(v)), "a[i].f");
    }

    #[test]
    fn test_print_while_wraps_sequence_body() {
        let arena = Arena::new();
        let b = AstBuilder::new(&arena);
        let body = b.seq(
            b.assign(b.simple("b"), b.var("$h1")),
            b.assign(b.simple("c"), b.binary(b.var("c"), "+", b.int("1"))),
        );
        let program = b.program(b.let_in(
            b.const_decl("$h1", b.binary(b.var("a"), "+", b.int("1"))),
            b.while_do(b.binary(b.var("i"), "<", b.var("n")), body),
        ));
        assert_eq!(
            print_program(program),
            "let const $h1 ~ a + 1 in while i < n do begin b := $h1; c := c + 1 end"
        );
    }

    #[test]
    fn test_print_declarations() {
        let arena = Arena::new();
        let b = AstBuilder::new(&arena);
        let int = b.simple_type("Integer");
        let decl = b.seq_decl(
            b.var_decl("xs", b.array_type("10", int)),
            b.seq_decl(
                b.type_decl("Point", b.record_type(&[("x", int), ("y", int)])),
                b.proc_decl(
                    "inc",
                    &[b.var_param("n", int)],
                    b.assign(b.simple("n"), b.binary(b.var("n"), "+", b.int("1"))),
                ),
            ),
        );
        assert_eq!(
            print_declaration(decl),
            "var xs : array 10 of Integer; type Point ~ record x : Integer, y : Integer end; \
             proc inc(var n : Integer) ~ n := n + 1"
        );
    }

    #[test]
    fn test_print_calls_and_aggregates() {
        let arena = Arena::new();
        let b = AstBuilder::new(&arena);
        let command = b.call(
            "put",
            &[
                ActualParameter::Const(b.char_lit("'x'")),
                ActualParameter::Var(b.simple("v")),
            ],
        );
        assert_eq!(print_command(command), "put('x', var v)");
        let record = b.record(&[("x", b.int("1")), ("y", b.array(&[b.int("2"), b.int("3")]))]);
        assert_eq!(print_expression(record), "{x ~ 1, y ~ [2, 3]}");
    }
}
