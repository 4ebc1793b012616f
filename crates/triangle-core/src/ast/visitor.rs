//! Double dispatch over the node families
//!
//! Each family enum has a `visit` method that does nothing but forward to the
//! handler for its variant, passing the variant and an auxiliary argument.
//! An algorithm implements the visitor traits for the families it walks and
//! keeps all of its logic in one place; it recurses by calling `visit` on the
//! children it cares about.
//!
//! Every handler is required. Adding a variant to a family breaks every
//! visitor of that family until it decides what the new node means.
//!
//! ```
//! use triangle_core::arena::Arena;
//! use triangle_core::ast::*;
//!
//! struct Depth;
//!
//! impl<'a> VnameVisitor<'a, (), usize> for Depth {
//!     fn visit_simple_vname(&mut self, _: &'a SimpleVname<'a>, _: ()) -> usize {
//!         1
//!     }
//!     fn visit_dot_vname(&mut self, v: &'a DotVname<'a>, _: ()) -> usize {
//!         1 + v.base.visit(self, ())
//!     }
//!     fn visit_subscript_vname(&mut self, v: &'a SubscriptVname<'a>, _: ()) -> usize {
//!         1 + v.base.visit(self, ())
//!     }
//! }
//!
//! let arena = Arena::new();
//! let b = AstBuilder::new(&arena);
//! let v = b.dot(b.simple("r"), "f");
//! assert_eq!(v.visit(&mut Depth, ()), 2);
//! ```

use super::command::*;
use super::declaration::*;
use super::expression::*;
use super::vname::*;

pub trait CommandVisitor<'a, A, R> {
    fn visit_assign_command(&mut self, command: &'a AssignCommand<'a>, arg: A) -> R;
    fn visit_call_command(&mut self, command: &'a CallCommand<'a>, arg: A) -> R;
    fn visit_empty_command(&mut self, command: &'a EmptyCommand, arg: A) -> R;
    fn visit_if_command(&mut self, command: &'a IfCommand<'a>, arg: A) -> R;
    fn visit_let_command(&mut self, command: &'a LetCommand<'a>, arg: A) -> R;
    fn visit_sequential_command(&mut self, command: &'a SequentialCommand<'a>, arg: A) -> R;
    fn visit_while_command(&mut self, command: &'a WhileCommand<'a>, arg: A) -> R;
}

pub trait DeclarationVisitor<'a, A, R> {
    fn visit_const_declaration(&mut self, decl: &'a ConstDeclaration<'a>, arg: A) -> R;
    fn visit_var_declaration(&mut self, decl: &'a VarDeclaration<'a>, arg: A) -> R;
    fn visit_proc_declaration(&mut self, decl: &'a ProcDeclaration<'a>, arg: A) -> R;
    fn visit_func_declaration(&mut self, decl: &'a FuncDeclaration<'a>, arg: A) -> R;
    fn visit_type_declaration(&mut self, decl: &'a TypeDeclaration<'a>, arg: A) -> R;
    fn visit_unary_operator_declaration(
        &mut self,
        decl: &'a UnaryOperatorDeclaration<'a>,
        arg: A,
    ) -> R;
    fn visit_binary_operator_declaration(
        &mut self,
        decl: &'a BinaryOperatorDeclaration<'a>,
        arg: A,
    ) -> R;
    fn visit_sequential_declaration(&mut self, decl: &'a SequentialDeclaration<'a>, arg: A)
        -> R;
}

pub trait ExpressionVisitor<'a, A, R> {
    fn visit_empty_expression(&mut self, expr: &'a EmptyExpression, arg: A) -> R;
    fn visit_integer_expression(&mut self, expr: &'a IntegerExpression<'a>, arg: A) -> R;
    fn visit_character_expression(&mut self, expr: &'a CharacterExpression<'a>, arg: A) -> R;
    fn visit_vname_expression(&mut self, expr: &'a VnameExpression<'a>, arg: A) -> R;
    fn visit_unary_expression(&mut self, expr: &'a UnaryExpression<'a>, arg: A) -> R;
    fn visit_binary_expression(&mut self, expr: &'a BinaryExpression<'a>, arg: A) -> R;
    fn visit_if_expression(&mut self, expr: &'a IfExpression<'a>, arg: A) -> R;
    fn visit_let_expression(&mut self, expr: &'a LetExpression<'a>, arg: A) -> R;
    fn visit_call_expression(&mut self, expr: &'a CallExpression<'a>, arg: A) -> R;
    fn visit_array_expression(&mut self, expr: &'a ArrayExpression<'a>, arg: A) -> R;
    fn visit_record_expression(&mut self, expr: &'a RecordExpression<'a>, arg: A) -> R;
}

pub trait VnameVisitor<'a, A, R> {
    fn visit_simple_vname(&mut self, vname: &'a SimpleVname<'a>, arg: A) -> R;
    fn visit_dot_vname(&mut self, vname: &'a DotVname<'a>, arg: A) -> R;
    fn visit_subscript_vname(&mut self, vname: &'a SubscriptVname<'a>, arg: A) -> R;
}

impl<'a> Command<'a> {
    pub fn visit<V, A, R>(&'a self, visitor: &mut V, arg: A) -> R
    where
        V: CommandVisitor<'a, A, R> + ?Sized,
    {
        match self {
            Command::Assign(c) => visitor.visit_assign_command(c, arg),
            Command::Call(c) => visitor.visit_call_command(c, arg),
            Command::Empty(c) => visitor.visit_empty_command(c, arg),
            Command::If(c) => visitor.visit_if_command(c, arg),
            Command::Let(c) => visitor.visit_let_command(c, arg),
            Command::Sequential(c) => visitor.visit_sequential_command(c, arg),
            Command::While(c) => visitor.visit_while_command(c, arg),
        }
    }
}

impl<'a> Declaration<'a> {
    pub fn visit<V, A, R>(&'a self, visitor: &mut V, arg: A) -> R
    where
        V: DeclarationVisitor<'a, A, R> + ?Sized,
    {
        match self {
            Declaration::Const(d) => visitor.visit_const_declaration(d, arg),
            Declaration::Var(d) => visitor.visit_var_declaration(d, arg),
            Declaration::Proc(d) => visitor.visit_proc_declaration(d, arg),
            Declaration::Func(d) => visitor.visit_func_declaration(d, arg),
            Declaration::Type(d) => visitor.visit_type_declaration(d, arg),
            Declaration::UnaryOperator(d) => visitor.visit_unary_operator_declaration(d, arg),
            Declaration::BinaryOperator(d) => visitor.visit_binary_operator_declaration(d, arg),
            Declaration::Sequential(d) => visitor.visit_sequential_declaration(d, arg),
        }
    }
}

impl<'a> Expression<'a> {
    pub fn visit<V, A, R>(&'a self, visitor: &mut V, arg: A) -> R
    where
        V: ExpressionVisitor<'a, A, R> + ?Sized,
    {
        match self {
            Expression::Empty(e) => visitor.visit_empty_expression(e, arg),
            Expression::Integer(e) => visitor.visit_integer_expression(e, arg),
            Expression::Character(e) => visitor.visit_character_expression(e, arg),
            Expression::Vname(e) => visitor.visit_vname_expression(e, arg),
            Expression::Unary(e) => visitor.visit_unary_expression(e, arg),
            Expression::Binary(e) => visitor.visit_binary_expression(e, arg),
            Expression::If(e) => visitor.visit_if_expression(e, arg),
            Expression::Let(e) => visitor.visit_let_expression(e, arg),
            Expression::Call(e) => visitor.visit_call_expression(e, arg),
            Expression::Array(e) => visitor.visit_array_expression(e, arg),
            Expression::Record(e) => visitor.visit_record_expression(e, arg),
        }
    }
}

impl<'a> Vname<'a> {
    pub fn visit<V, A, R>(&'a self, visitor: &mut V, arg: A) -> R
    where
        V: VnameVisitor<'a, A, R> + ?Sized,
    {
        match self {
            Vname::Simple(v) => visitor.visit_simple_vname(v, arg),
            Vname::Dot(v) => visitor.visit_dot_vname(v, arg),
            Vname::Subscript(v) => visitor.visit_subscript_vname(v, arg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::Arena;
    use crate::ast::AstBuilder;

    /// Records which handler each command dispatched to, with the argument it got
    struct Tracer {
        seen: Vec<(&'static str, u32)>,
    }

    impl<'a> CommandVisitor<'a, u32, ()> for Tracer {
        fn visit_assign_command(&mut self, _: &'a AssignCommand<'a>, arg: u32) {
            self.seen.push(("assign", arg));
        }
        fn visit_call_command(&mut self, _: &'a CallCommand<'a>, arg: u32) {
            self.seen.push(("call", arg));
        }
        fn visit_empty_command(&mut self, _: &'a EmptyCommand, arg: u32) {
            self.seen.push(("empty", arg));
        }
        fn visit_if_command(&mut self, c: &'a IfCommand<'a>, arg: u32) {
            self.seen.push(("if", arg));
            c.then_branch.visit(self, arg + 1);
            c.else_branch.visit(self, arg + 1);
        }
        fn visit_let_command(&mut self, c: &'a LetCommand<'a>, arg: u32) {
            self.seen.push(("let", arg));
            c.body.visit(self, arg + 1);
        }
        fn visit_sequential_command(&mut self, c: &'a SequentialCommand<'a>, arg: u32) {
            self.seen.push(("seq", arg));
            c.first.visit(self, arg + 1);
            c.second.visit(self, arg + 1);
        }
        fn visit_while_command(&mut self, c: &'a WhileCommand<'a>, arg: u32) {
            self.seen.push(("while", arg));
            c.body.visit(self, arg + 1);
        }
    }

    #[test]
    fn test_command_dispatch_reaches_matching_handler() {
        let arena = Arena::new();
        let b = AstBuilder::new(&arena);
        let program = b.seq(
            b.while_do(b.var("c"), b.if_then_else(b.var("c"), b.skip(), b.call("p", &[]))),
            b.assign(b.simple("x"), b.int("1")),
        );

        let mut tracer = Tracer { seen: Vec::new() };
        program.visit(&mut tracer, 0);

        assert_eq!(
            tracer.seen,
            vec![
                ("seq", 0),
                ("while", 1),
                ("if", 2),
                ("empty", 3),
                ("call", 3),
                ("assign", 1),
            ]
        );
    }
}
