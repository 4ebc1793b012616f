//! Arena-backed constructors for AST nodes
//!
//! All names passed in are copied into the arena, so callers never have to
//! thread lifetimes through string arguments. Every node built by one
//! builder carries the builder's span; [`AstBuilder::new`] uses
//! [`Span::dummy`], which is what the optimiser stamps on nodes it creates.

use super::*;
use crate::arena::Arena;
use crate::span::Span;

#[derive(Clone, Copy)]
pub struct AstBuilder<'a> {
    arena: &'a Arena,
    span: Span,
}

impl<'a> AstBuilder<'a> {
    pub fn new(arena: &'a Arena) -> Self {
        AstBuilder {
            arena,
            span: Span::dummy(),
        }
    }

    /// A builder that stamps `span` on every node it creates
    pub fn at(&self, span: Span) -> Self {
        AstBuilder {
            arena: self.arena,
            span,
        }
    }

    pub fn program(&self, command: &'a Command<'a>) -> &'a Program<'a> {
        self.arena.alloc(Program::new(command, self.span))
    }

    // Terminals

    pub fn identifier(&self, spelling: &str) -> Identifier<'a> {
        Identifier::new(self.arena.alloc_str(spelling), self.span)
    }

    pub fn operator(&self, spelling: &str) -> Operator<'a> {
        Operator::new(self.arena.alloc_str(spelling), self.span)
    }

    // Vnames

    pub fn simple(&self, name: &str) -> &'a Vname<'a> {
        self.simple_from(self.identifier(name))
    }

    pub fn simple_from(&self, name: Identifier<'a>) -> &'a Vname<'a> {
        self.arena.alloc(Vname::Simple(SimpleVname {
            name,
            span: self.span,
        }))
    }

    pub fn dot(&self, base: &'a Vname<'a>, field: &str) -> &'a Vname<'a> {
        self.arena.alloc(Vname::Dot(DotVname {
            base,
            field: self.identifier(field),
            span: self.span,
        }))
    }

    pub fn subscript(&self, base: &'a Vname<'a>, index: &'a Expression<'a>) -> &'a Vname<'a> {
        self.arena.alloc(Vname::Subscript(SubscriptVname {
            base,
            index,
            span: self.span,
        }))
    }

    // Expressions

    pub fn empty_expr(&self) -> &'a Expression<'a> {
        self.arena
            .alloc(Expression::Empty(EmptyExpression { span: self.span }))
    }

    pub fn int(&self, spelling: &str) -> &'a Expression<'a> {
        self.arena.alloc(Expression::Integer(IntegerExpression {
            literal: IntegerLiteral::new(self.arena.alloc_str(spelling), self.span),
            span: self.span,
        }))
    }

    /// Character literal; `spelling` includes the quotes, e.g. `'a'`
    pub fn char_lit(&self, spelling: &str) -> &'a Expression<'a> {
        self.arena.alloc(Expression::Character(CharacterExpression {
            literal: CharacterLiteral::new(self.arena.alloc_str(spelling), self.span),
            span: self.span,
        }))
    }

    pub fn read(&self, vname: &'a Vname<'a>) -> &'a Expression<'a> {
        self.arena.alloc(Expression::Vname(VnameExpression {
            vname,
            span: self.span,
        }))
    }

    /// Read of a simple variable
    pub fn var(&self, name: &str) -> &'a Expression<'a> {
        self.read(self.simple(name))
    }

    pub fn unary(&self, op: &str, operand: &'a Expression<'a>) -> &'a Expression<'a> {
        self.arena.alloc(Expression::Unary(UnaryExpression {
            operator: self.operator(op),
            operand,
            span: self.span,
        }))
    }

    pub fn binary(
        &self,
        left: &'a Expression<'a>,
        op: &str,
        right: &'a Expression<'a>,
    ) -> &'a Expression<'a> {
        self.arena.alloc(Expression::Binary(BinaryExpression {
            operator: self.operator(op),
            left,
            right,
            span: self.span,
        }))
    }

    pub fn if_expr(
        &self,
        condition: &'a Expression<'a>,
        then_branch: &'a Expression<'a>,
        else_branch: &'a Expression<'a>,
    ) -> &'a Expression<'a> {
        self.arena.alloc(Expression::If(IfExpression {
            condition,
            then_branch,
            else_branch,
            span: self.span,
        }))
    }

    pub fn let_expr(
        &self,
        declaration: &'a Declaration<'a>,
        body: &'a Expression<'a>,
    ) -> &'a Expression<'a> {
        self.arena.alloc(Expression::Let(LetExpression {
            declaration,
            body,
            span: self.span,
        }))
    }

    pub fn call_expr(
        &self,
        function: &str,
        arguments: &[ActualParameter<'a>],
    ) -> &'a Expression<'a> {
        self.arena.alloc(Expression::Call(CallExpression {
            function: self.identifier(function),
            arguments: self.arena.alloc_slice_fill_iter(arguments.iter().cloned()),
            span: self.span,
        }))
    }

    pub fn array(&self, elements: &[&'a Expression<'a>]) -> &'a Expression<'a> {
        self.arena.alloc(Expression::Array(ArrayExpression {
            elements: self.arena.alloc_slice_copy(elements),
            span: self.span,
        }))
    }

    pub fn record(&self, fields: &[(&str, &'a Expression<'a>)]) -> &'a Expression<'a> {
        let fields = fields.iter().map(|&(name, value)| RecordField {
            name: self.identifier(name),
            value,
        });
        self.arena.alloc(Expression::Record(RecordExpression {
            fields: self.arena.alloc_slice_fill_iter(fields),
            span: self.span,
        }))
    }

    // Commands

    pub fn assign(&self, target: &'a Vname<'a>, value: &'a Expression<'a>) -> &'a Command<'a> {
        self.arena.alloc(Command::Assign(AssignCommand {
            target,
            value,
            span: self.span,
        }))
    }

    pub fn call(&self, procedure: &str, arguments: &[ActualParameter<'a>]) -> &'a Command<'a> {
        self.arena.alloc(Command::Call(CallCommand {
            procedure: self.identifier(procedure),
            arguments: self.arena.alloc_slice_fill_iter(arguments.iter().cloned()),
            span: self.span,
        }))
    }

    /// The empty command
    pub fn skip(&self) -> &'a Command<'a> {
        self.arena
            .alloc(Command::Empty(EmptyCommand { span: self.span }))
    }

    pub fn if_then_else(
        &self,
        condition: &'a Expression<'a>,
        then_branch: &'a Command<'a>,
        else_branch: &'a Command<'a>,
    ) -> &'a Command<'a> {
        self.arena.alloc(Command::If(IfCommand {
            condition,
            then_branch,
            else_branch,
            span: self.span,
        }))
    }

    pub fn let_in(
        &self,
        declaration: &'a Declaration<'a>,
        body: &'a Command<'a>,
    ) -> &'a Command<'a> {
        self.arena.alloc(Command::Let(LetCommand {
            declaration,
            body,
            span: self.span,
        }))
    }

    pub fn seq(&self, first: &'a Command<'a>, second: &'a Command<'a>) -> &'a Command<'a> {
        self.arena.alloc(Command::Sequential(SequentialCommand {
            first,
            second,
            span: self.span,
        }))
    }

    /// Right-nested sequence of `commands`; the empty command when there are none
    pub fn seq_all(&self, commands: &[&'a Command<'a>]) -> &'a Command<'a> {
        match commands.split_last() {
            None => self.skip(),
            Some((last, rest)) => rest
                .iter()
                .rev()
                .fold(*last, |acc, &command| self.seq(command, acc)),
        }
    }

    pub fn while_do(
        &self,
        condition: &'a Expression<'a>,
        body: &'a Command<'a>,
    ) -> &'a Command<'a> {
        self.arena.alloc(Command::While(WhileCommand {
            condition,
            body,
            span: self.span,
        }))
    }

    // Declarations

    pub fn const_decl(&self, name: &str, value: &'a Expression<'a>) -> &'a Declaration<'a> {
        self.const_decl_from(self.identifier(name), value)
    }

    pub fn const_decl_from(
        &self,
        name: Identifier<'a>,
        value: &'a Expression<'a>,
    ) -> &'a Declaration<'a> {
        self.arena.alloc(Declaration::Const(ConstDeclaration {
            name,
            value,
            span: self.span,
        }))
    }

    pub fn var_decl(&self, name: &str, ty: &'a TypeDenoter<'a>) -> &'a Declaration<'a> {
        self.arena.alloc(Declaration::Var(VarDeclaration {
            name: self.identifier(name),
            ty,
            span: self.span,
        }))
    }

    pub fn proc_decl(
        &self,
        name: &str,
        parameters: &[FormalParameter<'a>],
        body: &'a Command<'a>,
    ) -> &'a Declaration<'a> {
        self.arena.alloc(Declaration::Proc(ProcDeclaration {
            name: self.identifier(name),
            parameters: self.arena.alloc_slice_fill_iter(parameters.iter().cloned()),
            body,
            span: self.span,
        }))
    }

    pub fn func_decl(
        &self,
        name: &str,
        parameters: &[FormalParameter<'a>],
        result: &'a TypeDenoter<'a>,
        body: &'a Expression<'a>,
    ) -> &'a Declaration<'a> {
        self.arena.alloc(Declaration::Func(FuncDeclaration {
            name: self.identifier(name),
            parameters: self.arena.alloc_slice_fill_iter(parameters.iter().cloned()),
            result,
            body,
            span: self.span,
        }))
    }

    pub fn type_decl(&self, name: &str, ty: &'a TypeDenoter<'a>) -> &'a Declaration<'a> {
        self.arena.alloc(Declaration::Type(TypeDeclaration {
            name: self.identifier(name),
            ty,
            span: self.span,
        }))
    }

    pub fn unary_operator_decl(
        &self,
        op: &str,
        argument: &'a TypeDenoter<'a>,
        result: &'a TypeDenoter<'a>,
    ) -> &'a Declaration<'a> {
        self.arena
            .alloc(Declaration::UnaryOperator(UnaryOperatorDeclaration {
                operator: self.operator(op),
                argument,
                result,
                span: self.span,
            }))
    }

    pub fn binary_operator_decl(
        &self,
        op: &str,
        left: &'a TypeDenoter<'a>,
        right: &'a TypeDenoter<'a>,
        result: &'a TypeDenoter<'a>,
    ) -> &'a Declaration<'a> {
        self.arena
            .alloc(Declaration::BinaryOperator(BinaryOperatorDeclaration {
                operator: self.operator(op),
                left,
                right,
                result,
                span: self.span,
            }))
    }

    pub fn seq_decl(
        &self,
        first: &'a Declaration<'a>,
        second: &'a Declaration<'a>,
    ) -> &'a Declaration<'a> {
        self.arena.alloc(Declaration::Sequential(SequentialDeclaration {
            first,
            second,
            span: self.span,
        }))
    }

    // Parameters and types

    pub fn const_param(&self, name: &str, ty: &'a TypeDenoter<'a>) -> FormalParameter<'a> {
        FormalParameter::Const {
            name: self.identifier(name),
            ty,
        }
    }

    pub fn var_param(&self, name: &str, ty: &'a TypeDenoter<'a>) -> FormalParameter<'a> {
        FormalParameter::Var {
            name: self.identifier(name),
            ty,
        }
    }

    pub fn proc_param(
        &self,
        name: &str,
        parameters: &[FormalParameter<'a>],
    ) -> FormalParameter<'a> {
        FormalParameter::Proc {
            name: self.identifier(name),
            parameters: self.arena.alloc_slice_fill_iter(parameters.iter().cloned()),
        }
    }

    pub fn func_param(
        &self,
        name: &str,
        parameters: &[FormalParameter<'a>],
        result: &'a TypeDenoter<'a>,
    ) -> FormalParameter<'a> {
        FormalParameter::Func {
            name: self.identifier(name),
            parameters: self.arena.alloc_slice_fill_iter(parameters.iter().cloned()),
            result,
        }
    }

    pub fn simple_type(&self, name: &str) -> &'a TypeDenoter<'a> {
        self.arena.alloc(TypeDenoter::Simple(self.identifier(name)))
    }

    pub fn array_type(&self, length: &str, element: &'a TypeDenoter<'a>) -> &'a TypeDenoter<'a> {
        self.arena.alloc(TypeDenoter::Array {
            length: IntegerLiteral::new(self.arena.alloc_str(length), self.span),
            element,
        })
    }

    pub fn record_type(&self, fields: &[(&str, &'a TypeDenoter<'a>)]) -> &'a TypeDenoter<'a> {
        let fields = fields.iter().map(|&(name, ty)| FieldType {
            name: self.identifier(name),
            ty,
        });
        self.arena
            .alloc(TypeDenoter::Record(self.arena.alloc_slice_fill_iter(fields)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_uses_dummy_span_by_default() {
        let arena = Arena::new();
        let b = AstBuilder::new(&arena);
        assert!(b.skip().span().is_dummy());
    }

    #[test]
    fn test_builder_at_span() {
        let arena = Arena::new();
        let span = Span::new(3, 8, 2, 4);
        let b = AstBuilder::new(&arena).at(span);
        let cmd = b.assign(b.simple("x"), b.int("1"));
        assert_eq!(cmd.span(), span);
    }

    #[test]
    fn test_seq_all_nests_to_the_right() {
        let arena = Arena::new();
        let b = AstBuilder::new(&arena);
        let one = b.call("a", &[]);
        let two = b.call("b", &[]);
        let three = b.call("c", &[]);
        let seq = b.seq_all(&[one, two, three]);

        let Command::Sequential(outer) = seq else {
            panic!("expected sequential, got {:?}", seq);
        };
        assert!(same_node(outer.first, one));
        let Command::Sequential(inner) = outer.second else {
            panic!("expected nested sequential");
        };
        assert!(same_node(inner.first, two));
        assert!(same_node(inner.second, three));
    }

    #[test]
    fn test_seq_all_empty_is_skip() {
        let arena = Arena::new();
        let b = AstBuilder::new(&arena);
        assert!(matches!(b.seq_all(&[]), Command::Empty(_)));
    }

    #[test]
    fn test_flatten_declarations() {
        let arena = Arena::new();
        let b = AstBuilder::new(&arena);
        let d1 = b.const_decl("a", b.int("1"));
        let d2 = b.const_decl("b", b.int("2"));
        let d3 = b.var_decl("c", b.simple_type("Integer"));
        let chain = b.seq_decl(b.seq_decl(d1, d2), d3);
        let flat = chain.flatten();
        assert_eq!(flat.len(), 3);
        assert!(same_node(flat[0], d1));
        assert!(same_node(flat[1], d2));
        assert!(same_node(flat[2], d3));
    }
}
