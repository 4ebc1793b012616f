use super::NameSet;
use crate::ast::*;

/// Resolves a vname to the variable it ultimately names: `a`, `a[i]`, `a.f`
/// and `a.f[i].g` all resolve to `a`.
pub struct BaseIdentifier;

impl<'a> VnameVisitor<'a, (), Identifier<'a>> for BaseIdentifier {
    fn visit_simple_vname(&mut self, vname: &'a SimpleVname<'a>, _: ()) -> Identifier<'a> {
        vname.name
    }

    fn visit_dot_vname(&mut self, vname: &'a DotVname<'a>, _: ()) -> Identifier<'a> {
        vname.base.visit(self, ())
    }

    fn visit_subscript_vname(&mut self, vname: &'a SubscriptVname<'a>, _: ()) -> Identifier<'a> {
        vname.base.visit(self, ())
    }
}

pub fn base_identifier<'a>(vname: &'a Vname<'a>) -> Identifier<'a> {
    vname.visit(&mut BaseIdentifier, ())
}

/// Collects the base identifier of every assignment target reachable in a
/// command, looking through sequences, both arms of conditionals, nested
/// loops and `let` bodies.
///
/// Declarations inside a `let` are not entered, and calls contribute nothing.
#[derive(Debug, Default)]
pub struct AssignedVariableCollector<'a> {
    assigned: NameSet<'a>,
}

impl<'a> AssignedVariableCollector<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_assigned(self) -> NameSet<'a> {
        self.assigned
    }
}

impl<'a> CommandVisitor<'a, (), ()> for AssignedVariableCollector<'a> {
    fn visit_assign_command(&mut self, command: &'a AssignCommand<'a>, _: ()) {
        self.assigned.insert(base_identifier(command.target).spelling);
    }

    fn visit_call_command(&mut self, _: &'a CallCommand<'a>, _: ()) {}

    fn visit_empty_command(&mut self, _: &'a EmptyCommand, _: ()) {}

    fn visit_if_command(&mut self, command: &'a IfCommand<'a>, _: ()) {
        command.then_branch.visit(self, ());
        command.else_branch.visit(self, ());
    }

    fn visit_let_command(&mut self, command: &'a LetCommand<'a>, _: ()) {
        command.body.visit(self, ());
    }

    fn visit_sequential_command(&mut self, command: &'a SequentialCommand<'a>, _: ()) {
        command.first.visit(self, ());
        command.second.visit(self, ());
    }

    fn visit_while_command(&mut self, command: &'a WhileCommand<'a>, _: ()) {
        command.body.visit(self, ());
    }
}

/// Variables written anywhere in `body`
pub fn collect_assigned<'a>(body: &'a Command<'a>) -> NameSet<'a> {
    let mut collector = AssignedVariableCollector::new();
    body.visit(&mut collector, ());
    collector.into_assigned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::Arena;

    fn sorted(set: NameSet<'_>) -> Vec<&str> {
        let mut names: Vec<_> = set.into_iter().collect();
        names.sort_unstable();
        names
    }

    #[test]
    fn test_base_identifier_of_simple() {
        let arena = Arena::new();
        let b = AstBuilder::new(&arena);
        assert_eq!(base_identifier(b.simple("x")).spelling, "x");
    }

    #[test]
    fn test_base_identifier_strips_field_and_index() {
        let arena = Arena::new();
        let b = AstBuilder::new(&arena);
        let v = b.dot(b.subscript(b.dot(b.simple("r"), "items"), b.var("i")), "value");
        assert_eq!(base_identifier(v).spelling, "r");
    }

    #[test]
    fn test_subscript_marks_array_not_index() {
        let arena = Arena::new();
        let b = AstBuilder::new(&arena);
        let body = b.assign(b.subscript(b.simple("a"), b.var("i")), b.int("1"));
        assert_eq!(sorted(collect_assigned(body)), vec!["a"]);
    }

    #[test]
    fn test_field_write_marks_record() {
        let arena = Arena::new();
        let b = AstBuilder::new(&arena);
        let body = b.assign(b.dot(b.simple("a"), "f"), b.int("1"));
        assert_eq!(sorted(collect_assigned(body)), vec!["a"]);
    }

    #[test]
    fn test_collects_through_every_command_form() {
        let arena = Arena::new();
        let b = AstBuilder::new(&arena);
        let body = b.seq_all(&[
            b.assign(b.simple("s"), b.int("0")),
            b.if_then_else(
                b.var("c"),
                b.assign(b.simple("t"), b.int("1")),
                b.assign(b.simple("e"), b.int("2")),
            ),
            b.while_do(b.var("c"), b.assign(b.simple("w"), b.int("3"))),
            b.let_in(
                b.var_decl("tmp", b.simple_type("Integer")),
                b.assign(b.simple("l"), b.int("4")),
            ),
        ]);
        assert_eq!(sorted(collect_assigned(body)), vec!["e", "l", "s", "t", "w"]);
    }

    #[test]
    fn test_calls_and_declarations_are_not_entered() {
        let arena = Arena::new();
        let b = AstBuilder::new(&arena);
        let proc_body = b.assign(b.simple("hidden"), b.int("1"));
        let body = b.seq(
            b.call("putint", &[ActualParameter::Const(b.var("x"))]),
            b.let_in(b.proc_decl("p", &[], proc_body), b.skip()),
        );
        assert!(collect_assigned(body).is_empty());
    }
}
