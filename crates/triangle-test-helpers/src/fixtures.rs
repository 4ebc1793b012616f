//! Test fixtures - small Triangle programs, built in an arena or as AST documents

use triangle_core::ast::{ActualParameter, AstBuilder, Program};

/// `while i < n do begin b := a + 1; c := c + 1 end`
///
/// `a + 1` reads only `a`, which the loop never writes.
pub fn invariant_loop<'a>(b: &AstBuilder<'a>) -> &'a Program<'a> {
    b.program(b.while_do(
        b.binary(b.var("i"), "<", b.var("n")),
        b.seq(
            b.assign(b.simple("b"), b.binary(b.var("a"), "+", b.int("1"))),
            b.assign(b.simple("c"), b.binary(b.var("c"), "+", b.int("1"))),
        ),
    ))
}

/// `while i < n do begin b := a + 1; a := a + 1 end`
pub fn variant_loop<'a>(b: &AstBuilder<'a>) -> &'a Program<'a> {
    b.program(b.while_do(
        b.binary(b.var("i"), "<", b.var("n")),
        b.seq(
            b.assign(b.simple("b"), b.binary(b.var("a"), "+", b.int("1"))),
            b.assign(b.simple("a"), b.binary(b.var("a"), "+", b.int("1"))),
        ),
    ))
}

/// `while c do begin x := 1 + 1; y := 2 + 2 end`
pub fn two_invariants_loop<'a>(b: &AstBuilder<'a>) -> &'a Program<'a> {
    b.program(b.while_do(
        b.var("c"),
        b.seq(
            b.assign(b.simple("x"), b.binary(b.int("1"), "+", b.int("1"))),
            b.assign(b.simple("y"), b.binary(b.int("2"), "+", b.int("2"))),
        ),
    ))
}

/// `while c1 do begin x := k + 1; while c2 do y := x end`
pub fn nested_loops<'a>(b: &AstBuilder<'a>) -> &'a Program<'a> {
    b.program(b.while_do(
        b.var("c1"),
        b.seq(
            b.assign(b.simple("x"), b.binary(b.var("k"), "+", b.int("1"))),
            b.while_do(b.var("c2"), b.assign(b.simple("y"), b.var("x"))),
        ),
    ))
}

/// A loop whose only candidates contain a call or a `let`
pub fn impure_loop<'a>(b: &AstBuilder<'a>) -> &'a Program<'a> {
    let call = b.call_expr("f", &[ActualParameter::Const(b.var("a"))]);
    let let_expr = b.let_expr(b.const_decl("k", b.int("1")), b.var("k"));
    b.program(b.while_do(
        b.var("c"),
        b.seq(
            b.assign(b.simple("x"), b.binary(b.int("1"), "+", call)),
            b.assign(b.simple("y"), b.unary("-", let_expr)),
        ),
    ))
}

/// Straight-line code with a conditional and a `let`, but no loop
pub fn loop_free_program<'a>(b: &AstBuilder<'a>) -> &'a Program<'a> {
    let integer = b.simple_type("Integer");
    b.program(b.let_in(
        b.var_decl("x", integer),
        b.seq(
            b.assign(b.simple("x"), b.binary(b.int("2"), "*", b.int("3"))),
            b.if_then_else(
                b.binary(b.var("x"), ">", b.int("5")),
                b.call("putint", &[ActualParameter::Const(b.var("x"))]),
                b.skip(),
            ),
        ),
    ))
}

/// [`invariant_loop`] as a JSON document
pub fn invariant_loop_json() -> &'static str {
    r#"{
  "command": {
    "kind": "while",
    "condition": { "kind": "binary", "operator": "<",
                   "left": { "kind": "var", "name": "i" },
                   "right": { "kind": "var", "name": "n" } },
    "body": { "kind": "sequential", "commands": [
      { "kind": "assign", "target": { "kind": "simple", "name": "b" },
        "value": { "kind": "binary", "operator": "+",
                   "left": { "kind": "var", "name": "a" },
                   "right": { "kind": "integer", "value": 1 } } },
      { "kind": "assign", "target": { "kind": "simple", "name": "c" },
        "value": { "kind": "binary", "operator": "+",
                   "left": { "kind": "var", "name": "c" },
                   "right": { "kind": "integer", "value": 1 } } }
    ] }
  }
}"#
}

/// [`variant_loop`] as a YAML document
pub fn variant_loop_yaml() -> &'static str {
    r#"command:
  kind: while
  condition: { kind: binary, operator: "<", left: { kind: var, name: i }, right: { kind: var, name: n } }
  body:
    kind: sequential
    commands:
      - kind: assign
        target: { kind: simple, name: b }
        value: { kind: binary, operator: "+", left: { kind: var, name: a }, right: { kind: integer, value: 1 } }
      - kind: assign
        target: { kind: simple, name: a }
        value: { kind: binary, operator: "+", left: { kind: var, name: a }, right: { kind: integer, value: 1 } }
"#
}
