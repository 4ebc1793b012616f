use triangle_core::ast::{same_node, AstBuilder, Command, Declaration};
use triangle_core::{optimise, Arena};
use triangle_test_helpers::fixtures;
use triangle_test_helpers::optimize::optimise_to_string;

// ============================================================================
// Invariance Gate Tests
// ============================================================================

#[test]
fn test_invariant_assignment_is_hoisted() {
    let output = optimise_to_string(fixtures::invariant_loop);
    assert_eq!(
        output,
        "let const $h1 ~ a + 1 in while i < n do begin b := $h1; c := c + 1 end"
    );
}

#[test]
fn test_loop_assigned_operand_blocks_hoisting() {
    let arena = Arena::new();
    let b = AstBuilder::new(&arena);
    let program = fixtures::variant_loop(&b);
    assert!(
        same_node(optimise(program, &arena), program),
        "b := a + 1 must stay inside a loop that writes a"
    );
}

// ============================================================================
// Purity Gate Tests
// ============================================================================

#[test]
fn test_calls_and_lets_stay_in_loop() {
    let arena = Arena::new();
    let b = AstBuilder::new(&arena);
    let program = fixtures::impure_loop(&b);
    assert!(same_node(optimise(program, &arena), program));
}

// ============================================================================
// Ordering and Naming Tests
// ============================================================================

#[test]
fn test_two_hoists_keep_source_order() {
    let output = optimise_to_string(fixtures::two_invariants_loop);
    assert_eq!(
        output,
        "let const $h1 ~ 1 + 1; const $h2 ~ 2 + 2 in while c do begin x := $h1; y := $h2 end"
    );
}

#[test]
fn test_declaration_chain_is_const_pair() {
    let arena = Arena::new();
    let b = AstBuilder::new(&arena);
    let result = optimise(fixtures::two_invariants_loop(&b), &arena);

    let Command::Let(let_cmd) = result.command else {
        panic!("expected the loop to be wrapped in a let");
    };
    let Declaration::Sequential(chain) = let_cmd.declaration else {
        panic!("expected two chained constants");
    };
    match (chain.first, chain.second) {
        (Declaration::Const(first), Declaration::Const(second)) => {
            assert_eq!(first.name.spelling, "$h1");
            assert_eq!(second.name.spelling, "$h2");
            assert!(first.span.is_dummy());
        }
        other => panic!("unexpected chain shape: {:?}", other),
    }
    assert!(matches!(let_cmd.body, Command::While(_)));
}

#[test]
fn test_sibling_loops_each_start_at_h1() {
    let output = optimise_to_string(|b| {
        b.program(b.seq(
            b.while_do(b.var("p"), b.assign(b.simple("x"), b.int("1"))),
            b.while_do(b.var("q"), b.assign(b.simple("y"), b.int("2"))),
        ))
    });
    assert_eq!(
        output,
        "let const $h1 ~ 1 in while p do x := $h1; let const $h1 ~ 2 in while q do y := $h1"
    );
}

// ============================================================================
// Nested Loop Tests
// ============================================================================

#[test]
fn test_nested_loop_gets_its_own_let() {
    let output = optimise_to_string(fixtures::nested_loops);
    // x is written by the outer loop, so `y := x` only moves out of the inner one.
    assert_eq!(
        output,
        "let const $h1 ~ k + 1 in while c1 do begin x := $h1; \
         let const $h1 ~ x in while c2 do y := $h1 end"
    );
}

#[test]
fn test_outer_invariant_found_inside_inner_loop() {
    let output = optimise_to_string(|b| {
        b.program(b.while_do(
            b.var("c1"),
            b.seq(
                b.assign(b.simple("i"), b.binary(b.var("i"), "+", b.int("1"))),
                b.while_do(
                    b.var("c2"),
                    b.seq(
                        b.assign(b.simple("j"), b.binary(b.var("j"), "+", b.int("1"))),
                        b.assign(b.simple("z"), b.binary(b.var("k"), "*", b.var("k"))),
                    ),
                ),
            ),
        ))
    });
    assert_eq!(
        output,
        "let const $h1 ~ k * k in while c1 do begin i := i + 1; \
         let const $h1 ~ $h1 in while c2 do begin j := j + 1; z := $h1 end end"
    );
}

// ============================================================================
// Structural Sharing Tests
// ============================================================================

#[test]
fn test_program_without_loops_is_same_node() {
    let arena = Arena::new();
    let b = AstBuilder::new(&arena);
    let program = fixtures::loop_free_program(&b);
    assert!(same_node(optimise(program, &arena), program));
}

#[test]
fn test_loop_condition_is_shared() {
    let arena = Arena::new();
    let b = AstBuilder::new(&arena);
    let program = fixtures::invariant_loop(&b);
    let Command::While(original) = program.command else {
        panic!("fixture starts with a loop");
    };

    let result = optimise(program, &arena);
    let Command::Let(let_cmd) = result.command else {
        panic!("expected let");
    };
    let Command::While(rewritten) = let_cmd.body else {
        panic!("expected while");
    };
    assert!(same_node(rewritten.condition, original.condition));

    let (Command::Sequential(old_body), Command::Sequential(new_body)) =
        (original.body, rewritten.body)
    else {
        panic!("expected sequential bodies");
    };
    assert!(same_node(new_body.second, old_body.second));
    assert!(!same_node(new_body.first, old_body.first));
}

#[test]
fn test_input_tree_is_untouched() {
    let arena = Arena::new();
    let b = AstBuilder::new(&arena);
    let program = fixtures::invariant_loop(&b);
    let before = triangle_core::printer::print_program(program);
    let _ = optimise(program, &arena);
    assert_eq!(triangle_core::printer::print_program(program), before);
}

// ============================================================================
// Base Identifier Tests
// ============================================================================

#[test]
fn test_array_element_write_blocks_reads_of_array() {
    let arena = Arena::new();
    let b = AstBuilder::new(&arena);
    let program = b.program(b.while_do(
        b.var("c"),
        b.seq(
            b.assign(b.subscript(b.simple("a"), b.var("i")), b.int("0")),
            b.assign(b.simple("s"), b.read(b.subscript(b.simple("a"), b.int("1")))),
        ),
    ));
    let output = triangle_core::printer::print_program(optimise(program, &arena));
    assert_eq!(
        output,
        "let const $h1 ~ 0 in while c do begin a[i] := $h1; s := a[1] end"
    );
}

#[test]
fn test_index_variable_alone_is_not_marked_assigned() {
    let output = optimise_to_string(|b| {
        b.program(b.while_do(
            b.var("c"),
            b.seq(
                b.assign(b.subscript(b.simple("a"), b.var("i")), b.var("c")),
                b.assign(b.simple("t"), b.binary(b.var("i"), "+", b.int("1"))),
            ),
        ))
    });
    assert_eq!(
        output,
        "let const $h1 ~ c; const $h2 ~ i + 1 in while c do begin a[i] := $h1; t := $h2 end"
    );
}
