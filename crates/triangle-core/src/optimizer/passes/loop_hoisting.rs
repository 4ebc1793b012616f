// =============================================================================
// O1: Loop-Invariant Hoisting Pass
// =============================================================================

use crate::arena::Arena;
use crate::ast::*;
use crate::config::OptimizationLevel;
use crate::optimizer::analysis::{collect_assigned, is_invariant, is_pure, NameSet};
use crate::optimizer::OptimizationPass;
use crate::printer::print_expression;
use serde::Serialize;
use tracing::{debug, trace};

/// Prefix of every name the pass invents
pub const HOISTED_NAME_PREFIX: &str = "$h";

/// Issues `$h1`, `$h2`, ... for a single `while` rewrite
#[derive(Debug, Default)]
struct NameSupply {
    issued: u32,
}

impl NameSupply {
    fn fresh<'a>(&mut self, builder: &AstBuilder<'a>) -> Identifier<'a> {
        self.issued += 1;
        builder.identifier(&format!("{}{}", HOISTED_NAME_PREFIX, self.issued))
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoistingStats {
    /// Loops that ended up wrapped in a `let` of hoisted constants
    pub loops_rewritten: usize,
    pub constants_hoisted: usize,
}

impl HoistingStats {
    pub fn merge(&mut self, other: HoistingStats) {
        self.loops_rewritten += other.loops_rewritten;
        self.constants_hoisted += other.constants_hoisted;
    }
}

/// Working state of one `while` rewrite: the loop's assigned set, the
/// constants hoisted so far in encounter order, and the loop's own names
struct LoopScope<'s, 'a> {
    assigned: &'s NameSet<'a>,
    hoisted: Vec<&'a Declaration<'a>>,
    names: NameSupply,
}

/// Rewrites invariant assignments inside `while` bodies
///
/// `b := E`, where `E` is pure and reads nothing the loop writes, becomes
/// `b := $hN` and the loop is wrapped in `let const $hN ~ E in ...`.
/// Untouched subtrees are returned by reference, so a tree without anything
/// to hoist comes back as the very same node.
pub struct LoopHoister<'a> {
    builder: AstBuilder<'a>,
    stats: HoistingStats,
}

impl<'a> LoopHoister<'a> {
    pub fn new(arena: &'a Arena) -> Self {
        LoopHoister {
            builder: AstBuilder::new(arena),
            stats: HoistingStats::default(),
        }
    }

    pub fn stats(&self) -> HoistingStats {
        self.stats
    }

    pub fn optimise(&mut self, program: &'a Program<'a>) -> &'a Program<'a> {
        let command = self.hoist_in_command(program.command);
        if same_node(command, program.command) {
            program
        } else {
            self.builder.program(command)
        }
    }

    /// Finds every `while` reachable through `if`, `let` and sequencing
    pub fn hoist_in_command(&mut self, command: &'a Command<'a>) -> &'a Command<'a> {
        match command {
            Command::While(while_cmd) => self.hoist_in_while(command, while_cmd),
            Command::If(if_cmd) => {
                let then_branch = self.hoist_in_command(if_cmd.then_branch);
                let else_branch = self.hoist_in_command(if_cmd.else_branch);
                if same_node(then_branch, if_cmd.then_branch)
                    && same_node(else_branch, if_cmd.else_branch)
                {
                    return command;
                }
                self.builder
                    .if_then_else(if_cmd.condition, then_branch, else_branch)
            }
            Command::Let(let_cmd) => {
                let body = self.hoist_in_command(let_cmd.body);
                if same_node(body, let_cmd.body) {
                    return command;
                }
                self.builder.let_in(let_cmd.declaration, body)
            }
            Command::Sequential(seq) => {
                let first = self.hoist_in_command(seq.first);
                let second = self.hoist_in_command(seq.second);
                if same_node(first, seq.first) && same_node(second, seq.second) {
                    return command;
                }
                self.builder.seq(first, second)
            }
            Command::Assign(_) | Command::Call(_) | Command::Empty(_) => command,
        }
    }

    fn hoist_in_while(
        &mut self,
        command: &'a Command<'a>,
        while_cmd: &'a WhileCommand<'a>,
    ) -> &'a Command<'a> {
        let assigned = collect_assigned(while_cmd.body);
        trace!("Loop assigns {:?}", assigned);

        let mut scope = LoopScope {
            assigned: &assigned,
            hoisted: Vec::new(),
            names: NameSupply::default(),
        };
        let replaced = self.replace_invariants(while_cmd.body, &mut scope);

        // Inner loops get their own, narrower analysis as well
        let body = self.hoist_in_command(replaced);

        let Some(chain) = self.chain(&scope.hoisted) else {
            if same_node(body, while_cmd.body) {
                return command;
            }
            return self.builder.while_do(while_cmd.condition, body);
        };

        self.stats.loops_rewritten += 1;
        self.stats.constants_hoisted += scope.hoisted.len();
        debug!(
            "Hoisted {} loop-invariant expression(s) out of while {}",
            scope.hoisted.len(),
            print_expression(while_cmd.condition)
        );

        let new_while = self.builder.while_do(while_cmd.condition, body);
        self.builder.let_in(chain, new_while)
    }

    fn replace_invariants(
        &mut self,
        command: &'a Command<'a>,
        scope: &mut LoopScope<'_, 'a>,
    ) -> &'a Command<'a> {
        match command {
            Command::Assign(assign) => {
                if !(is_pure(assign.value) && is_invariant(assign.value, scope.assigned)) {
                    return command;
                }
                let name = scope.names.fresh(&self.builder);
                debug!(
                    "Hoisting {} as {}",
                    print_expression(assign.value),
                    name.spelling
                );
                scope
                    .hoisted
                    .push(self.builder.const_decl_from(name, assign.value));
                let temp = self.builder.read(self.builder.simple_from(name));
                self.builder.assign(assign.target, temp)
            }
            Command::Sequential(seq) => {
                let first = self.replace_invariants(seq.first, scope);
                let second = self.replace_invariants(seq.second, scope);
                if same_node(first, seq.first) && same_node(second, seq.second) {
                    return command;
                }
                self.builder.seq(first, second)
            }
            Command::If(if_cmd) => {
                let then_branch = self.replace_invariants(if_cmd.then_branch, scope);
                let else_branch = self.replace_invariants(if_cmd.else_branch, scope);
                if same_node(then_branch, if_cmd.then_branch)
                    && same_node(else_branch, if_cmd.else_branch)
                {
                    return command;
                }
                self.builder
                    .if_then_else(if_cmd.condition, then_branch, else_branch)
            }
            // Nested loop writes are already in the outer assigned set, so
            // anything invariant here is invariant to the outer loop too.
            Command::While(inner) => {
                let body = self.replace_invariants(inner.body, scope);
                if same_node(body, inner.body) {
                    return command;
                }
                self.builder.while_do(inner.condition, body)
            }
            Command::Let(let_cmd) => {
                let body = self.replace_invariants(let_cmd.body, scope);
                if same_node(body, let_cmd.body) {
                    return command;
                }
                self.builder.let_in(let_cmd.declaration, body)
            }
            Command::Call(_) | Command::Empty(_) => command,
        }
    }

    /// `D1; (D2; (D3; ...))` in the order given
    fn chain(&self, declarations: &[&'a Declaration<'a>]) -> Option<&'a Declaration<'a>> {
        let (last, rest) = declarations.split_last()?;
        Some(
            rest.iter()
                .rev()
                .fold(*last, |acc, &decl| self.builder.seq_decl(decl, acc)),
        )
    }
}

/// Hoists loop invariants throughout `program`, allocating new nodes in
/// `arena`. Returns `program` itself when nothing was hoisted.
pub fn optimise<'a>(program: &'a Program<'a>, arena: &'a Arena) -> &'a Program<'a> {
    LoopHoister::new(arena).optimise(program)
}

/// [`LoopHoister`] as a pass for the optimizer
#[derive(Debug, Default)]
pub struct LoopHoistingPass {
    stats: HoistingStats,
}

impl LoopHoistingPass {
    pub fn new() -> Self {
        Self::default()
    }

    /// Totals over every run of this pass
    pub fn stats(&self) -> HoistingStats {
        self.stats
    }
}

impl OptimizationPass for LoopHoistingPass {
    fn name(&self) -> &'static str {
        "loop-hoisting"
    }

    fn min_level(&self) -> OptimizationLevel {
        OptimizationLevel::O1
    }

    fn run<'a>(&mut self, program: &'a Program<'a>, arena: &'a Arena) -> &'a Program<'a> {
        let mut hoister = LoopHoister::new(arena);
        let result = hoister.optimise(program);
        self.stats.merge(hoister.stats());
        result
    }

    fn summary(&self) -> Option<String> {
        if self.stats.constants_hoisted == 0 {
            return None;
        }
        Some(format!(
            "hoisted {} loop-invariant expression(s) out of {} loop(s)",
            self.stats.constants_hoisted, self.stats.loops_rewritten
        ))
    }
}
