//! AST optimizer for Triangle
//!
//! Passes take an immutable, arena-allocated program and return either the
//! same program or a rewritten one that shares every untouched subtree with
//! its input.

use crate::arena::Arena;
use crate::ast::Program;
use crate::config::{OptimizationLevel, OptimizerConfig};
use crate::diagnostics::DiagnosticHandler;
use crate::span::Span;

use std::sync::Arc;
use tracing::{debug, info};

pub mod analysis;
pub mod passes;

pub use passes::{optimise, HoistingStats, LoopHoister, LoopHoistingPass};

/// A single program-to-program transformation
pub trait OptimizationPass: Send {
    fn name(&self) -> &'static str;

    /// Lowest optimization level at which this pass runs
    fn min_level(&self) -> OptimizationLevel;

    /// Returns `program` itself when the pass changes nothing
    fn run<'a>(&mut self, program: &'a Program<'a>, arena: &'a Arena) -> &'a Program<'a>;

    /// One-line account of what the pass has done so far, if anything
    fn summary(&self) -> Option<String> {
        None
    }
}

/// Runs the registered passes, in order, at the configured level
///
/// Pass summaries accumulate over every call to [`Optimizer::optimize`], so
/// per-program reports need one optimizer per program.
pub struct Optimizer {
    level: OptimizationLevel,
    handler: Arc<dyn DiagnosticHandler>,
    passes: Vec<Box<dyn OptimizationPass>>,
}

impl Optimizer {
    pub fn new(config: &OptimizerConfig, handler: Arc<dyn DiagnosticHandler>) -> Self {
        let mut passes: Vec<Box<dyn OptimizationPass>> = Vec::new();
        if config.hoist_loop_invariants {
            passes.push(Box::new(LoopHoistingPass::new()));
        }
        Self {
            level: config.optimization_level,
            handler,
            passes,
        }
    }

    /// Register an additional pass after the built-in ones
    pub fn add_pass(&mut self, pass: Box<dyn OptimizationPass>) {
        self.passes.push(pass);
    }

    /// Returns the number of registered passes
    pub fn pass_count(&self) -> usize {
        self.passes.len()
    }

    /// Returns the names of all registered passes
    pub fn pass_names(&self) -> Vec<&'static str> {
        self.passes.iter().map(|pass| pass.name()).collect()
    }

    /// `(pass name, summary)` for every pass that has something to report
    pub fn summaries(&self) -> Vec<(&'static str, String)> {
        self.passes
            .iter()
            .filter_map(|pass| pass.summary().map(|summary| (pass.name(), summary)))
            .collect()
    }

    pub fn optimize<'a>(&mut self, program: &'a Program<'a>, arena: &'a Arena) -> &'a Program<'a> {
        if self.level == OptimizationLevel::O0 {
            return program;
        }

        let mut current = program;
        let mut ran = 0;
        for pass in &mut self.passes {
            if pass.min_level() > self.level {
                debug!("Skipping {} (needs {})", pass.name(), pass.min_level());
                continue;
            }
            current = pass.run(current, arena);
            ran += 1;
        }
        info!("Ran {} optimization pass(es) at {}", ran, self.level);

        for (name, summary) in self.summaries() {
            self.handler
                .info(Span::dummy(), &format!("{}: {}", name, summary));
        }

        current
    }
}
