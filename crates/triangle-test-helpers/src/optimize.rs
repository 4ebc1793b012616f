//! Helpers that run the optimiser and hand back printed Triangle text

use std::sync::Arc;
use triangle_core::ast::{AstBuilder, Program};
use triangle_core::interchange::ProgramNode;
use triangle_core::printer::print_program;
use triangle_core::{
    optimise, Arena, CollectingDiagnosticHandler, Diagnostic, DiagnosticHandler,
    OptimizationLevel, Optimizer, OptimizerConfig,
};

/// Build a program in a fresh arena, hoist it, and print the result
pub fn optimise_to_string<F>(build: F) -> String
where
    F: for<'a> FnOnce(&AstBuilder<'a>) -> &'a Program<'a>,
{
    let arena = Arena::new();
    let b = AstBuilder::new(&arena);
    print_program(optimise(build(&b), &arena))
}

/// Load a JSON document and run the full optimizer at `level`
///
/// # Returns
/// The printed program and the diagnostics reported along the way
pub fn optimise_json(
    json: &str,
    level: OptimizationLevel,
) -> Result<(String, Vec<Diagnostic>), String> {
    let node = ProgramNode::from_json(json).map_err(|e| e.to_string())?;
    let arena = Arena::new();
    let program = node
        .lower(&AstBuilder::new(&arena))
        .map_err(|e| e.to_string())?;

    let handler = Arc::new(CollectingDiagnosticHandler::new());
    let config = OptimizerConfig {
        optimization_level: level,
        ..OptimizerConfig::default()
    };
    let mut optimizer = Optimizer::new(&config, handler.clone());
    let result = optimizer.optimize(program, &arena);
    Ok((print_program(result), handler.get_diagnostics()))
}
