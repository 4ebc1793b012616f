//! Loop-invariant hoisting for Triangle programs
//!
//! The crate provides an arena-allocated, immutable Triangle AST with
//! visitor dispatch over its four node families, a set of syntactic
//! analyses, and a pass that moves invariant assignments out of `while`
//! loops:
//!
//! ```
//! use triangle_core::ast::AstBuilder;
//! use triangle_core::printer::print_program;
//! use triangle_core::{optimise, Arena};
//!
//! let arena = Arena::new();
//! let b = AstBuilder::new(&arena);
//! let program = b.program(b.while_do(
//!     b.binary(b.var("i"), "<", b.var("n")),
//!     b.seq(
//!         b.assign(b.simple("b"), b.binary(b.var("a"), "+", b.int("1"))),
//!         b.assign(b.simple("i"), b.binary(b.var("i"), "+", b.int("1"))),
//!     ),
//! ));
//!
//! let optimised = optimise(program, &arena);
//! assert_eq!(
//!     print_program(optimised),
//!     "let const $h1 ~ a + 1 in while i < n do begin b := $h1; i := i + 1 end"
//! );
//! ```

pub mod arena;
pub mod ast;
pub mod config;
pub mod diagnostics;
pub mod errors;
pub mod interchange;
pub mod optimizer;
pub mod printer;
pub mod span;

pub use arena::Arena;
pub use ast::{AstBuilder, Program};
pub use config::{CliOverrides, OptimizationLevel, OptimizerConfig};
pub use diagnostics::{
    CollectingDiagnosticHandler, ConsoleDiagnosticHandler, Diagnostic, DiagnosticHandler,
    DiagnosticLevel,
};
pub use errors::CompilationError;
pub use optimizer::analysis::{LiteralCounter, LiteralStats};
pub use optimizer::{optimise, HoistingStats, LoopHoistingPass, OptimizationPass, Optimizer};
pub use span::Span;
