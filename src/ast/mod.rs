/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the expression tree
///
/// Submodules:
/// - ast: The `Expr` sum type, its kinds and structural helpers
/// - printer: Canonical serialization and indented tree dumps
pub mod ast;
pub mod printer;
