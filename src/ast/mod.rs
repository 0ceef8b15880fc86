/// AST (Abstract Syntax Tree) module
/// Contains the typed tree consumed by the code generator
///
/// Submodules:
/// - ast: Program, blocks and name definitions
/// - expressions: Definitions for the typed expression nodes
/// - statements: Definitions for the statement nodes
/// - types: Static types, operators and color channels
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
