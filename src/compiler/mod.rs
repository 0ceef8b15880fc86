//! Code generation module.
//!
//! This module lowers the typed AST into Java source text. It handles:
//!
//! - Name resolution and collision renaming (`scope`)
//! - Type-directed lowering of expressions (`expr`) and statements (`stmt`)
//! - The method signature and entry point (`compiler`)
//! - The runtime library names generated code depends on (`runtime`)

pub mod compiler;
pub mod expr;
pub mod runtime;
pub mod scope;
pub mod stmt;
