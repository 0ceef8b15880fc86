//! Main compiler module.
//!
//! This module contains the core Compiler structure and the entry point of the
//! lowering pass. The Compiler owns everything that changes during one walk of
//! a program (the scope table and its rename counters) and is threaded by
//! `&mut` through statement lowering; expression lowering only reads it.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::{
    ast::{ast::Program, types::Type},
    errors::errors::{Error, ErrorImpl},
    Span,
};

use super::{
    scope::{ScopeTable, JAVA_RESERVED},
    stmt::gen_block,
};

lazy_static! {
    static ref JAVA_IDENTIFIER: Regex =
        Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier pattern is valid");
}

/// Formatting options for generated code.
#[derive(Debug, Clone)]
pub struct CompilerOptions {
    /// Spaces per nesting level.
    pub indent_width: usize,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        CompilerOptions { indent_width: 4 }
    }
}

/// State of one lowering pass.
///
/// A Compiler is used for exactly one program; `compile` creates a fresh one
/// per call, so independent programs never share names or counters.
pub struct Compiler {
    pub options: CompilerOptions,
    /// Lexical scopes, parameter bindings and the rename counter
    pub scopes: ScopeTable,
}

impl Compiler {
    pub fn new(options: CompilerOptions) -> Self {
        Compiler {
            options,
            scopes: ScopeTable::new(),
        }
    }

    /// Converts a variable or parameter type to its Java spelling.
    ///
    /// Pixels are packed ARGB `int`s at runtime.
    pub fn convert_type(&self, type_: Type, span: &Span) -> Result<&'static str, Error> {
        match type_ {
            Type::Int => Ok("int"),
            Type::Boolean => Ok("boolean"),
            Type::String => Ok("String"),
            Type::Pixel => Ok("int"),
            Type::Image => Ok("BufferedImage"),
            Type::Void => Err(Error::new(
                ErrorImpl::UnsupportedType {
                    type_: type_.to_string(),
                    context: "a variable or parameter".to_string(),
                },
                span.start.clone(),
            )),
        }
    }

    /// Like `convert_type`, but `void` is allowed.
    pub fn convert_return_type(&self, type_: Type, span: &Span) -> Result<&'static str, Error> {
        match type_ {
            Type::Void => Ok("void"),
            other => self.convert_type(other, span),
        }
    }

    /// Indents every non-empty line of `code` by one level.
    pub fn indent(&self, code: &str) -> String {
        let prefix = " ".repeat(self.options.indent_width);
        code.split_inclusive('\n')
            .map(|line| {
                if line.trim().is_empty() {
                    line.to_string()
                } else {
                    format!("{}{}", prefix, line)
                }
            })
            .collect()
    }

    /// Emits `<returnType> <name>(<params>) { ... }` for the whole program.
    fn gen_program(&mut self, program: &Program) -> Result<String, Error> {
        validate_program_name(&program.name, &program.span)?;

        let return_type = self.convert_return_type(program.return_type, &program.span)?;

        let mut params = vec![];
        for param in program.params.iter() {
            let java_type = self.convert_type(param.var_type, &param.span)?;
            let name = self.scopes.declare_parameter(&param.name, param.var_type);
            params.push(format!("{} {}", java_type, name));
        }

        let body = gen_block(self, &program.block)?;

        Ok(format!(
            "{} {}({}) {}\n",
            return_type,
            program.name,
            params.join(", "),
            body
        ))
    }
}

fn validate_program_name(name: &str, span: &Span) -> Result<(), Error> {
    if JAVA_IDENTIFIER.is_match(name) && !JAVA_RESERVED.contains(name) {
        Ok(())
    } else {
        Err(Error::new(
            ErrorImpl::InvalidProgramName {
                name: name.to_string(),
            },
            span.start.clone(),
        ))
    }
}

/// Lowers a type-checked program to the text of one Java method.
///
/// This is the primary entry point for code generation. The output is
/// deterministic for a given tree; any unsupported construct aborts the whole
/// pass and no partial output is returned.
pub fn compile(program: &Program) -> Result<String, Error> {
    compile_with_options(program, CompilerOptions::default())
}

/// `compile` with explicit formatting options.
pub fn compile_with_options(program: &Program, options: CompilerOptions) -> Result<String, Error> {
    debug!(
        "compiling program `{}` with {} parameter(s)",
        program.name,
        program.params.len()
    );

    let mut compiler = Compiler::new(options);
    let code = compiler.gen_program(program)?;

    debug!("generated {} bytes for `{}`", code.len(), program.name);
    Ok(code)
}
