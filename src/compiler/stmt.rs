use log::debug;

use crate::{
    ast::{
        ast::{Block, Dimension},
        expressions::ExprKind,
        statements::{
            AssignmentStmt, DoStmt, GuardedBlock, IfStmt, ReturnStmt, Stmt, VarDeclStmt,
            WriteStmt,
        },
        types::Type,
    },
    errors::errors::{Error, ErrorImpl},
};

use super::{
    compiler::Compiler,
    expr::{gen_channel_read, gen_expression, gen_pixel_selector},
    runtime::{self, call},
};

/// Generates Java source for one statement. The result ends with a newline.
pub fn gen_statement(compiler: &mut Compiler, statement: &Stmt) -> Result<String, Error> {
    match statement {
        Stmt::VarDecl(var_decl_stmt) => gen_var_decl(compiler, var_decl_stmt),
        Stmt::Assignment(assignment_stmt) => gen_assignment(compiler, assignment_stmt),
        Stmt::Write(write_stmt) => gen_write(compiler, write_stmt),
        Stmt::Return(return_stmt) => gen_return(compiler, return_stmt),
        Stmt::If(if_stmt) => gen_if(compiler, if_stmt),
        Stmt::Do(do_stmt) => gen_do(compiler, do_stmt),
        Stmt::Block(block_stmt) => Ok(format!("{}\n", gen_block(compiler, &block_stmt.block)?)),
    }
}

/// Lowers a block in its own scope, as `{ ... }` without a trailing newline.
pub fn gen_block(compiler: &mut Compiler, block: &Block) -> Result<String, Error> {
    compiler.scopes.enter_scope();

    let mut body = String::new();
    for statement in block.iter() {
        let code = gen_statement(compiler, statement)?;
        body.push_str(&compiler.indent(&code));
    }

    compiler.scopes.leave_scope();
    Ok(format!("{{\n{}}}", body))
}

fn gen_dimension(compiler: &Compiler, dimension: &Dimension) -> Result<(String, String), Error> {
    let width = gen_expression(compiler, &dimension.width)?;
    let height = gen_expression(compiler, &dimension.height)?;
    Ok((width, height))
}

fn gen_var_decl(compiler: &mut Compiler, var_decl_stmt: &VarDeclStmt) -> Result<String, Error> {
    let name_def = &var_decl_stmt.name_def;
    let java_type = compiler.convert_type(name_def.var_type, &name_def.span)?;

    // The initializer is lowered before the name is bound, so it still sees
    // any outer binding of the same name.
    let initializer = match (
        &var_decl_stmt.initializer,
        name_def.var_type,
        &name_def.dimension,
    ) {
        (Some(init), Type::Image, dimension) if init.ty == Type::String => {
            let source = gen_expression(compiler, init)?;
            Some(match dimension {
                Some(dimension) => {
                    let (width, height) = gen_dimension(compiler, dimension)?;
                    call(runtime::IMAGE_READ, &[&source, &width, &height])
                }
                None => call(runtime::IMAGE_READ, &[&source]),
            })
        }
        (Some(init), Type::Image, Some(dimension)) => {
            let image = gen_expression(compiler, init)?;
            let (width, height) = gen_dimension(compiler, dimension)?;
            Some(call(
                runtime::IMAGE_COPY_AND_RESIZE,
                &[&image, &width, &height],
            ))
        }
        (None, Type::Image, Some(dimension)) => {
            let (width, height) = gen_dimension(compiler, dimension)?;
            Some(call(runtime::IMAGE_MAKE, &[&width, &height]))
        }
        (Some(init), _, _) => Some(gen_expression(compiler, init)?),
        (None, _, _) => None,
    };

    let name = compiler.scopes.declare(&name_def.name, name_def.var_type);
    debug!(
        "declared `{}` as `{}` ({})",
        name_def.name, name, name_def.var_type
    );

    Ok(match initializer {
        Some(value) => format!("{} {} = {};\n", java_type, name, value),
        None => format!("{} {};\n", java_type, name),
    })
}

fn gen_assignment(
    compiler: &mut Compiler,
    assignment_stmt: &AssignmentStmt,
) -> Result<String, Error> {
    let lvalue = &assignment_stmt.lvalue;
    let target = compiler.scopes.resolve(&lvalue.name, &lvalue.span)?;
    let value = gen_expression(compiler, &assignment_stmt.value)?;

    match (lvalue.var_type, &lvalue.pixel, lvalue.channel) {
        (Type::Pixel, None, Some(channel)) => Ok(format!(
            "{} = {};\n",
            target,
            call(runtime::channel_setter(channel), &[&target, &value])
        )),
        (Type::Image, Some(selector), channel) => {
            let (x, y) = gen_pixel_selector(compiler, selector)?;
            let pixel = match channel {
                Some(channel) => {
                    let current = call(runtime::IMAGE_GET_RGB, &[&target, &x, &y]);
                    call(runtime::channel_setter(channel), &[&current, &value])
                }
                None => value,
            };
            Ok(format!(
                "{};\n",
                call(runtime::IMAGE_SET_RGB, &[&target, &x, &y, &pixel])
            ))
        }
        (Type::Image, None, None) if assignment_stmt.value.ty == Type::String => Ok(format!(
            "{} = {};\n",
            target,
            call(runtime::IMAGE_READ, &[&value])
        )),
        (_, None, None) => Ok(format!("{} = {};\n", target, value)),
        (var_type, pixel, _) => {
            let operator = if pixel.is_some() { "[]" } else { ":" };
            Err(Error::new(
                ErrorImpl::UnsupportedOperator {
                    operator: operator.to_string(),
                    operands: format!("assignment to {} `{}`", var_type, lvalue.name),
                },
                lvalue.span.start.clone(),
            ))
        }
    }
}

fn gen_write(compiler: &mut Compiler, write_stmt: &WriteStmt) -> Result<String, Error> {
    let value = gen_expression(compiler, &write_stmt.expression)?;
    let function = match write_stmt.expression.ty {
        Type::Pixel => runtime::CONSOLE_WRITE_PIXEL,
        _ => runtime::CONSOLE_WRITE,
    };
    Ok(format!("{};\n", call(function, &[&value])))
}

fn gen_return(compiler: &mut Compiler, return_stmt: &ReturnStmt) -> Result<String, Error> {
    let value = match &return_stmt.value.kind {
        ExprKind::Postfix {
            base,
            pixel,
            channel: Some(channel),
        } if return_stmt.value.ty == Type::Int => {
            gen_channel_read(compiler, base, pixel.as_ref(), *channel)?
        }
        _ => gen_expression(compiler, &return_stmt.value)?,
    };
    Ok(format!("return {};\n", value))
}

/// `if (g1) {...} else if (g2) {...} else {}`
///
/// The trailing empty `else` is left out when the last guard is literally
/// `TRUE`, since the chain is already exhaustive.
fn gen_if(compiler: &mut Compiler, if_stmt: &IfStmt) -> Result<String, Error> {
    let Some(last) = if_stmt.guarded_blocks.last() else {
        return Ok(String::new());
    };

    let mut code = String::new();
    for (index, guarded_block) in if_stmt.guarded_blocks.iter().enumerate() {
        let (guard, block) = gen_guarded_block(compiler, guarded_block)?;
        if index == 0 {
            code.push_str(&format!("if ({}) {}", guard, block));
        } else {
            code.push_str(&format!(" else if ({}) {}", guard, block));
        }
    }

    if !last.guard.is_true_literal() {
        code.push_str(" else {\n}");
    }
    code.push('\n');
    Ok(code)
}

/// Repeats while at least one guard holds, running the block of the first
/// true guard on each iteration.
fn gen_do(compiler: &mut Compiler, do_stmt: &DoStmt) -> Result<String, Error> {
    if do_stmt.guarded_blocks.is_empty() {
        return Ok(String::new());
    }

    let flag = compiler.scopes.fresh_temporary("continue");

    let mut chain = String::new();
    for (index, guarded_block) in do_stmt.guarded_blocks.iter().enumerate() {
        let (guard, block) = gen_guarded_block(compiler, guarded_block)?;
        let body = format!("{} = true;\n{}\n", flag, block);
        if index > 0 {
            chain.push_str(" else ");
        }
        chain.push_str(&format!("if ({}) {{\n{}}}", guard, compiler.indent(&body)));
    }
    chain.push('\n');

    let loop_body = format!("{} = false;\n{}", flag, chain);
    Ok(format!(
        "boolean {} = true;\nwhile ({}) {{\n{}}}\n",
        flag,
        flag,
        compiler.indent(&loop_body)
    ))
}

fn gen_guarded_block(
    compiler: &mut Compiler,
    guarded_block: &GuardedBlock,
) -> Result<(String, String), Error> {
    let guard = gen_expression(compiler, &guarded_block.guard)?;
    let block = gen_block(compiler, &guarded_block.block)?;
    Ok((guard, block))
}
