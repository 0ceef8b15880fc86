use crate::{
    ast::{
        expressions::{Expr, ExprKind, PixelSelector},
        types::{Channel, Operator, Type},
    },
    errors::errors::{Error, ErrorImpl},
    Span,
};

use super::{
    compiler::Compiler,
    runtime::{self, call},
};

/// Generates Java source text for the given expression.
pub fn gen_expression(compiler: &Compiler, expression: &Expr) -> Result<String, Error> {
    match &expression.kind {
        ExprKind::NumLit(text) | ExprKind::StringLit(text) => Ok(text.clone()),
        ExprKind::BooleanLit(_) => Ok(if expression.is_true_literal() {
            "true".to_string()
        } else {
            "false".to_string()
        }),
        ExprKind::Ident(name) => compiler.scopes.resolve(name, expression.get_span()),
        ExprKind::Const(name) => runtime::constant_literal(name).ok_or_else(|| {
            Error::new(
                ErrorImpl::UnsupportedConstant {
                    constant: name.clone(),
                },
                expression.get_span().start.clone(),
            )
        }),
        ExprKind::Conditional {
            guard,
            then_expr,
            else_expr,
        } => {
            let guard = gen_expression(compiler, guard)?;
            let then_expr = gen_expression(compiler, then_expr)?;
            let else_expr = gen_expression(compiler, else_expr)?;
            Ok(format!("({} ? {} : {})", guard, then_expr, else_expr))
        }
        ExprKind::Unary { operator, operand } => {
            gen_unary(compiler, *operator, operand, expression.get_span())
        }
        ExprKind::Binary {
            left,
            operator,
            right,
        } => gen_binary(compiler, left, *operator, right, expression.get_span()),
        ExprKind::Postfix {
            base,
            pixel,
            channel,
        } => gen_postfix(compiler, base, pixel.as_ref(), *channel, expression.get_span()),
        ExprKind::ExpandedPixel { red, green, blue } => {
            let red = gen_expression(compiler, red)?;
            let green = gen_expression(compiler, green)?;
            let blue = gen_expression(compiler, blue)?;
            Ok(call(runtime::PIXEL_PACK, &[&red, &green, &blue]))
        }
    }
}

fn gen_unary(
    compiler: &Compiler,
    operator: Operator,
    operand: &Expr,
    span: &Span,
) -> Result<String, Error> {
    let value = gen_expression(compiler, operand)?;

    match (operator, operand.ty) {
        (Operator::Plus | Operator::Minus, Type::Int) => {
            Ok(format!("({}{})", operator.symbol(), value))
        }
        (Operator::Bang, Type::Boolean) => Ok(format!("(!{})", value)),
        (Operator::Width, Type::Image) => Ok(format!("({}.getWidth())", value)),
        (Operator::Height, Type::Image) => Ok(format!("({}.getHeight())", value)),
        _ => Err(unsupported_operator(
            operator,
            operand.ty.to_string(),
            span,
        )),
    }
}

/// Binary operators, dispatched on the operand types.
///
/// Native Java operators are only used where the static types guarantee they
/// mean the same thing as in the source language; everything involving
/// pixels or images goes through a named runtime operation.
fn gen_binary(
    compiler: &Compiler,
    left: &Expr,
    operator: Operator,
    right: &Expr,
    span: &Span,
) -> Result<String, Error> {
    let left_code = gen_expression(compiler, left)?;
    let right_code = gen_expression(compiler, right)?;
    let operands = format!("{} and {}", left.ty, right.ty);

    match (left.ty, right.ty) {
        (Type::Image, Type::Image) => {
            if operator == Operator::Eq {
                Ok(call(runtime::IMAGE_EQUALS, &[&left_code, &right_code]))
            } else {
                gen_runtime_op(
                    runtime::IMAGE_IMAGE_OP,
                    operator,
                    &left_code,
                    &right_code,
                    false,
                    &operands,
                    span,
                )
            }
        }
        (Type::Image, Type::Pixel) => gen_runtime_op(
            runtime::IMAGE_PIXEL_OP,
            operator,
            &left_code,
            &right_code,
            false,
            &operands,
            span,
        ),
        (Type::Pixel, Type::Image) => gen_runtime_op(
            runtime::IMAGE_PIXEL_OP,
            operator,
            &right_code,
            &left_code,
            true,
            &operands,
            span,
        ),
        (Type::Image, Type::Int) => gen_runtime_op(
            runtime::IMAGE_SCALAR_OP,
            operator,
            &left_code,
            &right_code,
            false,
            &operands,
            span,
        ),
        (Type::Int, Type::Image) => gen_runtime_op(
            runtime::IMAGE_SCALAR_OP,
            operator,
            &right_code,
            &left_code,
            true,
            &operands,
            span,
        ),
        (Type::Pixel, Type::Pixel) => {
            if operator == Operator::Eq {
                Ok(call(
                    runtime::PIXEL_BOOLEAN_OP,
                    &[runtime::PIXEL_EQUALS_TAG, &left_code, &right_code],
                ))
            } else {
                gen_runtime_op(
                    runtime::PIXEL_PIXEL_OP,
                    operator,
                    &left_code,
                    &right_code,
                    false,
                    &operands,
                    span,
                )
            }
        }
        (Type::Pixel, Type::Int) => gen_runtime_op(
            runtime::PIXEL_INT_OP,
            operator,
            &left_code,
            &right_code,
            false,
            &operands,
            span,
        ),
        (Type::Int, Type::Pixel) => gen_runtime_op(
            runtime::PIXEL_INT_OP,
            operator,
            &right_code,
            &left_code,
            true,
            &operands,
            span,
        ),
        (left_type, right_type) if left_type.is_aggregate() || right_type.is_aggregate() => {
            Err(unsupported_operator(operator, operands, span))
        }
        (left_type, right_type) => {
            if operator == Operator::Eq && left_type == Type::String {
                Ok(format!("{}.equals({})", left_code, right_code))
            } else if operator == Operator::Eq && right_type == Type::String {
                Ok(format!("{}.equals({})", right_code, left_code))
            } else if operator == Operator::Exp {
                let power = call(runtime::MATH_POW, &[&left_code, &right_code]);
                Ok(format!("((int){})", call(runtime::MATH_ROUND, &[&power])))
            } else {
                gen_infix(operator, &left_code, &right_code, &operands, span)
            }
        }
    }
}

/// `function(TAG, aggregate, other)`; `swapped` means the aggregate operand
/// was on the right in the source, which only commutative operators allow.
fn gen_runtime_op(
    function: &str,
    operator: Operator,
    aggregate: &str,
    other: &str,
    swapped: bool,
    operands: &str,
    span: &Span,
) -> Result<String, Error> {
    let tag = runtime::op_tag(operator)
        .filter(|_| !swapped || operator.is_commutative())
        .ok_or_else(|| unsupported_operator(operator, operands.to_string(), span))?;

    Ok(call(function, &[tag, aggregate, other]))
}

fn gen_infix(
    operator: Operator,
    left: &str,
    right: &str,
    operands: &str,
    span: &Span,
) -> Result<String, Error> {
    match operator {
        Operator::Plus
        | Operator::Minus
        | Operator::Times
        | Operator::Div
        | Operator::Mod
        | Operator::And
        | Operator::Or
        | Operator::BitAnd
        | Operator::BitOr
        | Operator::Eq
        | Operator::Lt
        | Operator::Gt
        | Operator::Le
        | Operator::Ge => Ok(format!("({} {} {})", left, operator.symbol(), right)),
        Operator::Exp | Operator::Bang | Operator::Width | Operator::Height => {
            Err(unsupported_operator(operator, operands.to_string(), span))
        }
    }
}

/// `base[x, y]`, `base:channel` and `base[x, y]:channel`.
fn gen_postfix(
    compiler: &Compiler,
    base: &Expr,
    pixel: Option<&PixelSelector>,
    channel: Option<Channel>,
    span: &Span,
) -> Result<String, Error> {
    match (channel, pixel) {
        (Some(channel), None) if base.ty == Type::Image => {
            let image = gen_expression(compiler, base)?;
            Ok(call(runtime::image_channel_extractor(channel), &[&image]))
        }
        (Some(channel), _) => gen_channel_read(compiler, base, pixel, channel),
        (None, Some(_)) => gen_selected_pixel(compiler, base, pixel),
        (None, None) => match base.ty {
            Type::Pixel | Type::Image => gen_expression(compiler, base),
            other => Err(unsupported_selector_base(other, span)),
        },
    }
}

/// Reads one channel of a pixel, either a pixel value or `image[x, y]`.
///
/// Every pixel-channel read goes through here so the emitted shape is always
/// a single `PixelOps.<channel>(...)` call.
pub fn gen_channel_read(
    compiler: &Compiler,
    base: &Expr,
    pixel: Option<&PixelSelector>,
    channel: Channel,
) -> Result<String, Error> {
    let packed = gen_selected_pixel(compiler, base, pixel)?;
    Ok(call(runtime::channel_extractor(channel), &[&packed]))
}

/// The packed pixel denoted by `base` or `base[x, y]`.
fn gen_selected_pixel(
    compiler: &Compiler,
    base: &Expr,
    pixel: Option<&PixelSelector>,
) -> Result<String, Error> {
    match (base.ty, pixel) {
        (Type::Pixel, None) => gen_expression(compiler, base),
        (Type::Image, Some(selector)) => {
            let image = gen_expression(compiler, base)?;
            let (x, y) = gen_pixel_selector(compiler, selector)?;
            Ok(call(runtime::IMAGE_GET_RGB, &[&image, &x, &y]))
        }
        (Type::Pixel, Some(selector)) => Err(unsupported_operator_named(
            "[]",
            "pixel".to_string(),
            &selector.span,
        )),
        (Type::Image, None) => Err(unsupported_operator_named(
            ":",
            "image without a pixel selector".to_string(),
            base.get_span(),
        )),
        (other, _) => Err(unsupported_selector_base(other, base.get_span())),
    }
}

pub fn gen_pixel_selector(
    compiler: &Compiler,
    selector: &PixelSelector,
) -> Result<(String, String), Error> {
    let x = gen_expression(compiler, &selector.x)?;
    let y = gen_expression(compiler, &selector.y)?;
    Ok((x, y))
}

fn unsupported_operator(operator: Operator, operands: String, span: &Span) -> Error {
    unsupported_operator_named(operator.symbol(), operands, span)
}

fn unsupported_operator_named(operator: &str, operands: String, span: &Span) -> Error {
    Error::new(
        ErrorImpl::UnsupportedOperator {
            operator: operator.to_string(),
            operands,
        },
        span.start.clone(),
    )
}

fn unsupported_selector_base(type_: Type, span: &Span) -> Error {
    Error::new(
        ErrorImpl::UnsupportedType {
            type_: type_.to_string(),
            context: "the base of a selector".to_string(),
        },
        span.start.clone(),
    )
}
