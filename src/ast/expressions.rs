use crate::Span;

use super::types::{Channel, Operator, Type};

/// Typed expression node.
///
/// `ty` is the static type assigned by the type checker; the code generator
/// never recomputes it.
#[derive(Debug, Clone)]
pub struct Expr {
    pub kind: ExprKind,
    pub ty: Type,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, ty: Type, span: Span) -> Self {
        Expr { kind, ty, span }
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }

    /// Whether this node is the boolean literal `TRUE`.
    pub fn is_true_literal(&self) -> bool {
        matches!(&self.kind, ExprKind::BooleanLit(text) if text.eq_ignore_ascii_case("true"))
    }
}

#[derive(Debug, Clone)]
pub enum ExprKind {
    /// Integer literal, kept as source text.
    NumLit(String),
    /// String literal including its quotes.
    StringLit(String),
    /// Boolean literal as written (`TRUE` / `FALSE`).
    BooleanLit(String),
    Ident(String),
    /// Named constant such as `Z` or `RED`.
    Const(String),
    Conditional {
        guard: Box<Expr>,
        then_expr: Box<Expr>,
        else_expr: Box<Expr>,
    },
    Unary {
        operator: Operator,
        operand: Box<Expr>,
    },
    Binary {
        left: Box<Expr>,
        operator: Operator,
        right: Box<Expr>,
    },
    /// `base[x, y]`, `base:channel` or both.
    Postfix {
        base: Box<Expr>,
        pixel: Option<PixelSelector>,
        channel: Option<Channel>,
    },
    /// `[red, green, blue]`
    ExpandedPixel {
        red: Box<Expr>,
        green: Box<Expr>,
        blue: Box<Expr>,
    },
}

/// Coordinate pair selecting one pixel of an image.
#[derive(Debug, Clone)]
pub struct PixelSelector {
    pub x: Box<Expr>,
    pub y: Box<Expr>,
    pub span: Span,
}
