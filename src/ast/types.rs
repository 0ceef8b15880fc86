//! Type and operator tags for the typed AST.
//!
//! The static types, operator kinds and color channels are closed sets; the
//! code generator matches on them exhaustively so that adding a variant is a
//! compile-time decision in every lowering rule.

use std::fmt::Display;

/// Static type assigned to a node by the type checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Int,
    Boolean,
    String,
    Pixel,
    Image,
    Void,
}

impl Type {
    pub fn is_aggregate(&self) -> bool {
        matches!(self, Type::Pixel | Type::Image)
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Type::Int => "int",
            Type::Boolean => "boolean",
            Type::String => "string",
            Type::Pixel => "pixel",
            Type::Image => "image",
            Type::Void => "void",
        };
        write!(f, "{}", name)
    }
}

/// Operator tokens as they appear in unary and binary expressions.
///
/// The parser uses one token kind for both positions (`-` is binary minus and
/// unary negation), so not every operator is valid in every position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Plus,
    Minus,
    Times,
    Div,
    Mod,
    Exp,
    And,
    Or,
    BitAnd,
    BitOr,
    Eq,
    Lt,
    Gt,
    Le,
    Ge,
    Bang,
    Width,
    Height,
}

impl Operator {
    /// Source spelling of the operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Times => "*",
            Operator::Div => "/",
            Operator::Mod => "%",
            Operator::Exp => "**",
            Operator::And => "&&",
            Operator::Or => "||",
            Operator::BitAnd => "&",
            Operator::BitOr => "|",
            Operator::Eq => "==",
            Operator::Lt => "<",
            Operator::Gt => ">",
            Operator::Le => "<=",
            Operator::Ge => ">=",
            Operator::Bang => "!",
            Operator::Width => "width",
            Operator::Height => "height",
        }
    }

    /// Operators whose runtime form may take its operands in either order.
    pub fn is_commutative(&self) -> bool {
        matches!(self, Operator::Plus | Operator::Times)
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Color component selected by a channel selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        };
        write!(f, "{}", name)
    }
}
