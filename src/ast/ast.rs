use std::slice::Iter;

use crate::Span;

use super::{expressions::Expr, statements::Stmt, types::Type};

/// Root node: one program compiles to one Java method.
#[derive(Debug, Clone)]
pub struct Program {
    pub name: String,
    pub return_type: Type,
    pub params: Vec<NameDef>,
    pub block: Block,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct Block {
    pub elems: Vec<Stmt>,
    pub span: Span,
}

impl Block {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.elems.iter()
    }
}

/// Typed name introduced by a parameter or a declaration.
#[derive(Debug, Clone)]
pub struct NameDef {
    pub name: String,
    pub var_type: Type,
    pub dimension: Option<Dimension>,
    pub span: Span,
}

/// `[width, height]` suffix on an image declaration.
#[derive(Debug, Clone)]
pub struct Dimension {
    pub width: Expr,
    pub height: Expr,
    pub span: Span,
}
