use crate::Span;

use super::{
    ast::{Block, NameDef},
    expressions::{Expr, PixelSelector},
    types::{Channel, Type},
};

/// Block element: a declaration or a statement.
#[derive(Debug, Clone)]
pub enum Stmt {
    VarDecl(VarDeclStmt),
    Assignment(AssignmentStmt),
    Write(WriteStmt),
    Return(ReturnStmt),
    If(IfStmt),
    Do(DoStmt),
    Block(BlockStmt),
}

#[derive(Debug, Clone)]
pub struct VarDeclStmt {
    pub name_def: NameDef,
    pub initializer: Option<Expr>,
    pub span: Span,
}

/// Assignment target: a variable with optional pixel and channel selectors.
#[derive(Debug, Clone)]
pub struct LValue {
    pub name: String,
    /// Declared type of the variable, not of the selected part.
    pub var_type: Type,
    pub pixel: Option<PixelSelector>,
    pub channel: Option<Channel>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct AssignmentStmt {
    pub lvalue: LValue,
    pub value: Expr,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct WriteStmt {
    pub expression: Expr,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ReturnStmt {
    pub value: Expr,
    pub span: Span,
}

/// A boolean guard and the block it protects.
#[derive(Debug, Clone)]
pub struct GuardedBlock {
    pub guard: Expr,
    pub block: Block,
    pub span: Span,
}

/// `if g1 -> b1 [] g2 -> b2 fi`
#[derive(Debug, Clone)]
pub struct IfStmt {
    pub guarded_blocks: Vec<GuardedBlock>,
    pub span: Span,
}

/// `do g1 -> b1 [] g2 -> b2 od`
#[derive(Debug, Clone)]
pub struct DoStmt {
    pub guarded_blocks: Vec<GuardedBlock>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct BlockStmt {
    pub block: Block,
    pub span: Span,
}
