//! Utility macros for building typed AST nodes.
//!
//! - `MK_EXPR!` - Creates an Expr instance
//! - `MK_BLOCK!` - Creates a Block from a list of statements
//!
//! The type checker and the tests build trees by hand; these macros keep the
//! span plumbing out of the way.

/// Creates an Expr instance.
///
/// # Arguments
///
/// * `$kind` - The ExprKind
/// * `$ty` - The static type assigned by the type checker
/// * `$span` - The source span (defaults to `Span::null()`)
///
/// # Example
///
/// ```ignore
/// let five = MK_EXPR!(ExprKind::NumLit("5".to_string()), Type::Int);
/// ```
#[macro_export]
macro_rules! MK_EXPR {
    ($kind:expr, $ty:expr) => {
        $crate::ast::expressions::Expr::new($kind, $ty, $crate::Span::null())
    };
    ($kind:expr, $ty:expr, $span:expr) => {
        $crate::ast::expressions::Expr::new($kind, $ty, $span)
    };
}

/// Creates a Block from statements, with a null span.
///
/// # Example
///
/// ```ignore
/// let body = MK_BLOCK![Stmt::Write(write_x), Stmt::Return(return_x)];
/// ```
#[macro_export]
macro_rules! MK_BLOCK {
    ($($stmt:expr),* $(,)?) => {
        $crate::ast::ast::Block {
            elems: vec![$($stmt),*],
            span: $crate::Span::null(),
        }
    };
}
