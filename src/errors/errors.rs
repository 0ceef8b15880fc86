use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnsupportedType { .. } => "UnsupportedTypeError",
            ErrorImpl::UnsupportedOperator { .. } => "UnsupportedOperatorError",
            ErrorImpl::UnsupportedConstant { .. } => "UnsupportedConstantError",
            ErrorImpl::UnresolvedName { .. } => "UnresolvedNameError",
            ErrorImpl::InvalidProgramName { .. } => "InvalidProgramNameError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnsupportedType { type_, context } => ErrorTip::Suggestion(format!(
                "Type `{}` has no Java representation as {}",
                type_, context
            )),
            ErrorImpl::UnsupportedOperator { operator, operands } => {
                ErrorTip::Suggestion(format!(
                    "No lowering rule for `{}` applied to {}",
                    operator, operands
                ))
            }
            ErrorImpl::UnsupportedConstant { constant } => {
                ErrorTip::Suggestion(format!("Unknown named constant `{}`", constant))
            }
            ErrorImpl::UnresolvedName { name } => ErrorTip::Suggestion(format!(
                "Name `{}` reached code generation without a declaration, this is a type checker bug",
                name
            )),
            ErrorImpl::InvalidProgramName { name } => ErrorTip::Suggestion(format!(
                "`{}` cannot be used as a Java method name",
                name
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}:{}",
            self.internal_error, self.position.1, self.position.0
        )
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unsupported type {type_} ({context})")]
    UnsupportedType { type_: String, context: String },
    #[error("unsupported operator {operator} for {operands}")]
    UnsupportedOperator { operator: String, operands: String },
    #[error("unsupported constant {constant:?}")]
    UnsupportedConstant { constant: String },
    #[error("unresolved name {name:?}")]
    UnresolvedName { name: String },
    #[error("invalid program name {name:?}")]
    InvalidProgramName { name: String },
}
